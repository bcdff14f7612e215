//! Quote building: latest price plus percentage changes at lookback horizons.
//!
//! The anchor is the chronologically last point. For each horizon the
//! reference is the point closest to `anchor - horizon`, chosen among the
//! points strictly older than the anchor. Points sharing the anchor's
//! timestamp (the same day delivered in both payload layouts) are never
//! references. Equidistant candidates resolve to the earlier one in
//! ascending order.
//!
//! Provider commodity series are daily, so the 1h and 4h slots land on the
//! nearest previous day rather than a true intraday delta.

use time::Duration;

use crate::{Commodity, Quote, TimeSeriesPoint, UtcDateTime};

/// Lookback durations feeding the three change slots of a [`Quote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizons {
    /// Feeds `change1hPct`.
    pub short: Duration,
    /// Feeds `change4hPct`.
    pub medium: Duration,
    /// Feeds `change24hPct`.
    pub long: Duration,
}

impl Default for Horizons {
    fn default() -> Self {
        Self {
            short: Duration::hours(1),
            medium: Duration::hours(4),
            long: Duration::hours(24),
        }
    }
}

impl Horizons {
    pub const fn new(short: Duration, medium: Duration, long: Duration) -> Self {
        Self {
            short,
            medium,
            long,
        }
    }

    pub const fn as_array(self) -> [Duration; 3] {
        [self.short, self.medium, self.long]
    }
}

/// Builds the quote for one commodity from its points, in any order.
pub fn build_quote(commodity: Commodity, points: &[TimeSeriesPoint], horizons: Horizons) -> Quote {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    let Some((anchor, rest)) = sorted.split_last() else {
        return Quote::empty(commodity);
    };
    let history = &rest[..rest.partition_point(|point| point.timestamp < anchor.timestamp)];

    let [short, medium, long] =
        horizons.as_array().map(|horizon| change_over(anchor, history, horizon));

    Quote {
        symbol_id: commodity,
        display_name: commodity.display_name().to_owned(),
        current_price: Some(anchor.price),
        change_1h_pct: short,
        change_4h_pct: medium,
        change_24h_pct: long,
    }
}

/// Percentage change from the reference point selected for `horizon` to `anchor`.
///
/// `history` must be sorted ascending and hold only points older than the anchor.
pub fn change_over(
    anchor: &TimeSeriesPoint,
    history: &[TimeSeriesPoint],
    horizon: Duration,
) -> Option<f64> {
    let target = anchor.timestamp.checked_sub(horizon)?;
    let reference = nearest_point(history, target)?;
    percent_change(reference.price, anchor.price)
}

/// Point with the smallest absolute distance to `target`; first wins on ties.
pub fn nearest_point(points: &[TimeSeriesPoint], target: UtcDateTime) -> Option<&TimeSeriesPoint> {
    let mut best: Option<(&TimeSeriesPoint, Duration)> = None;
    for point in points {
        let distance = point.timestamp.distance(target);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((point, distance)),
        }
    }
    best.map(|(point, _)| point)
}

/// `(current - reference) / reference * 100`, absent for a zero reference.
pub fn percent_change(reference: f64, current: f64) -> Option<f64> {
    if reference == 0.0 {
        return None;
    }
    Some((current - reference) / reference * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(input: &str, price: f64) -> TimeSeriesPoint {
        TimeSeriesPoint::new(UtcDateTime::parse(input).expect("valid timestamp"), price)
    }

    #[test]
    fn empty_series_yields_identity_only_quote() {
        let quote = build_quote(Commodity::Copper, &[], Horizons::default());
        assert_eq!(quote, Quote::empty(Commodity::Copper));
        assert_eq!(quote.display_name, "Copper");
    }

    #[test]
    fn single_point_has_price_but_no_changes() {
        let quote = build_quote(
            Commodity::Gold,
            &[point("2024-01-01T00:00:00Z", 2050.0)],
            Horizons::default(),
        );
        assert_eq!(quote.current_price, Some(2050.0));
        assert_eq!(quote.change_1h_pct, None);
        assert_eq!(quote.change_4h_pct, None);
        assert_eq!(quote.change_24h_pct, None);
    }

    #[test]
    fn day_over_day_change_is_ten_percent() {
        let quote = build_quote(
            Commodity::Wti,
            &[
                point("2024-01-02T00:00:00Z", 110.0),
                point("2024-01-01T00:00:00Z", 100.0),
            ],
            Horizons::default(),
        );
        assert_eq!(quote.current_price, Some(110.0));
        let change = quote.change_24h_pct.expect("24h change present");
        assert!((change - 10.0).abs() < 1e-9, "got {change}");
    }

    #[test]
    fn short_horizons_over_daily_data_use_previous_day() {
        let quote = build_quote(
            Commodity::Wheat,
            &[
                point("2024-01-01T00:00:00Z", 200.0),
                point("2024-01-02T00:00:00Z", 190.0),
                point("2024-01-03T00:00:00Z", 209.0),
            ],
            Horizons::default(),
        );
        let one_hour = quote.change_1h_pct.expect("1h change present");
        let four_hour = quote.change_4h_pct.expect("4h change present");
        assert!((one_hour - 10.0).abs() < 1e-9);
        assert!((four_hour - 10.0).abs() < 1e-9);
    }

    #[test]
    fn same_day_duplicates_of_the_anchor_are_not_references() {
        let quote = build_quote(
            Commodity::Wti,
            &[
                point("2024-01-01T00:00:00Z", 100.0),
                point("2024-01-02T00:00:00Z", 110.0),
                point("2024-01-02T00:00:00Z", 110.0),
            ],
            Horizons::default(),
        );
        for change in [quote.change_1h_pct, quote.change_4h_pct, quote.change_24h_pct] {
            let change = change.expect("change present");
            assert!((change - 10.0).abs() < 1e-9, "got {change}");
        }
    }

    #[test]
    fn single_day_reported_twice_has_no_changes() {
        let quote = build_quote(
            Commodity::Gold,
            &[
                point("2024-01-02T00:00:00Z", 2050.0),
                point("2024-01-02T00:00:00Z", 2050.0),
            ],
            Horizons::default(),
        );
        assert_eq!(quote.current_price, Some(2050.0));
        assert_eq!(quote.change_1h_pct, None);
        assert_eq!(quote.change_4h_pct, None);
        assert_eq!(quote.change_24h_pct, None);
    }

    #[test]
    fn zero_reference_price_leaves_change_absent() {
        let quote = build_quote(
            Commodity::Natgas,
            &[
                point("2024-01-01T00:00:00Z", 0.0),
                point("2024-01-02T00:00:00Z", 2.5),
            ],
            Horizons::default(),
        );
        assert_eq!(quote.current_price, Some(2.5));
        assert_eq!(quote.change_24h_pct, None);
    }

    #[test]
    fn equidistant_candidates_pick_the_earlier_point() {
        let points = [
            point("2024-01-01T00:00:00Z", 1.0),
            point("2024-01-01T02:00:00Z", 2.0),
        ];
        let target = UtcDateTime::parse("2024-01-01T01:00:00Z").expect("valid");
        let nearest = nearest_point(&points, target).expect("has points");
        assert_eq!(nearest.price, 1.0);
    }

    #[test]
    fn custom_horizons_are_respected() {
        let horizons = Horizons::new(Duration::days(1), Duration::days(2), Duration::days(7));
        let quote = build_quote(
            Commodity::Brent,
            &[
                point("2024-01-01T00:00:00Z", 50.0),
                point("2024-01-06T00:00:00Z", 80.0),
                point("2024-01-07T00:00:00Z", 90.0),
                point("2024-01-08T00:00:00Z", 100.0),
            ],
            horizons,
        );
        assert!((quote.change_1h_pct.expect("present") - 11.111_111_111).abs() < 1e-6);
        assert!((quote.change_4h_pct.expect("present") - 25.0).abs() < 1e-9);
        assert!((quote.change_24h_pct.expect("present") - 100.0).abs() < 1e-9);
    }

    #[test]
    fn percent_change_guards_zero_only() {
        assert_eq!(percent_change(0.0, 5.0), None);
        let tiny = percent_change(1e-12, 1.0).expect("near zero is not special");
        assert!(tiny > 0.0);
    }
}
