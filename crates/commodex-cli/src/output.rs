use std::fmt::Write as _;

use commodex_core::{BoardSnapshot, Quote, Sector};

use crate::cli::OutputFormat;
use crate::commands::{CommandResult, Origin};
use crate::error::CliError;

/// Shown in place of any value the board could not compute.
pub const ABSENT: &str = "—";

pub fn render(
    result: &CommandResult,
    format: OutputFormat,
    pretty: bool,
    sector: Option<Sector>,
) -> Result<(), CliError> {
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    let snapshot = filter_sector(&result.snapshot, sector);
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&snapshot)?
            } else {
                serde_json::to_string(&snapshot)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => print!("{}", render_table(&snapshot, result.origin)),
    }

    Ok(())
}

fn filter_sector(snapshot: &BoardSnapshot, sector: Option<Sector>) -> BoardSnapshot {
    let Some(sector) = sector else {
        return snapshot.clone();
    };

    BoardSnapshot {
        data: snapshot
            .data
            .iter()
            .filter(|quote| quote.symbol_id.sector() == sector)
            .cloned()
            .collect(),
        ..snapshot.clone()
    }
}

/// One section per sector, in sector order; empty sectors are omitted.
pub fn render_table(snapshot: &BoardSnapshot, origin: Origin) -> String {
    let mut out = String::new();

    for sector in Sector::ALL {
        let quotes = snapshot
            .data
            .iter()
            .filter(|quote| quote.symbol_id.sector() == sector)
            .collect::<Vec<_>>();
        if quotes.is_empty() {
            continue;
        }

        let _ = writeln!(out, "[{}]", sector.title());
        let _ = writeln!(
            out,
            "  {:<18} {:>12} {:>9} {:>9} {:>9}",
            "commodity", "price", "1h", "4h", "24h"
        );
        for quote in quotes {
            let _ = writeln!(out, "{}", render_row(quote));
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "source: {} | generated_at: {}",
        origin_label(origin),
        snapshot.generated_at
    );
    out
}

fn render_row(quote: &Quote) -> String {
    format!(
        "  {:<18} {:>12} {:>9} {:>9} {:>9}",
        quote.display_name,
        format_price(quote.current_price),
        format_change(quote.change_1h_pct),
        format_change(quote.change_4h_pct),
        format_change(quote.change_24h_pct),
    )
}

pub fn format_price(price: Option<f64>) -> String {
    price.map_or_else(|| ABSENT.to_owned(), |value| format!("{value:.2}"))
}

pub fn format_change(change: Option<f64>) -> String {
    change.map_or_else(|| ABSENT.to_owned(), |value| format!("{value:+.2}%"))
}

const fn origin_label(origin: Origin) -> &'static str {
    match origin {
        Origin::Provider => "provider",
        Origin::Proxy => "proxy",
        Origin::Placeholder => "placeholder",
    }
}
