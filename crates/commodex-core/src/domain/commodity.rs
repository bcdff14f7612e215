use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// The fixed set of commodities tracked by the board, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Commodity {
    Wti,
    Brent,
    Natgas,
    Gold,
    Silver,
    Copper,
    Wheat,
}

/// Dashboard grouping used by the terminal tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Energy,
    Metals,
    Agriculture,
}

impl Sector {
    pub const ALL: [Self; 3] = [Self::Energy, Self::Metals, Self::Agriculture];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Metals => "metals",
            Self::Agriculture => "agriculture",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Metals => "Metals",
            Self::Agriculture => "Agriculture",
        }
    }
}

impl Display for Sector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "energy" => Ok(Self::Energy),
            "metals" => Ok(Self::Metals),
            "agriculture" => Ok(Self::Agriculture),
            other => Err(ValidationError::InvalidSector {
                value: other.to_owned(),
            }),
        }
    }
}

/// Query parameters selecting one commodity series on the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderQuery {
    pub function: &'static str,
    pub symbol: Option<&'static str>,
}

impl Commodity {
    pub const ALL: [Self; 7] = [
        Self::Wti,
        Self::Brent,
        Self::Natgas,
        Self::Gold,
        Self::Silver,
        Self::Copper,
        Self::Wheat,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wti => "WTI",
            Self::Brent => "BRENT",
            Self::Natgas => "NATGAS",
            Self::Gold => "GOLD",
            Self::Silver => "SILVER",
            Self::Copper => "COPPER",
            Self::Wheat => "WHEAT",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Wti => "WTI Crude Oil",
            Self::Brent => "Brent Crude Oil",
            Self::Natgas => "Natural Gas",
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Copper => "Copper",
            Self::Wheat => "Wheat",
        }
    }

    pub const fn sector(self) -> Sector {
        match self {
            Self::Wti | Self::Brent | Self::Natgas => Sector::Energy,
            Self::Gold | Self::Silver | Self::Copper => Sector::Metals,
            Self::Wheat => Sector::Agriculture,
        }
    }

    pub const fn provider_query(self) -> ProviderQuery {
        match self {
            Self::Wti => ProviderQuery {
                function: "WTI",
                symbol: None,
            },
            Self::Brent => ProviderQuery {
                function: "BRENT",
                symbol: None,
            },
            Self::Natgas => ProviderQuery {
                function: "NATURAL_GAS",
                symbol: None,
            },
            Self::Gold => ProviderQuery {
                function: "GOLD_SILVER_HISTORY",
                symbol: Some("GOLD"),
            },
            Self::Silver => ProviderQuery {
                function: "GOLD_SILVER_HISTORY",
                symbol: Some("SILVER"),
            },
            Self::Copper => ProviderQuery {
                function: "COPPER",
                symbol: None,
            },
            Self::Wheat => ProviderQuery {
                function: "WHEAT",
                symbol: None,
            },
        }
    }
}

impl Display for Commodity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Commodity {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "WTI" => Ok(Self::Wti),
            "BRENT" => Ok(Self::Brent),
            "NATGAS" | "NATURAL_GAS" => Ok(Self::Natgas),
            "GOLD" => Ok(Self::Gold),
            "SILVER" => Ok(Self::Silver),
            "COPPER" => Ok(Self::Copper),
            "WHEAT" => Ok(Self::Wheat),
            other => Err(ValidationError::UnknownCommodity {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commodity_case_insensitively() {
        assert_eq!(Commodity::from_str(" wti ").expect("must parse"), Commodity::Wti);
        assert_eq!(
            Commodity::from_str("natural_gas").expect("must parse"),
            Commodity::Natgas
        );
    }

    #[test]
    fn rejects_unknown_commodity() {
        let err = Commodity::from_str("PLATINUM").expect_err("must fail");
        assert!(matches!(err, ValidationError::UnknownCommodity { .. }));
    }

    #[test]
    fn precious_metals_share_history_function() {
        let gold = Commodity::Gold.provider_query();
        let silver = Commodity::Silver.provider_query();
        assert_eq!(gold.function, silver.function);
        assert_eq!(gold.symbol, Some("GOLD"));
        assert_eq!(silver.symbol, Some("SILVER"));
        assert_eq!(Commodity::Wti.provider_query().symbol, None);
    }

    #[test]
    fn serializes_as_uppercase_id() {
        let json = serde_json::to_string(&Commodity::Natgas).expect("serializes");
        assert_eq!(json, "\"NATGAS\"");
    }
}
