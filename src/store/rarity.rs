use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Card rarity, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    #[serde(rename = "Rare Holo")]
    RareHolo,
    #[serde(rename = "Reverse Holo")]
    ReverseHolo,
    #[serde(rename = "Ultra Rare")]
    UltraRare,
    #[serde(rename = "Secret Rare")]
    SecretRare,
    Promo,
    #[serde(rename = "Shiny Rare")]
    ShinyRare,
}

impl Rarity {
    pub const ALL: [Rarity; 9] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::RareHolo,
        Rarity::ReverseHolo,
        Rarity::UltraRare,
        Rarity::SecretRare,
        Rarity::Promo,
        Rarity::ShinyRare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::RareHolo => "Rare Holo",
            Rarity::ReverseHolo => "Reverse Holo",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::SecretRare => "Secret Rare",
            Rarity::Promo => "Promo",
            Rarity::ShinyRare => "Shiny Rare",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown rarity: {0}")]
pub struct ParseRarityError(pub String);

impl FromStr for Rarity {
    type Err = ParseRarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseRarityError(s.to_string()))
    }
}
