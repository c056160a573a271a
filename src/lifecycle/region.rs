use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Franchise region. Selects which regional store serves an order.
///
/// Serialized in kebab case (`"new-york"`, `"chicago"`) so it can be read
/// straight from a config file or request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    NewYork,
    Chicago,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::NewYork, Region::Chicago];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NewYork => "new-york",
            Region::Chicago => "chicago",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that names no region.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_regions() {
        assert_eq!("new-york".parse::<Region>(), Ok(Region::NewYork));
        assert_eq!("chicago".parse::<Region>(), Ok(Region::Chicago));
    }

    #[test]
    fn test_parse_unknown_region() {
        assert_eq!(
            "Chicago".parse::<Region>(),
            Err(UnknownRegion("Chicago".to_string()))
        );
        assert!("boston".parse::<Region>().is_err());
    }

    #[test]
    fn test_serde_matches_display() {
        for region in Region::ALL {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region));

            let back: Region = serde_json::from_str(&json).unwrap();
            assert_eq!(back, region);
        }
    }
}
