use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The record streams the service accepts.
///
/// Each category has its own store/retrieve endpoints, its own ordered list
/// in the index file, and its own slot on the ledger.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RecordCategory {
    /// Periodic traffic telemetry (vehicle positions, speeds, lanes).
    Traffic,
    /// Detected accident events.
    Accident,
}

impl RecordCategory {
    /// All categories, in index-file order.
    pub const ALL: [Self; 2] = [Self::Traffic, Self::Accident];

    /// Lowercase name used as the index-file key and in URL paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Traffic => "traffic",
            Self::Accident => "accident",
        }
    }
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RecordCategory {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "traffic" => Ok(Self::Traffic),
            "accident" => Ok(Self::Accident),
            other => Err(TypeError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_and_display_agree() {
        for category in RecordCategory::ALL {
            assert_eq!(category.as_str(), format!("{category}"));
        }
    }

    #[test]
    fn from_str_roundtrip() {
        for category in RecordCategory::ALL {
            let parsed: RecordCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        let result: Result<RecordCategory, _> = "weather".parse();
        assert!(matches!(result, Err(TypeError::UnknownCategory(_))));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&RecordCategory::Traffic).unwrap();
        assert_eq!(json, "\"traffic\"");
        let parsed: RecordCategory = serde_json::from_str("\"accident\"").unwrap();
        assert_eq!(parsed, RecordCategory::Accident);
    }
}
