//! Common types used across the seodesk system

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Feature tier selected by the user.
///
/// Gating of surfaces (e.g. client management in agency mode) is a
/// presentation concern handled by the CLI; the mode itself is just a
/// persisted preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Beginner,
    Pro,
    Agency,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Beginner => "beginner",
            Mode::Pro => "pro",
            Mode::Agency => "agency",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Mode::Beginner),
            "pro" => Ok(Mode::Pro),
            "agency" => Ok(Mode::Agency),
            other => Err(Error::InvalidInput(format!(
                "unknown mode '{}' (expected beginner, pro or agency)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in [Mode::Beginner, Mode::Pro, Mode::Agency] {
            let parsed: Mode = mode.as_str().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_mode_rejects_unknown() {
        assert!("expert".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_serde_is_lowercase() {
        let json = serde_json::to_string(&Mode::Agency).unwrap();
        assert_eq!(json, "\"agency\"");
    }
}
