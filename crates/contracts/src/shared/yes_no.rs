use serde::{Deserialize, Serialize};

/// String-encoded boolean used by the backend for lifecycle flags
/// (`rActiveYN`, `transferYN`, and feature flags such as `superSpecialityYN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "Y")]
    Yes,
    #[default]
    #[serde(rename = "N")]
    No,
}

impl YesNo {
    pub fn from_bool(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }

    /// `Y`, for serde defaults of flags that start set
    pub fn yes() -> Self {
        YesNo::Yes
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }

    pub fn toggled(&self) -> Self {
        YesNo::from_bool(!self.is_yes())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Y",
            YesNo::No => "N",
        }
    }

    /// Accepts `Y`/`N` in either case; anything else is rejected
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Y" | "y" => Some(YesNo::Yes),
            "N" | "n" => Some(YesNo::No),
            _ => None,
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        YesNo::from_bool(value)
    }
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
