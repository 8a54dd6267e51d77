use std::{fmt, str::FromStr};

use thiserror::Error;

/// Visual variant of a [`Notice`](crate::client::component::Notice).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mood {
    #[default]
    Default,
    Danger,
    Success,
}

/// Border and background classes for one mood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoodPalette {
    pub border: &'static str,
    pub background: &'static str,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Default, Mood::Danger, Mood::Success];

    pub fn palette(self) -> MoodPalette {
        match self {
            Mood::Default => MoodPalette {
                border: "border-neutral",
                background: "bg-base-200",
            },
            Mood::Danger => MoodPalette {
                border: "border-error",
                background: "bg-error/10",
            },
            Mood::Success => MoodPalette {
                border: "border-success",
                background: "bg-success/10",
            },
        }
    }

    /// ARIA role; only danger notices interrupt screen readers.
    pub fn role(self) -> &'static str {
        match self {
            Mood::Danger => "alert",
            Mood::Default | Mood::Success => "status",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Default => "default",
            Mood::Danger => "danger",
            Mood::Success => "success",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown notice mood '{0}', expected one of: default, danger, success")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}
