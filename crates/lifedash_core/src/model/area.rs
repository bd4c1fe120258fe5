//! Life area tag used to group widgets on the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Filtering tag with no behavioural weight.
///
/// Unknown tags written by older clients are kept verbatim in `Custom` so
/// that a load/save cycle never drops them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LifeArea {
    Personal,
    University,
    Tutoring,
    Custom(String),
}

impl LifeArea {
    /// The three areas shown as dashboard sections.
    pub const SECTIONS: [LifeArea; 3] = [Self::Personal, Self::University, Self::Tutoring];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Personal => "personal",
            Self::University => "university",
            Self::Tutoring => "tutoring",
            Self::Custom(value) => value.as_str(),
        }
    }
}

impl From<String> for LifeArea {
    fn from(value: String) -> Self {
        match value.as_str() {
            "personal" => Self::Personal,
            "university" => Self::University,
            "tutoring" => Self::Tutoring,
            _ => Self::Custom(value),
        }
    }
}

impl From<LifeArea> for String {
    fn from(value: LifeArea) -> Self {
        match value {
            LifeArea::Custom(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for LifeArea {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Area selector used by widget views (`"all"` or one area).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AreaFilter {
    #[default]
    All,
    Only(LifeArea),
}

impl AreaFilter {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => Self::All,
            other => Self::Only(LifeArea::from(other.to_string())),
        }
    }

    pub fn matches(&self, area: Option<&LifeArea>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => area == Some(wanted),
        }
    }
}

/// Records that may carry a life area tag.
pub trait AreaTagged {
    fn life_area(&self) -> Option<&LifeArea>;
}
