//! Profile view selection

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Which part of the profile the host screen asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    Personal,
    Service,
    Financial,
    Documents,
    All,
    Profile,
    /// Anything else; only the base header is produced
    #[default]
    Unrecognized,
}

/// A renderable section of the employee profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ProfileSection {
    Personal,
    Service,
    Financial,
    Documents,
}

impl ViewMode {
    /// Parse a selector case-insensitively; unknown selectors never fail
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "personal" => Self::Personal,
            "service" => Self::Service,
            "financial" => Self::Financial,
            "documents" => Self::Documents,
            "all" => Self::All,
            "profile" => Self::Profile,
            _ => Self::Unrecognized,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Service => "service",
            Self::Financial => "financial",
            Self::Documents => "documents",
            Self::All => "all",
            Self::Profile => "profile",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Sections computed for this mode, in render order
    pub const fn sections(&self) -> &'static [ProfileSection] {
        match self {
            Self::Personal => &[ProfileSection::Personal],
            Self::Service => &[ProfileSection::Service],
            Self::Financial => &[ProfileSection::Financial],
            Self::Documents => &[ProfileSection::Documents],
            Self::All => &[
                ProfileSection::Personal,
                ProfileSection::Service,
                ProfileSection::Financial,
                ProfileSection::Documents,
            ],
            Self::Profile => &[ProfileSection::Personal, ProfileSection::Service],
            Self::Unrecognized => &[],
        }
    }

    pub fn includes(&self, section: ProfileSection) -> bool {
        self.sections().contains(&section)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ViewMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ViewMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
