// crates/shared-kernel/src/value_objects/region.rs
use serde::{Deserialize, Serialize};

/// Upper-cased region (province) name.
///
/// A missing region cell becomes [`Region::UNKNOWN`]; a present but empty cell
/// stays empty and is reported by [`Region::is_blank`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    pub const UNKNOWN: &'static str = "UNKNOWN";

    pub fn new(name: &str) -> Self {
        Self(Self::normalize(name))
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn from_cell(cell: Option<&str>) -> Self {
        cell.map_or_else(Self::unknown, Self::new)
    }

    /// Canonical form used for both storage and lookups.
    pub fn normalize(name: &str) -> String {
        name.to_uppercase()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
