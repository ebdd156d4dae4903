//! Identifier types for players, plots and areas
//!
//! These newtypes keep the three identifier spaces from mixing and give
//! each one a stable textual representation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a player (actor or plot owner)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Generate a new random PlayerId
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse from a canonical UUID string
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a plot coordinate string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a plot coordinate: {input}")]
pub struct PlotIdParseError {
    pub input: String,
}

/// Coordinate identity of a plot within its area
///
/// Textual form is `x;z` (the `,` separator is accepted on input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlotId {
    pub x: i32,
    pub z: i32,
}

impl PlotId {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Parse a coordinate pair separated by `;` or `,`
    ///
    /// # Errors
    ///
    /// Returns `PlotIdParseError` if the input is not two integers joined
    /// by a single separator.
    pub fn parse(s: &str) -> Result<Self, PlotIdParseError> {
        let err = || PlotIdParseError {
            input: s.to_string(),
        };
        let (x, z) = s
            .split_once(';')
            .or_else(|| s.split_once(','))
            .ok_or_else(err)?;
        let x = x.trim().parse::<i32>().map_err(|_| err())?;
        let z = z.trim().parse::<i32>().map_err(|_| err())?;
        Ok(Self { x, z })
    }
}

impl std::fmt::Display for PlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{}", self.x, self.z)
    }
}

/// Name of an area partitioning the plot space
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AreaId(String);

impl AreaId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AreaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
