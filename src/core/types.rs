use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::StatementError;

/// Pricing category of a play.
///
/// A closed set: pricing and credit rules exist for exactly these variants,
/// so a constructed [`Play`] can never hit an "unknown type" case at
/// calculation time. Foreign tags are rejected at the construction boundary
/// by [`PlayCategory::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayCategory {
    Tragedy,
    Comedy,
}

impl PlayCategory {
    /// Lowercase tag used in serialized catalogs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Tragedy => "tragedy",
            Self::Comedy => "comedy",
        }
    }

    /// Parse from a tag string, rejecting anything outside the closed set.
    pub fn from_code(code: &str) -> Result<Self, StatementError> {
        match code {
            "tragedy" => Ok(Self::Tragedy),
            "comedy" => Ok(Self::Comedy),
            other => Err(StatementError::UnknownPlayType(other.to_string())),
        }
    }
}

/// A performable work and its pricing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name, printed on statement lines.
    pub name: String,
    /// Pricing category.
    pub category: PlayCategory,
}

impl Play {
    pub fn new(name: impl Into<String>, category: PlayCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

/// One staging of a play for a given audience size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Key of the play in the catalog this performance is billed against.
    pub play_id: String,
    /// Number of seats sold.
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's performances to be billed together.
///
/// Performance order is significant: it determines the order of printed
/// statement lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Customer name, printed in the statement header.
    pub customer: String,
    /// Billed performances, in print order.
    pub performances: Vec<Performance>,
}

/// Immutable mapping from play identifier to [`Play`].
///
/// Keys are unique; iteration order is the key order, so any derived output
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plays: BTreeMap<String, Play>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a play, failing with [`StatementError::UnknownPlay`] if the
    /// identifier has no catalog entry.
    pub fn play(&self, play_id: &str) -> Result<&Play, StatementError> {
        self.plays
            .get(play_id)
            .ok_or_else(|| StatementError::UnknownPlay(play_id.to_string()))
    }

    pub fn contains(&self, play_id: &str) -> bool {
        self.plays.contains_key(play_id)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Play)> {
        self.plays.iter().map(|(id, play)| (id.as_str(), play))
    }

    pub(crate) fn insert(&mut self, play_id: String, play: Play) -> Option<Play> {
        self.plays.insert(play_id, play)
    }
}
