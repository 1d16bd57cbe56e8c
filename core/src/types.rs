//! Domain DTOs for the character API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Unknown
//! JSON fields are ignored so that additions on the server side never break
//! decoding.

use serde::{Deserialize, Serialize};

/// A named place a character comes from or was last seen at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Place {
    pub name: String,
    pub url: String,
}

/// A single character returned by the API.
///
/// `status` is kept as the free text the server sent; use
/// [`Character::life_status`] for a classified view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    /// Sub-species or variant. Often empty; absent on the wire means empty.
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: String,
    pub origin: Place,
    pub location: Place,
    pub image: String,
    pub episode: Vec<String>,
    pub url: String,
    pub created: String,
}

/// Classified form of [`Character::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStatus {
    Alive,
    Dead,
    Unknown,
}

impl Character {
    /// Case-insensitive classification of the status text. Anything that is
    /// neither "alive" nor "dead" is `Unknown`.
    pub fn life_status(&self) -> LifeStatus {
        match self.status.to_ascii_lowercase().as_str() {
            "alive" => LifeStatus::Alive,
            "dead" => LifeStatus::Dead,
            _ => LifeStatus::Unknown,
        }
    }

    /// Number of episodes the character appears in.
    pub fn appearances(&self) -> usize {
        self.episode.len()
    }
}

/// Pagination metadata attached to every page of results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of characters as returned by `GET /character/?page=N`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}
