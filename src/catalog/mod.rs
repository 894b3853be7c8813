//! Canonical catalog shapes and the machinery that produces them.
//!
//! This module owns the two stable view-model shapes (`Show`, `Episode`),
//! the HTTP client that talks to the TVMaze catalog, and the mappers that
//! validate raw API records and convert them into the canonical shapes.

mod client;
mod mapper;

pub use client::{NetworkError, TvMazeClient};
pub use mapper::{ShapeError, to_episode, to_show};

use serde::{Deserialize, Serialize};

/// Canonical representation of one catalog entry as used by the UI.
///
/// Shows are transient view-model values: a new search replaces the whole
/// result set, nothing is persisted across searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Catalog identifier, unique per entry
    pub id: u64,
    /// Display name
    pub name: String,
    /// Summary text, kept verbatim (may contain HTML markup)
    pub summary: String,
    /// Medium-size artwork URL; `None` when the catalog has no image.
    /// The view substitutes a placeholder, the model keeps the absence.
    pub image: Option<String>,
}

/// Canonical representation of one episode within a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode identifier, unique within a show
    pub id: u64,
    /// Episode title
    pub name: String,
    /// Season label as served by the catalog, treated as opaque display text
    pub season: String,
    /// Episode number, always a displayable string even when the catalog
    /// serves it as a JSON number
    pub number: String,
}
