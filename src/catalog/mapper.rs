//! Raw TVMaze record schemas and the mappers onto the canonical shapes.
//!
//! Validation happens at this boundary: a record that does not match its
//! schema becomes an explicit `ShapeError` instead of a silent missing-field
//! failure further down the pipeline.

use super::{Episode, Show};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors produced when a raw record does not match its expected schema.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A search result did not match the expected show schema
    #[error("show record does not match the expected shape: {0}")]
    Show(serde_json::Error),

    /// An episode record did not match the expected episode schema
    #[error("episode record does not match the expected shape: {0}")]
    Episode(serde_json::Error),
}

/// One element of the `/search/shows` response array.
///
/// The search endpoint wraps each show in a result envelope; the relevance
/// score alongside it is ignored.
#[derive(Debug, Deserialize)]
struct RawSearchResult {
    show: RawShow,
}

/// The show payload nested inside a search result.
#[derive(Debug, Deserialize)]
struct RawShow {
    id: u64,
    name: String,
    /// Summary in HTML format (may be null)
    summary: Option<String>,
    /// Artwork container (null when the catalog has no image)
    image: Option<RawImage>,
}

/// The artwork container of a show record.
#[derive(Debug, Deserialize)]
struct RawImage {
    /// Medium-size artwork URL, the only variant the widget uses
    medium: String,
}

/// One element of the `/shows/{id}/episodes` response array.
#[derive(Debug, Deserialize)]
struct RawEpisode {
    id: u64,
    /// Episode title (may be null for unnamed specials)
    name: Option<String>,
    season: ScalarText,
    number: ScalarText,
}

/// A field the catalog serves as either a JSON number or a JSON string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScalarText {
    Number(serde_json::Number),
    Text(String),
}

impl ScalarText {
    fn into_display_string(self) -> String {
        match self {
            ScalarText::Number(number) => number.to_string(),
            ScalarText::Text(text) => text,
        }
    }
}

/// Maps one raw search result onto the canonical `Show` shape.
///
/// Identifier, name and summary are taken verbatim (a null summary becomes
/// the empty string). Artwork is the nested medium-size image URL; when the
/// image container is null or absent the artwork stays `None` — substituting
/// the placeholder is the view's concern, not the mapper's.
pub fn to_show(raw: Value) -> Result<Show, ShapeError> {
    let record: RawSearchResult = serde_json::from_value(raw).map_err(ShapeError::Show)?;
    let show = record.show;

    Ok(Show {
        id: show.id,
        name: show.name,
        summary: show.summary.unwrap_or_default(),
        image: show.image.map(|image| image.medium),
    })
}

/// Maps one raw episode record onto the canonical `Episode` shape.
///
/// `season` and `number` are coerced to display strings unconditionally,
/// whether the catalog sent them as numbers or as text.
pub fn to_episode(raw: Value) -> Result<Episode, ShapeError> {
    let record: RawEpisode = serde_json::from_value(raw).map_err(ShapeError::Episode)?;

    Ok(Episode {
        id: record.id,
        name: record.name.unwrap_or_else(|| "Unknown".to_string()),
        season: record.season.into_display_string(),
        number: record.number.into_display_string(),
    })
}
