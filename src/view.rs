//! Terminal panels for search results and episode lists.
//!
//! Both panels own their rendered content and are fully cleared and
//! repopulated on every render pass; nothing is diffed or patched. They
//! write to any `io::Write`, which keeps them testable without a terminal.

use crate::catalog::{Episode, Show};
use std::io::{self, Write};

/// Placeholder artwork URL shown for shows the catalog has no image for.
pub const MISSING_ARTWORK_URL: &str = "https://tinyurl.com/tv-missing";

/// One rendered show entry.
///
/// The card retains the show's catalog id so a later selection can be
/// resolved back to the entry it came from.
#[derive(Debug, Clone, PartialEq)]
struct ShowCard {
    show_id: u64,
    title: String,
    body: String,
}

/// The search-results panel: one card per show, in result order.
#[derive(Debug, Default)]
pub struct ShowListView {
    cards: Vec<ShowCard>,
}

impl ShowListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole panel with one card per show, in input order.
    ///
    /// The panel is cleared first, so rendering the same sequence twice
    /// leaves it in the same state.
    pub fn render(&mut self, shows: &[Show]) {
        self.cards.clear();
        for show in shows {
            self.cards.push(Self::card(show));
        }
    }

    /// Builds one card, substituting the placeholder for absent artwork and
    /// converting the summary's HTML markup into plain terminal text.
    fn card(show: &Show) -> ShowCard {
        let artwork = show.image.as_deref().unwrap_or(MISSING_ARTWORK_URL);
        let summary = nanohtml2text::html2text(&show.summary).trim().to_string();

        let mut body = format!("    Artwork: {}\n", artwork);
        for line in summary.lines() {
            body.push_str("    ");
            body.push_str(line);
            body.push('\n');
        }

        ShowCard {
            show_id: show.id,
            title: show.name.clone(),
            body,
        }
    }

    /// Resolves a card position back to its show id.
    pub fn show_id_at(&self, index: usize) -> Option<u64> {
        self.cards.get(index).map(|card| card.show_id)
    }

    /// Menu labels for the interaction loop, one per card.
    pub fn card_titles(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.title.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Writes the current panel content.
    pub fn write_to(&self, mut out: impl Write) -> io::Result<()> {
        for (index, card) in self.cards.iter().enumerate() {
            writeln!(out, "[{}] {}", index + 1, card.title)?;
            write!(out, "{}", card.body)?;
        }
        Ok(())
    }
}

/// The episode panel: hidden until a show's episodes have been fetched,
/// hidden again whenever a new search replaces the result set.
#[derive(Debug, Default)]
pub struct EpisodePanel {
    entries: Vec<String>,
    visible: bool,
}

impl EpisodePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole panel with one entry per episode, in input order,
    /// and reveals it.
    pub fn render(&mut self, episodes: &[Episode]) {
        self.entries.clear();
        for episode in episodes {
            self.entries.push(format!(
                "- {} (Season {}, Number {})",
                episode.name, episode.season, episode.number
            ));
        }
        self.visible = true;
    }

    /// Hides the panel without discarding its content.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the panel content; a hidden panel writes nothing.
    pub fn write_to(&self, mut out: impl Write) -> io::Result<()> {
        if !self.visible {
            return Ok(());
        }

        writeln!(out, "Episodes:")?;
        for entry in &self.entries {
            writeln!(out, "{}", entry)?;
        }
        Ok(())
    }
}
