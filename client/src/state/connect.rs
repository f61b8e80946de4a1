//! Form state for the Letterboxd connect screen.
//!
//! DESIGN
//! ======
//! The screen has two independent forms: a CSV export upload with three
//! optional slots, and an RSS link. Each form's validation runs before any
//! request is built, so a rejected submission never touches the network.

#[cfg(test)]
#[path = "connect_test.rs"]
mod connect_test;

use crate::net::types::{ImportSummary, RssSyncSummary};

/// File handle carried by a CSV slot: the browser `File` when hydrated,
/// nothing during SSR where no file can be picked.
#[cfg(feature = "hydrate")]
pub type CsvHandle = web_sys::File;
#[cfg(not(feature = "hydrate"))]
pub type CsvHandle = ();

pub const NO_FILES_SELECTED: &str = "Please upload at least one CSV file.";
pub const NOT_AUTHENTICATED: &str = "Not authenticated. Please sign in again.";
pub const RSS_INPUT_REQUIRED: &str = "Please enter your Letterboxd username or profile URL.";
pub const IMPORT_SUCCEEDED: &str = "Data imported! Your all-time stats and initial weekly report are ready.";
pub const RSS_LINKED: &str = "RSS linked! Weekly watch reports will sync automatically.";

/// One of the three Letterboxd export files the backend understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CsvSlot {
    Reviews,
    Watchlist,
    Likes,
}

impl CsvSlot {
    pub const ALL: [CsvSlot; 3] = [CsvSlot::Reviews, CsvSlot::Watchlist, CsvSlot::Likes];

    /// Multipart field name.
    #[must_use]
    pub fn form_field(self) -> &'static str {
        match self {
            Self::Reviews => "reviews",
            Self::Watchlist => "watchlist",
            Self::Likes => "likes",
        }
    }

    /// File name as it appears in the Letterboxd export archive.
    #[must_use]
    pub fn export_name(self) -> &'static str {
        match self {
            Self::Reviews => "reviews.csv",
            Self::Watchlist => "watchlist.csv",
            Self::Likes => "films.csv",
        }
    }

    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            Self::Reviews => "Your film ratings & written reviews",
            Self::Watchlist => "Films you want to watch",
            Self::Likes => "Your liked films",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Reviews => "🎬",
            Self::Watchlist => "📋",
            Self::Likes => "❤️",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Reviews => 0,
            Self::Watchlist => 1,
            Self::Likes => 2,
        }
    }
}

/// A picked file.
#[derive(Clone, Debug)]
pub struct CsvSelection<F> {
    pub file_name: String,
    pub handle: F,
}

/// The three upload slots; each holds at most one file.
#[derive(Clone, Debug)]
pub struct CsvSlots<F> {
    slots: [Option<CsvSelection<F>>; 3],
}

impl<F> Default for CsvSlots<F> {
    fn default() -> Self {
        Self { slots: [None, None, None] }
    }
}

impl<F> CsvSlots<F> {
    /// Replace the slot's file; `None` (picker cancelled) empties it.
    pub fn set(&mut self, slot: CsvSlot, selection: Option<CsvSelection<F>>) {
        self.slots[slot.index()] = selection;
    }

    #[must_use]
    pub fn get(&self, slot: CsvSlot) -> Option<&CsvSelection<F>> {
        self.slots[slot.index()].as_ref()
    }

    /// Selected file name for display.
    #[must_use]
    pub fn file_name(&self, slot: CsvSlot) -> Option<&str> {
        self.get(slot).map(|s| s.file_name.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Filled slots in form order.
    pub fn selected(&self) -> impl Iterator<Item = (CsvSlot, &CsvSelection<F>)> {
        CsvSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|sel| (slot, sel)))
    }
}

/// Outcome banner for one of the two forms. Error and success never coexist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormNotice {
    #[default]
    None,
    Error(String),
    Success(String),
}

impl FormNotice {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Check a CSV submission; returns the token to upload with.
///
/// # Errors
///
/// Returns the inline message when no file is selected or no token is stored.
pub fn validate_csv_submit<'a, F>(slots: &CsvSlots<F>, token: Option<&'a str>) -> Result<&'a str, &'static str> {
    if slots.is_empty() {
        return Err(NO_FILES_SELECTED);
    }
    token.ok_or(NOT_AUTHENTICATED)
}

/// Check an RSS submission; returns the trimmed input and the token.
///
/// # Errors
///
/// Returns the inline message for blank input or a missing token.
pub fn validate_rss_submit<'a>(input: &str, token: Option<&'a str>) -> Result<(String, &'a str), &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RSS_INPUT_REQUIRED);
    }
    let token = token.ok_or(NOT_AUTHENTICATED)?;
    Ok((trimmed.to_owned(), token))
}

/// Success banner for a finished CSV import.
#[must_use]
pub fn import_success_message(summary: &ImportSummary) -> String {
    let touched = summary.movies_created.saturating_add(summary.movies_matched);
    if touched == 0 {
        return IMPORT_SUCCEEDED.to_owned();
    }
    format!(
        "{IMPORT_SUCCEEDED} ({touched} films processed, {} new.)",
        summary.movies_created
    )
}

/// Success banner for a linked RSS feed.
#[must_use]
pub fn rss_success_message(summary: &RssSyncSummary) -> String {
    if summary.entries_processed == 0 {
        return RSS_LINKED.to_owned();
    }
    format!("{RSS_LINKED} ({} recent entries synced.)", summary.entries_processed)
}

/// Label for the continue link at the bottom of the screen.
#[must_use]
pub fn continue_label(csv: &FormNotice, rss: &FormNotice) -> &'static str {
    if csv.is_success() || rss.is_success() { "Continue →" } else { "Skip for now" }
}
