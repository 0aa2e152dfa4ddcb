//! Custom-page directory and content API types
//!
//! The console merges statically-known sections with custom pages fetched
//! once at startup. The directory keeps "not fetched yet" distinct from
//! "fetched, none exist": command resolution behaves the same in both
//! states (dynamic tokens simply fail), but tests and diagnostics can tell
//! them apart.

pub mod client;

pub use client::ContentClient;

use serde::Deserialize;

use crate::models::CustomPage;

/// The loaded-or-not snapshot of custom pages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageDirectory {
    /// The startup fetch has not resolved (or failed)
    #[default]
    NotLoaded,
    /// A snapshot was installed; may be empty
    Loaded(Vec<CustomPage>),
}

impl PageDirectory {
    /// Whether a snapshot has been installed
    pub fn is_loaded(&self) -> bool {
        matches!(self, PageDirectory::Loaded(_))
    }

    /// The pages of the snapshot; empty while not loaded
    pub fn pages(&self) -> &[CustomPage] {
        match self {
            PageDirectory::NotLoaded => &[],
            PageDirectory::Loaded(pages) => pages,
        }
    }

    /// Look up a page by its lower-case id
    pub fn get(&self, id: &str) -> Option<&CustomPage> {
        self.pages().iter().find(|page| page.id == id)
    }

    /// Whether a page with this id exists in the snapshot
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Resolve an upper-cased command token against page ids and titles
    pub fn match_command(&self, upper: &str) -> Option<&CustomPage> {
        self.pages().iter().find(|page| page.matches_token(upper))
    }

    /// Number of pages in the snapshot
    pub fn len(&self) -> usize {
        self.pages().len()
    }

    /// Whether the snapshot holds no pages (also true while not loaded)
    pub fn is_empty(&self) -> bool {
        self.pages().is_empty()
    }
}

/// Wire shape of the `GET /content` payload
///
/// The document carries admin-edited content sections the console does
/// not use; only `customPages` matters here, and it may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    /// Custom pages, in admin-defined order
    #[serde(default)]
    pub custom_pages: Vec<CustomPage>,
}

/// Drop pages whose ids navigation could never address
///
/// A page with a malformed id would be listed by LS but unreachable by
/// `navigate`; filtering at the edge keeps the shell's invariant simple.
pub fn sanitize_pages(pages: Vec<CustomPage>) -> Vec<CustomPage> {
    let (valid, invalid): (Vec<_>, Vec<_>) =
        pages.into_iter().partition(CustomPage::has_valid_id);
    for page in &invalid {
        warn!("dropping custom page with unaddressable id '{}'", page.id);
    }
    valid
}
