//! Custom Page Model
//!
//! An admin-authored, id-addressable freeform content page. Pages are
//! created and edited elsewhere; the shell only reads an immutable
//! snapshot fetched once from the content API.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pattern for URL-safe page ids, matching what navigation can address
static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("valid id pattern"));

/// An admin-authored custom page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPage {
    /// Unique, URL-safe identifier (lower-case)
    pub id: String,

    /// Display title
    pub title: String,

    /// Freeform content body
    pub content: String,
}

impl CustomPage {
    /// Create a new custom page
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Whether the page id is URL-safe and addressable by navigation
    pub fn has_valid_id(&self) -> bool {
        ID_PATTERN.is_match(&self.id)
    }

    /// Case-insensitive match against an upper-cased command token
    ///
    /// A page is addressable by either its id or its title.
    pub fn matches_token(&self, upper: &str) -> bool {
        self.id.to_uppercase() == upper || self.title.to_uppercase() == upper
    }
}
