//! Navigable section identifiers
//!
//! A section is one top-level content view of the console: one of the six
//! built-in sections, or an admin-authored custom page addressed by id.
//! Section ids are always lower-case; matching is case-insensitive at the
//! call sites that accept raw user input.

use std::fmt;

/// The six built-in sections, in listing order.
pub const STATIC_SECTIONS: [Section; 6] = [
    Section::Home,
    Section::Gallery,
    Section::Projects,
    Section::About,
    Section::Skills,
    Section::Contact,
];

/// A navigable section of the console
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    /// Landing directory
    Home,
    /// Visual work gallery
    Gallery,
    /// Project database
    Projects,
    /// Operator profile
    About,
    /// Skill matrix
    Skills,
    /// Communication relay
    Contact,
    /// Admin-authored custom page, addressed by its lower-case id
    Custom(String),
}

impl Section {
    /// Parse one of the six static section ids
    ///
    /// Returns `None` for anything else, including custom-page ids; those
    /// are only valid against a loaded page directory.
    pub fn parse_static(id: &str) -> Option<Section> {
        match id {
            "home" => Some(Section::Home),
            "gallery" => Some(Section::Gallery),
            "projects" => Some(Section::Projects),
            "about" => Some(Section::About),
            "skills" => Some(Section::Skills),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }

    /// The canonical lower-case identifier for this section
    pub fn id(&self) -> &str {
        match self {
            Section::Home => "home",
            Section::Gallery => "gallery",
            Section::Projects => "projects",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Contact => "contact",
            Section::Custom(id) => id,
        }
    }

    /// The console label shown in the status line for static sections
    ///
    /// Custom pages have no static label; their title comes from the page
    /// directory.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Section::Home => Some("DIRECTORY"),
            Section::Gallery => Some("ART GALLERY"),
            Section::Projects => Some("PROJECT DATABASE"),
            Section::About => Some("OPERATOR PROFILE"),
            Section::Skills => Some("SKILL MATRIX"),
            Section::Contact => Some("COMMS RELAY"),
            Section::Custom(_) => None,
        }
    }

    /// Whether this is one of the six built-in sections
    pub fn is_static(&self) -> bool {
        !matches!(self, Section::Custom(_))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
