//! Static command table and canned console text
//!
//! Every recognized token maps to a tagged [`Action`]; synonym resolution
//! is a separate alias-to-canonical lookup ahead of dispatch. Custom-page
//! tokens are not in this table - they resolve against the page directory
//! before the table is consulted.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::{CustomPage, Section, STATIC_SECTIONS};

/// Effect of a recognized command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Transition the navigation state machine
    Navigate(Section),
    /// Print a fixed text block
    PrintStatic(&'static str),
    /// Print text computed at call time
    PrintGenerated(Generated),
    /// Discard the entire scrollback, echo included
    ClearLog,
    /// Latch the tutorial overlay and acknowledge
    ShowTutorial,
}

/// Generated (non-static) response kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generated {
    /// Current local timestamp
    Timestamp,
    /// Numbered module listing, statics plus loaded custom pages
    ModuleListing,
}

/// HELP command output
pub const HELP_TEXT: &str = "AVAILABLE COMMANDS:
  HOME      - Station directory
  GALLERY   - Visual transmission archive
  PROJECTS  - Engineering database
  ABOUT     - Operator profile
  SKILLS    - Systems proficiency matrix
  CONTACT   - Communications relay
  HELP      - Show this message
  CLEAR     - Clear terminal output
  STATUS    - Station diagnostics
  VERSION   - System information
  DATE      - Current station time
  LS        - List station modules
  TUTORIAL  - Show navigation guide";

/// STATUS command output
pub const STATUS_TEXT: &str = "STATION DIAGNOSTICS:
  FUSION CORE:      NOMINAL [97.4%]
  LIFE SUPPORT:     OPERATIONAL
  RELAY ARRAY:      ONLINE [12 CHANNELS]
  LONG-RANGE COMMS: ACTIVE
  DOCKING CLAMPS:   SECURED
  CREW DECK:        NOMINAL
  UPTIME:           1204:17:55
  HULL INTEGRITY:   CONFIRMED";

/// VERSION command output
pub const VERSION_TEXT: &str = concat!(
    "MERIDIAN ORBITAL RELAY STATION\n",
    "CONSOLE BUILD: relayterm v",
    env!("CARGO_PKG_VERSION"),
    "\nHELIOS ORBITAL CONSORTIUM"
);

/// TUTORIAL command acknowledgement
pub const TUTORIAL_ACK_TEXT: &str =
    "TUTORIAL SYSTEM ACTIVATED...\nLOADING NAVIGATION INTERFACE...";

/// Alias-to-action table; keys are upper-cased canonical tokens
static COMMAND_TABLE: Lazy<HashMap<&'static str, Action>> = Lazy::new(|| {
    let mut table = HashMap::new();

    let navigation: [(&[&str], Section); 6] = [
        (&["HOME", "DIRECTORY", "DIR"], Section::Home),
        (&["GALLERY", "ART", "PORTFOLIO"], Section::Gallery),
        (&["PROJECTS", "PRJ", "WORKS"], Section::Projects),
        (&["ABOUT", "BIO", "PROFILE"], Section::About),
        (&["SKILLS", "MATRIX", "ABILITIES"], Section::Skills),
        (&["CONTACT", "MSG", "MESSAGE", "TRANSMIT"], Section::Contact),
    ];
    for (aliases, section) in navigation {
        for alias in aliases {
            table.insert(*alias, Action::Navigate(section.clone()));
        }
    }

    for alias in ["HELP", "?"] {
        table.insert(alias, Action::PrintStatic(HELP_TEXT));
    }
    for alias in ["CLEAR", "CLS"] {
        table.insert(alias, Action::ClearLog);
    }
    for alias in ["STATUS", "DIAG", "DIAGNOSTICS"] {
        table.insert(alias, Action::PrintStatic(STATUS_TEXT));
    }
    for alias in ["VERSION", "VER"] {
        table.insert(alias, Action::PrintStatic(VERSION_TEXT));
    }
    for alias in ["DATE", "TIME"] {
        table.insert(alias, Action::PrintGenerated(Generated::Timestamp));
    }
    for alias in ["LS", "LIST"] {
        table.insert(alias, Action::PrintGenerated(Generated::ModuleListing));
    }
    for alias in ["TUTORIAL", "INTRO", "GUIDE"] {
        table.insert(alias, Action::ShowTutorial);
    }

    table
});

/// Look up an upper-cased token in the static command table
pub fn lookup(token: &str) -> Option<&'static Action> {
    COMMAND_TABLE.get(token)
}

/// Canned response line for a static-section navigation
pub fn loading_message(section: &Section) -> &'static str {
    match section {
        Section::Home => "NAVIGATING TO DIRECTORY...",
        Section::Gallery => "LOADING ART GALLERY...",
        Section::Projects => "LOADING PROJECT DATABASE...",
        Section::About => "LOADING OPERATOR PROFILE...",
        Section::Skills => "LOADING SKILL MATRIX...",
        Section::Contact => "OPENING COMMS RELAY...",
        // Custom pages acknowledge with their own title at the call site
        Section::Custom(_) => "LOADING MODULE...",
    }
}

/// DATE command output, computed at call time
pub fn timestamp_text() -> String {
    chrono::Local::now()
        .format("%a %b %d %Y %H:%M:%S GMT%z")
        .to_string()
        .to_uppercase()
}

/// LS command output: statics numbered [01]-[06], custom pages from [07]
pub fn module_listing(pages: &[CustomPage]) -> String {
    let mut listing = String::from("STATION MODULES:");
    for (index, section) in STATIC_SECTIONS.iter().enumerate() {
        listing.push_str(&format!(
            "\n  [{:02}] {:<16} ({})",
            index + 1,
            section.label().unwrap_or("UNKNOWN"),
            section.id().to_uppercase()
        ));
    }

    if !pages.is_empty() {
        listing.push_str("\n\nCUSTOM MODULES:");
        for (index, page) in pages.iter().enumerate() {
            listing.push_str(&format!(
                "\n  [{:02}] {:<16} ({})",
                STATIC_SECTIONS.len() + index + 1,
                page.title.to_uppercase(),
                page.id.to_uppercase()
            ));
        }
    }

    listing
}
