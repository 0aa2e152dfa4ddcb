//! Terminal shell: command interpreter and navigation state machine
//!
//! [`TerminalShell`] owns all console state - current section, scrollback,
//! command history, and the custom-page directory - and exposes the two
//! entry points the host drives it through: [`TerminalShell::navigate`]
//! for sidebar-style direct navigation and
//! [`TerminalShell::execute_command`] for free-text terminal input.
//!
//! The two paths report failure differently on purpose: direct navigation
//! only ever receives targets a UI offered, so an invalid target is a
//! silent no-op, while a mistyped terminal command earns a visible error
//! line in the scrollback.

pub mod commands;
pub mod history;

pub use commands::{Action, Generated};
pub use history::CommandHistory;

use crate::config::Config;
use crate::content::PageDirectory;
use crate::models::{CustomPage, Section, TerminalLine};

/// Default prompt shown ahead of echoed commands
pub const DEFAULT_PROMPT: &str = "MERIDIAN>";

/// Default startup banner seeded into the scrollback
pub const DEFAULT_BANNER: &str =
    "MERIDIAN RELAY ONLINE. TYPE \"HELP\" FOR AVAILABLE COMMANDS.";

/// The view the current section resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionView<'a> {
    /// One of the six built-in section views
    Static(Section),
    /// A loaded custom page rendered as a generic text page
    Page(&'a CustomPage),
}

/// The terminal shell state machine
#[derive(Debug, Clone)]
pub struct TerminalShell {
    /// Current section; initial state is `home`
    section: Section,
    /// Append-only classified scrollback
    scrollback: Vec<TerminalLine>,
    /// Every execution attempt, valid or not
    history: CommandHistory,
    /// Custom pages fetched from the content API
    pages: PageDirectory,
    /// Prompt prefix for command echo lines
    prompt: String,
    /// Latched when navigation succeeds; host resets its viewport on take
    viewport_reset: bool,
    /// Latched by the TUTORIAL command; host shows the overlay on take
    tutorial_requested: bool,
}

impl TerminalShell {
    /// Create a shell with the given prompt and startup banner
    pub fn new(prompt: impl Into<String>, banner: impl Into<String>) -> Self {
        Self {
            section: Section::Home,
            scrollback: vec![TerminalLine::system(banner)],
            history: CommandHistory::new(),
            pages: PageDirectory::NotLoaded,
            prompt: prompt.into(),
            viewport_reset: false,
            tutorial_requested: false,
        }
    }

    /// Create a shell with the built-in prompt and banner
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_PROMPT, DEFAULT_BANNER)
    }

    /// Create a shell from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.terminal.prompt, &config.terminal.banner)
    }

    /// Current section
    pub fn section(&self) -> &Section {
        &self.section
    }

    /// The classified scrollback, oldest first
    pub fn scrollback(&self) -> &[TerminalLine] {
        &self.scrollback
    }

    /// Command history (read-only)
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Command history, mutable for recall stepping
    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    /// The custom-page directory
    pub fn pages(&self) -> &PageDirectory {
        &self.pages
    }

    /// Prompt prefix used on command echo lines
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Install the fetched custom-page snapshot
    ///
    /// Replaces whatever directory state was present; an empty vector is a
    /// legitimate "loaded, no pages" state distinct from `NotLoaded`.
    pub fn load_pages(&mut self, pages: Vec<CustomPage>) {
        debug!("loaded {} custom page(s)", pages.len());
        self.pages = PageDirectory::Loaded(pages);
    }

    /// Directly navigate to a section id (sidebar/button path)
    ///
    /// Case-insensitive. Valid targets are the six static sections and
    /// loaded custom-page ids; anything else is silently ignored - no
    /// error is raised and no scrollback line is appended.
    pub fn navigate(&mut self, target: &str) {
        let id = target.trim().to_lowercase();

        if let Some(section) = Section::parse_static(&id) {
            self.enter(section);
            return;
        }
        if self.pages.contains(&id) {
            self.enter(Section::Custom(id));
            return;
        }
        debug!("ignoring navigation to unknown section '{}'", id);
    }

    /// Execute a line of free-text terminal input
    ///
    /// The raw input is echoed as a `command` line and recorded in history
    /// unconditionally, even when unrecognized. Resolution order: loaded
    /// custom pages (by id or title), then the static command table, then
    /// an error line. CLEAR is the one command that appends nothing - it
    /// discards the whole scrollback, its own echo included.
    pub fn execute_command(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        let upper = trimmed.to_uppercase();

        self.history.push(trimmed);
        self.scrollback
            .push(TerminalLine::command(format!("{} {}", self.prompt, trimmed)));

        // Custom pages shadow the static table
        let page_hit = self
            .pages
            .match_command(&upper)
            .map(|page| (page.id.clone(), page.title.clone()));
        if let Some((id, title)) = page_hit {
            self.enter(Section::Custom(id));
            self.scrollback.push(TerminalLine::response(format!(
                "LOADING {}...",
                title.to_uppercase()
            )));
            return;
        }

        match commands::lookup(&upper) {
            Some(action) => self.apply(&action.clone()),
            None => {
                self.scrollback.push(TerminalLine::error(format!(
                    "UNKNOWN COMMAND: \"{}\"\nTYPE \"HELP\" FOR AVAILABLE COMMANDS.",
                    upper
                )));
            }
        }
    }

    /// Resolve the current section to a renderable view
    ///
    /// A section id that no longer resolves (a custom page deleted
    /// server-side after navigation) falls back to the home view; this is
    /// a defensive default, not a reported error.
    pub fn resolve_view(&self) -> SectionView<'_> {
        match &self.section {
            Section::Custom(id) => match self.pages.get(id) {
                Some(page) => SectionView::Page(page),
                None => SectionView::Static(Section::Home),
            },
            section => SectionView::Static(section.clone()),
        }
    }

    /// Status-line label for the current section
    pub fn section_label(&self) -> String {
        if let Some(label) = self.section.label() {
            return label.to_string();
        }
        match self.pages.get(self.section.id()) {
            Some(page) => page.title.to_uppercase(),
            None => "UNKNOWN".to_string(),
        }
    }

    /// Take the viewport-reset latch, clearing it
    pub fn take_viewport_reset(&mut self) -> bool {
        std::mem::take(&mut self.viewport_reset)
    }

    /// Take the tutorial-request latch, clearing it
    pub fn take_tutorial_request(&mut self) -> bool {
        std::mem::take(&mut self.tutorial_requested)
    }

    /// Commit a section transition and latch the viewport reset
    fn enter(&mut self, section: Section) {
        debug!("section transition: {} -> {}", self.section, section);
        self.section = section;
        self.viewport_reset = true;
    }

    /// Dispatch a resolved static-table action
    fn apply(&mut self, action: &Action) {
        match action {
            Action::Navigate(section) => {
                let message = commands::loading_message(section);
                self.enter(section.clone());
                self.scrollback.push(TerminalLine::response(message));
            }
            Action::PrintStatic(text) => {
                self.scrollback.push(TerminalLine::response(*text));
            }
            Action::PrintGenerated(Generated::Timestamp) => {
                self.scrollback
                    .push(TerminalLine::response(commands::timestamp_text()));
            }
            Action::PrintGenerated(Generated::ModuleListing) => {
                let listing = commands::module_listing(self.pages.pages());
                self.scrollback.push(TerminalLine::response(listing));
            }
            Action::ClearLog => {
                self.scrollback.clear();
            }
            Action::ShowTutorial => {
                self.tutorial_requested = true;
                self.scrollback
                    .push(TerminalLine::response(commands::TUTORIAL_ACK_TEXT));
            }
        }
    }
}

impl Default for TerminalShell {
    fn default() -> Self {
        Self::with_defaults()
    }
}
