//! Interactive console loop
//!
//! Owns the render side of the shell: a raw-mode line editor with
//! arrow-key history recall, incremental scrollback rendering, the
//! status line, and the plain-text section views.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use relayterm::models::{LineKind, Section};
use relayterm::{ansi, Config, CustomPage, SectionView, TerminalShell};

/// Navigation tutorial overlay, shown on first visit or via TUTORIAL
const TUTORIAL_TEXT: &str = "NAVIGATION GUIDE:
  TYPE A MODULE NAME (E.G. \"PROJECTS\") AND PRESS ENTER TO NAVIGATE.
  MOST MODULES ANSWER TO SHORT ALIASES (\"PRJ\", \"BIO\", \"MSG\").
  USE THE UP AND DOWN ARROWS TO RECALL EARLIER COMMANDS.
  TYPE \"LS\" TO LIST EVERY MODULE, \"HELP\" FOR THE FULL COMMAND SET.
  TYPE \"CLEAR\" TO WIPE THE TERMINAL OUTPUT.";

/// Interactive read-execute-render loop around a [`TerminalShell`]
pub struct Repl {
    shell: TerminalShell,
    config: Config,
    pages_rx: UnboundedReceiver<Vec<CustomPage>>,
    /// Number of scrollback lines already printed
    rendered: usize,
    /// Show the tutorial once at startup
    show_tutorial: bool,
}

impl Repl {
    /// Create a REPL around a shell and the startup fetch channel
    pub fn new(
        shell: TerminalShell,
        config: Config,
        pages_rx: UnboundedReceiver<Vec<CustomPage>>,
        show_tutorial: bool,
    ) -> Self {
        Self {
            shell,
            config,
            pages_rx,
            rendered: 0,
            show_tutorial,
        }
    }

    /// Run until EOF (Ctrl+D) or interrupt (Ctrl+C)
    pub fn run(&mut self) -> io::Result<()> {
        self.render_new_lines()?;
        if self.show_tutorial {
            self.print_block(TUTORIAL_TEXT)?;
        }

        loop {
            self.drain_pages();
            self.print_status_line()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            self.shell.execute_command(&line);
            self.render_new_lines()?;

            if self.shell.take_tutorial_request() {
                self.print_block(TUTORIAL_TEXT)?;
            }
            if self.shell.take_viewport_reset() {
                self.render_section()?;
            }
        }

        Ok(())
    }

    /// Merge any custom-page snapshot the startup fetch delivered
    fn drain_pages(&mut self) {
        while let Ok(pages) = self.pages_rx.try_recv() {
            debug!("merging {} custom page(s) into the shell", pages.len());
            self.shell.load_pages(pages);
        }
    }

    /// Print scrollback lines appended since the last render
    ///
    /// A shrinking scrollback means CLEAR ran: wipe the screen and start
    /// over from the top.
    fn render_new_lines(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        if self.shell.scrollback().len() < self.rendered {
            write!(stdout, "{}", ansi::CLEAR_SCREEN)?;
            self.rendered = 0;
        }
        let color = self.config.ui.color;
        for line in &self.shell.scrollback()[self.rendered..] {
            writeln!(stdout, "{}", ansi::paint(line, color))?;
        }
        self.rendered = self.shell.scrollback().len();
        stdout.flush()
    }

    /// Render the view the current section resolves to
    fn render_section(&self) -> io::Result<()> {
        match self.shell.resolve_view() {
            SectionView::Page(page) => {
                self.print_header(&page.title.to_uppercase())?;
                println!("{}", page.content);
            }
            SectionView::Static(section) => {
                self.print_header(section.label().unwrap_or("DIRECTORY"))?;
                println!("{}", static_body(&section));
            }
        }
        Ok(())
    }

    /// Dim one-line section indicator above the prompt
    fn print_status_line(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        if self.config.ui.color {
            writeln!(
                stdout,
                "\x1b[2m[ SECTION: {} ]{}",
                self.shell.section_label(),
                ansi::RESET
            )?;
        } else {
            writeln!(stdout, "[ SECTION: {} ]", self.shell.section_label())?;
        }
        stdout.flush()
    }

    fn print_header(&self, title: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        if self.config.ui.color {
            writeln!(
                stdout,
                "{}== {} =={}",
                ansi::style_for(LineKind::System),
                title,
                ansi::RESET
            )?;
        } else {
            writeln!(stdout, "== {} ==", title)?;
        }
        stdout.flush()
    }

    /// Print a multi-line text block in the system style
    fn print_block(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        if self.config.ui.color {
            writeln!(
                stdout,
                "{}{}{}",
                ansi::style_for(LineKind::System),
                text,
                ansi::RESET
            )?;
        } else {
            writeln!(stdout, "{}", text)?;
        }
        stdout.flush()
    }

    /// Raw-mode line editor with arrow-key history recall
    ///
    /// Returns `None` on Ctrl+C or Ctrl+D. On Enter the input row is
    /// wiped so the shell's own command echo takes its place.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let _raw = RawModeGuard::new()?;
        let mut stdout = io::stdout();
        let mut buffer = String::new();

        self.shell.history_mut().reset_cursor();
        self.redraw_input(&mut stdout, &buffer)?;

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match key.code {
                KeyCode::Enter => {
                    execute!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
                    return Ok(Some(buffer));
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(None);
                }
                KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(None);
                }
                KeyCode::Char(c) => {
                    buffer.push(c);
                    self.redraw_input(&mut stdout, &buffer)?;
                }
                KeyCode::Backspace => {
                    buffer.pop();
                    self.redraw_input(&mut stdout, &buffer)?;
                }
                KeyCode::Up => {
                    if let Some(entry) = self.shell.history_mut().previous() {
                        buffer = entry.to_string();
                    }
                    self.redraw_input(&mut stdout, &buffer)?;
                }
                KeyCode::Down => {
                    buffer = self
                        .shell
                        .history_mut()
                        .next()
                        .map(str::to_string)
                        .unwrap_or_default();
                    self.redraw_input(&mut stdout, &buffer)?;
                }
                _ => {}
            }
        }
    }

    /// Repaint the input row: prompt plus the current buffer
    fn redraw_input(&self, stdout: &mut Stdout, buffer: &str) -> io::Result<()> {
        execute!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        if self.config.ui.color {
            write!(
                stdout,
                "{}{}{} {}",
                ansi::style_for(LineKind::System),
                self.shell.prompt(),
                ansi::RESET,
                buffer
            )?;
        } else {
            write!(stdout, "{} {}", self.shell.prompt(), buffer)?;
        }
        stdout.flush()
    }
}

/// Restores cooked mode even on early return
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Placeholder body for the built-in section views
///
/// Real section content (gallery items, project records) lives behind the
/// out-of-scope admin surface; the console renders a one-line stand-in.
fn static_body(section: &Section) -> &'static str {
    match section {
        Section::Home => "SELECT A MODULE OR TYPE A COMMAND TO PROCEED.",
        Section::Gallery => "VISUAL TRANSMISSION ARCHIVE ONLINE.",
        Section::Projects => "ENGINEERING DATABASE INDEX LOADED.",
        Section::About => "OPERATOR DOSSIER DECRYPTED.",
        Section::Skills => "SYSTEMS PROFICIENCY MATRIX RENDERED.",
        Section::Contact => "COMMS RELAY CHANNEL OPEN.",
        Section::Custom(_) => "",
    }
}
