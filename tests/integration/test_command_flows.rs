//! Integration tests for terminal command execution
//!
//! These exercise the full execute path: echo, resolution order (custom
//! pages, static table, error), scrollback discipline, and history
//! recording.

use relayterm::models::LineKind;
use relayterm::{CustomPage, TerminalShell};

fn shell() -> TerminalShell {
    TerminalShell::with_defaults()
}

fn shell_with_pages(pages: Vec<CustomPage>) -> TerminalShell {
    let mut shell = shell();
    shell.load_pages(pages);
    shell
}

/// Kinds of the lines appended by the last command
fn appended_kinds(shell: &TerminalShell, before: usize) -> Vec<LineKind> {
    shell.scrollback()[before..].iter().map(|l| l.kind).collect()
}

#[test]
fn test_every_navigation_synonym_transitions_and_appends_echo_plus_response() {
    let table: &[(&[&str], &str)] = &[
        (&["HOME", "DIRECTORY", "DIR"], "home"),
        (&["GALLERY", "ART", "PORTFOLIO"], "gallery"),
        (&["PROJECTS", "PRJ", "WORKS"], "projects"),
        (&["ABOUT", "BIO", "PROFILE"], "about"),
        (&["SKILLS", "MATRIX", "ABILITIES"], "skills"),
        (&["CONTACT", "MSG", "MESSAGE", "TRANSMIT"], "contact"),
    ];

    for (synonyms, expected) in table {
        for token in *synonyms {
            let mut shell = shell();
            let before = shell.scrollback().len();
            shell.execute_command(token);
            assert_eq!(shell.section().id(), *expected, "token {token}");
            assert_eq!(
                appended_kinds(&shell, before),
                vec![LineKind::Command, LineKind::Response],
                "token {token}"
            );
        }
    }
}

#[test]
fn test_matching_is_case_insensitive() {
    for token in ["gallery", "Gallery", "gAlLeRy"] {
        let mut shell = shell();
        shell.execute_command(token);
        assert_eq!(shell.section().id(), "gallery", "token {token}");
    }
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let mut shell = shell();
    shell.execute_command("   projects   ");
    assert_eq!(shell.section().id(), "projects");
    assert_eq!(shell.history().recall(0), Some("projects"));
}

#[test]
fn test_clear_always_empties_the_scrollback() {
    let mut shell = shell();
    shell.execute_command("HELP");
    shell.execute_command("STATUS");
    assert!(shell.scrollback().len() > 3);

    shell.execute_command("CLEAR");
    assert!(shell.scrollback().is_empty(), "CLEAR erases its own echo too");

    // CLS on an already-empty scrollback stays empty
    shell.execute_command("CLS");
    assert!(shell.scrollback().is_empty());
}

#[test]
fn test_clear_still_records_history() {
    let mut shell = shell();
    shell.execute_command("CLEAR");
    assert_eq!(shell.history().recall(0), Some("CLEAR"));
}

#[test]
fn test_unknown_command_appends_exactly_one_error_line() {
    let mut shell = shell();
    let before = shell.scrollback().len();
    shell.execute_command("WARP 9");

    assert_eq!(shell.section().id(), "home", "state unchanged");
    let kinds = appended_kinds(&shell, before);
    assert_eq!(kinds, vec![LineKind::Command, LineKind::Error]);

    let error = shell.scrollback().last().unwrap();
    assert!(error.text.contains("WARP 9"), "error names the token");
    assert!(error.text.contains("HELP"), "error hints at HELP");
}

#[test]
fn test_history_records_attempts_including_invalid() {
    let mut shell = shell();
    shell.execute_command("LS");
    shell.execute_command("nonsense");
    shell.execute_command("CLEAR");

    assert_eq!(shell.history().len(), 3);
    assert_eq!(shell.history().recall(0), Some("CLEAR"));
    assert_eq!(shell.history().recall(1), Some("nonsense"));
    assert_eq!(shell.history().recall(2), Some("LS"));
}

#[test]
fn test_recall_stepping_clamps_at_oldest() {
    let mut shell = shell();
    for cmd in ["HOME", "LS", "HELP"] {
        shell.execute_command(cmd);
    }
    let history = shell.history_mut();
    assert_eq!(history.previous(), Some("HELP"));
    assert_eq!(history.previous(), Some("LS"));
    assert_eq!(history.previous(), Some("HOME"));
    assert_eq!(history.previous(), Some("HOME"));
}

#[test]
fn test_custom_page_command_navigates_case_insensitively() {
    for token in ["RESUME", "resume"] {
        let mut shell = shell_with_pages(vec![CustomPage::new(
            "resume",
            "Resume",
            "EXPERIENCE: ...",
        )]);
        let before = shell.scrollback().len();
        shell.execute_command(token);

        assert_eq!(shell.section().id(), "resume", "token {token}");
        let appended = &shell.scrollback()[before..];
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[1].kind, LineKind::Response);
        assert_eq!(appended[1].text, "LOADING RESUME...");
    }
}

#[test]
fn test_custom_page_matches_by_title() {
    let mut shell = shell_with_pages(vec![CustomPage::new("cv", "Curriculum Vitae", "...")]);
    shell.execute_command("curriculum vitae");
    assert_eq!(shell.section().id(), "cv");
}

#[test]
fn test_custom_page_shadows_static_command() {
    // Resolution order: loaded pages win over the static table
    let mut shell = shell_with_pages(vec![CustomPage::new("help", "Help Desk", "...")]);
    shell.execute_command("HELP");
    assert_eq!(shell.section().id(), "help");
    let last = shell.scrollback().last().unwrap();
    assert_eq!(last.text, "LOADING HELP DESK...");
}

#[test]
fn test_custom_page_commands_fail_until_loaded() {
    let mut shell = shell();
    shell.execute_command("RESUME");
    assert_eq!(shell.section().id(), "home");
    assert_eq!(shell.scrollback().last().unwrap().kind, LineKind::Error);

    shell.load_pages(vec![CustomPage::new("resume", "Resume", "...")]);
    shell.execute_command("RESUME");
    assert_eq!(shell.section().id(), "resume");
}

#[test]
fn test_ls_lists_six_static_modules() {
    let mut shell = shell();
    shell.execute_command("LS");
    let listing = &shell.scrollback().last().unwrap().text;

    for number in 1..=6 {
        assert!(listing.contains(&format!("[{:02}]", number)));
    }
    assert!(!listing.contains("[07]"));
}

#[test]
fn test_ls_numbers_custom_pages_from_seven() {
    let mut shell = shell_with_pages(vec![
        CustomPage::new("resume", "Resume", ""),
        CustomPage::new("lab", "Laboratory", ""),
    ]);
    shell.execute_command("LIST");
    let listing = &shell.scrollback().last().unwrap().text;

    assert!(listing.contains("[07] RESUME"));
    assert!(listing.contains("[08] LABORATORY"));
}

#[test]
fn test_help_and_question_mark_print_the_same_text() {
    let mut shell_a = shell();
    let mut shell_b = shell();
    shell_a.execute_command("HELP");
    shell_b.execute_command("?");
    assert_eq!(
        shell_a.scrollback().last().unwrap().text,
        shell_b.scrollback().last().unwrap().text
    );
}

#[test]
fn test_informational_commands_stay_on_current_section() {
    let mut shell = shell();
    shell.execute_command("GALLERY");
    for cmd in ["HELP", "STATUS", "VERSION", "DATE", "LS"] {
        shell.execute_command(cmd);
        assert_eq!(shell.section().id(), "gallery", "command {cmd}");
        assert_eq!(shell.scrollback().last().unwrap().kind, LineKind::Response);
    }
}

#[test]
fn test_date_is_computed_at_call_time() {
    let mut shell = shell();
    shell.execute_command("DATE");
    let stamp = shell.scrollback().last().unwrap().text.clone();
    assert!(!stamp.is_empty());
    assert_eq!(stamp, stamp.to_uppercase());
}

#[test]
fn test_tutorial_latches_request_and_acknowledges() {
    let mut shell = shell();
    assert!(!shell.take_tutorial_request());
    shell.execute_command("TUTORIAL");
    assert_eq!(shell.scrollback().last().unwrap().kind, LineKind::Response);
    assert!(shell.take_tutorial_request());
    assert!(!shell.take_tutorial_request(), "latch is consumed");
}

#[test]
fn test_echo_line_preserves_raw_input() {
    let mut shell = shell();
    shell.execute_command("Projects");
    let echo = &shell.scrollback()[shell.scrollback().len() - 2];
    assert_eq!(echo.kind, LineKind::Command);
    assert!(echo.text.ends_with("Projects"), "raw case kept: {}", echo.text);
}
