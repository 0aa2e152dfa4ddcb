//! Integration tests for direct navigation and view resolution
//!
//! Direct navigation is the sidebar/button path: it only ever receives
//! targets a UI offered, so invalid targets are silently ignored rather
//! than reported - the asymmetry with the command path is deliberate.

use relayterm::models::Section;
use relayterm::{CustomPage, PageDirectory, SectionView, TerminalShell};

fn shell() -> TerminalShell {
    TerminalShell::with_defaults()
}

#[test]
fn test_navigate_reaches_every_static_section() {
    let mut shell = shell();
    for id in ["home", "gallery", "projects", "about", "skills", "contact"] {
        shell.navigate(id);
        assert_eq!(shell.section().id(), id);
    }
}

#[test]
fn test_navigate_is_case_insensitive() {
    let mut shell = shell();
    shell.navigate("GALLERY");
    assert_eq!(shell.section().id(), "gallery");
}

#[test]
fn test_navigate_to_bogus_id_is_a_silent_no_op() {
    let mut shell = shell();
    shell.navigate("home");
    let scrollback_before = shell.scrollback().len();
    let history_before = shell.history().len();

    shell.navigate("bogus-id");

    assert_eq!(shell.section().id(), "home");
    assert_eq!(shell.scrollback().len(), scrollback_before, "no error line");
    assert_eq!(shell.history().len(), history_before, "no history entry");
}

#[test]
fn test_navigate_to_custom_page_requires_a_loaded_directory() {
    let mut shell = shell();

    // Fetch not resolved yet: dynamic navigation silently fails
    shell.navigate("resume");
    assert_eq!(shell.section().id(), "home");
    assert_eq!(*shell.pages(), PageDirectory::NotLoaded);

    shell.load_pages(vec![CustomPage::new("resume", "Resume", "...")]);
    shell.navigate("resume");
    assert_eq!(shell.section().id(), "resume");
}

#[test]
fn test_loaded_empty_directory_still_rejects_dynamic_targets() {
    let mut shell = shell();
    shell.load_pages(vec![]);
    assert!(shell.pages().is_loaded());

    shell.navigate("resume");
    assert_eq!(shell.section().id(), "home");
}

#[test]
fn test_viewport_resets_on_successful_navigation_only() {
    let mut shell = shell();
    assert!(!shell.take_viewport_reset());

    shell.navigate("skills");
    assert!(shell.take_viewport_reset());
    assert!(!shell.take_viewport_reset(), "latch is consumed");

    shell.navigate("does-not-exist");
    assert!(!shell.take_viewport_reset());
}

#[test]
fn test_resolver_returns_static_views() {
    let mut shell = shell();
    shell.navigate("about");
    assert_eq!(shell.resolve_view(), SectionView::Static(Section::About));
}

#[test]
fn test_resolver_returns_custom_page_view() {
    let mut shell = shell();
    shell.load_pages(vec![CustomPage::new("lab", "Laboratory", "NOTES...")]);
    shell.navigate("lab");

    match shell.resolve_view() {
        SectionView::Page(page) => {
            assert_eq!(page.id, "lab");
            assert_eq!(page.content, "NOTES...");
        }
        other => panic!("expected page view, got {:?}", other),
    }
}

#[test]
fn test_resolver_falls_back_to_home_when_page_disappears() {
    let mut shell = shell();
    shell.load_pages(vec![CustomPage::new("lab", "Laboratory", "...")]);
    shell.navigate("lab");

    // A later snapshot no longer carries the page (deleted server-side).
    // The stored section id goes stale; resolution falls back quietly.
    shell.load_pages(vec![]);
    assert_eq!(shell.section().id(), "lab");
    assert_eq!(shell.resolve_view(), SectionView::Static(Section::Home));
    assert_eq!(shell.section_label(), "UNKNOWN");
}

#[test]
fn test_command_path_and_navigate_path_agree_on_targets() {
    let mut by_command = shell();
    let mut by_navigate = shell();

    by_command.execute_command("SKILLS");
    by_navigate.navigate("skills");

    assert_eq!(by_command.section(), by_navigate.section());
}
