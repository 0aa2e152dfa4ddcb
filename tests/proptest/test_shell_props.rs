//! Property-based tests for the shell state machine

use proptest::prelude::*;

use relayterm::models::LineKind;
use relayterm::{CustomPage, TerminalShell};

proptest! {
    #[test]
    fn test_execute_never_panics(input in "\\PC*") {
        let mut shell = TerminalShell::with_defaults();
        shell.execute_command(&input);
    }

    #[test]
    fn test_navigate_never_panics(target in "\\PC*") {
        let mut shell = TerminalShell::with_defaults();
        shell.navigate(&target);
    }

    #[test]
    fn test_invalid_navigation_leaves_section_unchanged(target in "zz[a-z-]{1,20}") {
        // The zz prefix keeps the target out of the static set
        let mut shell = TerminalShell::with_defaults();
        shell.navigate(&target);
        prop_assert_eq!(shell.section().id(), "home");
    }

    #[test]
    fn test_unknown_token_appends_one_error_and_keeps_state(token in "zzq[a-z0-9]{1,12}") {
        let mut shell = TerminalShell::with_defaults();
        let before = shell.scrollback().len();
        shell.execute_command(&token);

        prop_assert_eq!(shell.section().id(), "home");
        prop_assert_eq!(shell.scrollback().len(), before + 2);
        prop_assert_eq!(shell.scrollback()[before].kind, LineKind::Command);
        prop_assert_eq!(shell.scrollback()[before + 1].kind, LineKind::Error);
    }

    #[test]
    fn test_history_grows_by_one_per_nonempty_input(inputs in prop::collection::vec("[ -~]{1,30}", 1..20)) {
        let mut shell = TerminalShell::with_defaults();
        let mut expected = 0usize;
        for input in &inputs {
            shell.execute_command(input);
            if !input.trim().is_empty() {
                expected += 1;
                prop_assert_eq!(shell.history().recall(0), Some(input.trim()));
            }
        }
        prop_assert_eq!(shell.history().len(), expected);
    }

    #[test]
    fn test_clear_empties_regardless_of_prior_commands(commands in prop::collection::vec("[A-Z?]{1,10}", 0..15)) {
        let mut shell = TerminalShell::with_defaults();
        for command in &commands {
            shell.execute_command(command);
        }
        shell.execute_command("CLEAR");
        prop_assert!(shell.scrollback().is_empty());
    }

    #[test]
    fn test_recall_stepping_never_panics(steps in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut shell = TerminalShell::with_defaults();
        shell.execute_command("HOME");
        shell.execute_command("LS");
        for step_back in steps {
            if step_back {
                let _ = shell.history_mut().previous();
            } else {
                let _ = shell.history_mut().next();
            }
        }
    }

    #[test]
    fn test_loaded_page_is_always_addressable(id in "[a-z][a-z0-9-]{0,12}") {
        // Skip ids that collide with the static sections or command table
        prop_assume!(relayterm::models::Section::parse_static(&id).is_none());
        prop_assume!(relayterm::shell::commands::lookup(&id.to_uppercase()).is_none());

        let mut shell = TerminalShell::with_defaults();
        shell.load_pages(vec![CustomPage::new(id.clone(), "Page", "body")]);

        shell.execute_command(&id);
        prop_assert_eq!(shell.section().id(), id.as_str());
    }
}
