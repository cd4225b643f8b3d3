//! Keyboard shortcuts for the terminal wizard.
//!
//! Single source of truth for both key dispatch and the help footer.

use crossterm::event::KeyCode;

/// Something the user asked the wizard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPhase,
    PreviousPhase,
    SelectNextModule,
    SelectPreviousModule,
    NextStep,
    PreviousStep,
    CompleteModule,
    Reload,
}

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Alternative key (e.g., vim-style letter or Esc)
    pub alt_key: Option<KeyCode>,
    /// Short label for the help footer
    pub label: &'static str,
    pub action: Action,
}

pub static SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        key: KeyCode::Right,
        alt_key: Some(KeyCode::Char('l')),
        label: "next phase",
        action: Action::NextPhase,
    },
    Shortcut {
        key: KeyCode::Left,
        alt_key: Some(KeyCode::Char('h')),
        label: "prev phase",
        action: Action::PreviousPhase,
    },
    Shortcut {
        key: KeyCode::Down,
        alt_key: Some(KeyCode::Char('j')),
        label: "next module",
        action: Action::SelectNextModule,
    },
    Shortcut {
        key: KeyCode::Up,
        alt_key: Some(KeyCode::Char('k')),
        label: "prev module",
        action: Action::SelectPreviousModule,
    },
    Shortcut {
        key: KeyCode::Char('n'),
        alt_key: None,
        label: "next step",
        action: Action::NextStep,
    },
    Shortcut {
        key: KeyCode::Char('p'),
        alt_key: None,
        label: "prev step",
        action: Action::PreviousStep,
    },
    Shortcut {
        key: KeyCode::Char('d'),
        alt_key: None,
        label: "done",
        action: Action::CompleteModule,
    },
    Shortcut {
        key: KeyCode::Char('r'),
        alt_key: None,
        label: "reload",
        action: Action::Reload,
    },
    Shortcut {
        key: KeyCode::Char('q'),
        alt_key: Some(KeyCode::Esc),
        label: "quit",
        action: Action::Quit,
    },
];

/// Resolve a key press to an action
pub fn action_for(code: KeyCode) -> Option<Action> {
    SHORTCUTS
        .iter()
        .find(|s| s.key == code || s.alt_key == Some(code))
        .map(|s| s.action)
}

/// Display name for a key
pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Right => "→".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_primary_and_alt_keys_resolve() {
        assert_eq!(action_for(KeyCode::Right), Some(Action::NextPhase));
        assert_eq!(action_for(KeyCode::Char('l')), Some(Action::NextPhase));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Char('d')), Some(Action::CompleteModule));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(action_for(KeyCode::Char('z')), None);
        assert_eq!(action_for(KeyCode::Enter), None);
    }

    #[test]
    fn test_no_key_bound_twice() {
        let mut seen = HashSet::new();
        for shortcut in SHORTCUTS {
            assert!(seen.insert(shortcut.key), "duplicate {:?}", shortcut.key);
            if let Some(alt) = shortcut.alt_key {
                assert!(seen.insert(alt), "duplicate {alt:?}");
            }
        }
    }

    #[test]
    fn test_key_labels() {
        assert_eq!(key_label(KeyCode::Left), "←");
        assert_eq!(key_label(KeyCode::Char('q')), "q");
    }
}
