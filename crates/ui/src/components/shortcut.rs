use dioxus::prelude::*;

/// Ctrl+B (or Cmd+B on macOS) toggles the sidebar.
#[must_use]
pub fn is_toggle_shortcut(key: &Key, modifiers: Modifiers) -> bool {
    if !modifiers.contains(Modifiers::CONTROL) && !modifiers.contains(Modifiers::META) {
        return false;
    }
    matches!(key, Key::Character(value) if value.eq_ignore_ascii_case("b"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ctrl_and_meta_b() {
        let key = Key::Character("b".to_string());
        assert!(is_toggle_shortcut(&key, Modifiers::CONTROL));
        assert!(is_toggle_shortcut(&key, Modifiers::META));

        let upper = Key::Character("B".to_string());
        assert!(is_toggle_shortcut(&upper, Modifiers::CONTROL));
    }

    #[test]
    fn ignores_bare_b_and_other_keys() {
        assert!(!is_toggle_shortcut(
            &Key::Character("b".to_string()),
            Modifiers::empty(),
        ));
        assert!(!is_toggle_shortcut(
            &Key::Character("k".to_string()),
            Modifiers::CONTROL,
        ));
        assert!(!is_toggle_shortcut(&Key::Enter, Modifiers::CONTROL));
    }
}
