//! Keyboard input understood by a terminal session

/// A key event, already reduced to what the session cares about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Enter,
    Tab,
    ArrowUp,
    ArrowDown,
    Backspace,
    /// Ctrl+C
    Interrupt,
    Char(char),
}

impl KeyInput {
    /// Map a DOM `KeyboardEvent.key` value
    ///
    /// Returns None for keys the terminal ignores (modifiers, function keys).
    pub fn from_dom(key: &str, ctrl: bool) -> Option<Self> {
        if ctrl {
            return matches!(key, "c" | "C").then_some(KeyInput::Interrupt);
        }
        match key {
            "Enter" => Some(KeyInput::Enter),
            "Tab" => Some(KeyInput::Tab),
            "ArrowUp" => Some(KeyInput::ArrowUp),
            "ArrowDown" => Some(KeyInput::ArrowDown),
            "Backspace" => Some(KeyInput::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => Some(KeyInput::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dom() {
        assert_eq!(KeyInput::from_dom("Enter", false), Some(KeyInput::Enter));
        assert_eq!(KeyInput::from_dom("c", true), Some(KeyInput::Interrupt));
        assert_eq!(KeyInput::from_dom("a", false), Some(KeyInput::Char('a')));
        assert_eq!(KeyInput::from_dom("Shift", false), None);
        assert_eq!(KeyInput::from_dom("x", true), None);
    }
}
