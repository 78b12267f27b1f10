use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn normalize_key_event(key: KeyEvent) -> KeyEvent {
    if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
        let mut modifiers = key.modifiers;
        modifiers -= KeyModifiers::SHIFT;
        return KeyEvent::new(KeyCode::BackTab, modifiers);
    }
    if let KeyCode::Char(c) = key.code {
        // Ctrl+Shift+<letter> is indistinguishable from Ctrl+<letter> in most terminals.
        if key.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() {
            let mut modifiers = key.modifiers;
            modifiers -= KeyModifiers::SHIFT;
            return KeyEvent::new(KeyCode::Char(c.to_ascii_lowercase()), modifiers);
        }
        if c.is_ascii_lowercase() && key.modifiers.contains(KeyModifiers::SHIFT) {
            return KeyEvent::new(KeyCode::Char(c.to_ascii_uppercase()), key.modifiers);
        }
        if c.is_ascii_uppercase() && !key.modifiers.contains(KeyModifiers::SHIFT) {
            return KeyEvent::new(key.code, key.modifiers | KeyModifiers::SHIFT);
        }
    }
    key
}

pub(super) fn format_key_display(key_str: &str) -> String {
    key_str
        .trim()
        .split('+')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    format!("{upper}{}", chars.as_str())
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

pub fn parse_key_string(s: &str) -> Option<KeyEvent> {
    let parts: Vec<&str> = s.trim().split('+').collect();
    let (key_part_raw, modifier_parts) = parts.split_last()?;

    let mut modifiers = KeyModifiers::NONE;
    for modifier in modifier_parts {
        match modifier.to_ascii_lowercase().as_str() {
            "alt" => modifiers |= KeyModifiers::ALT,
            "ctrl" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let mut chars = key_part_raw.chars();
    let single = match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    };

    let code = match (single, key_part_raw.to_ascii_lowercase().as_str()) {
        (Some(ch), _) => KeyCode::Char(ch),
        (None, "tab") => KeyCode::Tab,
        (None, "enter") => KeyCode::Enter,
        (None, "esc") => KeyCode::Esc,
        (None, "backspace") => KeyCode::Backspace,
        (None, "delete") => KeyCode::Delete,
        (None, "up") => KeyCode::Up,
        (None, "down") => KeyCode::Down,
        (None, "left") => KeyCode::Left,
        (None, "right") => KeyCode::Right,
        (None, "home") => KeyCode::Home,
        (None, "end") => KeyCode::End,
        (None, "pageup") => KeyCode::PageUp,
        (None, "pagedown") => KeyCode::PageDown,
        (None, "space") => KeyCode::Char(' '),
        (None, f) if f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        _ => return None,
    };

    Some(normalize_key_event(KeyEvent::new(code, modifiers)))
}
