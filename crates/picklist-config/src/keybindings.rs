use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Action name to key string, e.g. `quit = "q"` or `reload = "ctrl+r"`.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct KeybindingsConfig {
    pub bindings: IndexMap<String, String>,
}

impl KeybindingsConfig {
    pub fn get(&self, action: &str) -> Option<&str> {
        self.bindings.get(action).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.bindings.iter()
    }
}

/// Returns `(action, key, reason)` for every binding whose key string does
/// not parse.
pub fn validate_keybindings(config: &KeybindingsConfig) -> Vec<(String, String, String)> {
    let mut errors = Vec::new();
    for (name, key_str) in config.iter() {
        if let Err(e) = validate_key_string(key_str) {
            errors.push((name.clone(), key_str.clone(), e));
        }
    }
    errors
}

/// Returns `(key, first_action, second_action)` for every key bound twice.
pub fn check_collisions(config: &KeybindingsConfig) -> Vec<(String, String, String)> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut collisions = Vec::new();
    for (name, key_str) in config.iter() {
        let normalized = canonical_key(key_str);
        if let Some(prev) = seen.get(&normalized) {
            collisions.push((key_str.clone(), prev.clone(), name.clone()));
        } else {
            seen.insert(normalized, name.clone());
        }
    }
    collisions
}

/// Spells a key string the way the dispatcher resolves it: modifiers in a
/// fixed order, `Q` as `shift+Q`, and `ctrl+<letter>` case-insensitive.
fn canonical_key(s: &str) -> String {
    let parts: Vec<&str> = s.trim().split('+').collect();
    let Some((key, modifier_parts)) = parts.split_last() else { return String::new() };

    let mut ctrl = false;
    let mut alt = false;
    let mut shift = false;
    for modifier in modifier_parts {
        match modifier.to_ascii_lowercase().as_str() {
            "ctrl" => ctrl = true,
            "alt" => alt = true,
            "shift" => shift = true,
            other => return format!("{other}+{key}"),
        }
    }

    let mut chars = key.chars();
    let key = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() && ctrl => {
            shift = false;
            c.to_ascii_lowercase().to_string()
        }
        (Some(c), None) if c.is_ascii_alphabetic() && (shift || c.is_ascii_uppercase()) => {
            shift = true;
            c.to_ascii_uppercase().to_string()
        }
        (Some(c), None) => c.to_string(),
        _ => key.to_ascii_lowercase(),
    };

    let mut canonical = String::new();
    for (on, name) in [(ctrl, "ctrl+"), (alt, "alt+"), (shift, "shift+")] {
        if on {
            canonical.push_str(name);
        }
    }
    canonical.push_str(&key);
    canonical
}

fn validate_key_string(s: &str) -> Result<(), String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("empty key string".to_string());
    }
    let parts: Vec<&str> = trimmed.split('+').collect();
    if parts.len() == 1 {
        validate_key_part(parts[0])?;
        return Ok(());
    }
    for &modifier in &parts[..parts.len() - 1] {
        match modifier.to_ascii_lowercase().as_str() {
            "alt" | "ctrl" | "shift" => {}
            other => return Err(format!("unknown modifier: {other}")),
        }
    }
    validate_key_part(parts[parts.len() - 1])
}

fn validate_key_part(s: &str) -> Result<(), String> {
    let lower = s.to_ascii_lowercase();
    match lower.as_str() {
        "tab" | "enter" | "esc" | "backspace" | "delete" | "up" | "down" | "left" | "right" | "home" | "end"
        | "pageup" | "pagedown" | "space" => Ok(()),
        _ if s.chars().count() == 1 => Ok(()),
        f if f.starts_with('f') => f[1..].parse::<u8>().map(|_| ()).map_err(|_| format!("invalid function key: {s}")),
        _ => Err(format!("unrecognized key: {s}")),
    }
}
