use std::collections::HashMap;

use crossterm::event::KeyEvent;

use picklist_config::KeybindingsConfig;

use crate::command::Command;

mod parsing;

pub use parsing::parse_key_string;

use parsing::{format_key_display, normalize_key_event};

pub struct KeybindingDispatcher {
    bindings: HashMap<KeyEvent, Command>,
    /// `(key display, description)` in config order.
    hints: Vec<(String, String)>,
}

impl KeybindingDispatcher {
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut hints = Vec::new();
        for (name, key_str) in config.iter() {
            let Some(cmd) = Command::from_name(name) else {
                tracing::warn!("Unknown keybinding action \"{name}\"");
                continue;
            };
            let Some(key) = parse_key_string(key_str) else {
                tracing::warn!("Cannot parse key \"{key_str}\" for \"{name}\"");
                continue;
            };
            bindings.insert(key, cmd);
            hints.push((format_key_display(key_str), cmd.description().to_string()));
        }
        Self { bindings, hints }
    }

    pub fn dispatch(&self, key: KeyEvent) -> Option<Command> {
        let normalized = normalize_key_event(KeyEvent::new(key.code, key.modifiers));
        self.bindings.get(&normalized).copied()
    }

    pub fn hints(&self) -> &[(String, String)] {
        &self.hints
    }
}
