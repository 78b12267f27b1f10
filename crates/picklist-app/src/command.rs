#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reload,
    CursorUp,
    CursorDown,
    Activate,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quit" => Some(Self::Quit),
            "reload" => Some(Self::Reload),
            "cursor_up" => Some(Self::CursorUp),
            "cursor_down" => Some(Self::CursorDown),
            "activate" => Some(Self::Activate),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Reload => "Reload",
            Self::CursorUp => "Up",
            Self::CursorDown => "Down",
            Self::Activate => "Select",
        }
    }
}
