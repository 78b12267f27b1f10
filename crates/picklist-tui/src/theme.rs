use picklist_config::ThemeConfig;
use ratatui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub selected: Style,
    pub unselected: Style,
    pub border: Style,
    pub text_dim: Style,
    pub status_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let selected_bg = parse_color_or_default(&config.selected_bg);
        let selected_fg = parse_color_or_default(&config.selected_fg);
        let unselected_bg = parse_color_or_default(&config.unselected_bg);
        let unselected_fg = parse_color_or_default(&config.unselected_fg);
        let border = parse_color_or_default(&config.border);
        let text_dim = parse_color_or_default(&config.text_dim);
        let status_bg = parse_color_or_default(&config.status_bg);
        let status_fg = parse_color_or_default(&config.status_fg);

        Self {
            accent: parse_color_or_default(&config.accent),
            selected: Style::default().fg(selected_fg).bg(selected_bg),
            unselected: Style::default().fg(unselected_fg).bg(unselected_bg),
            border: Style::default().fg(border),
            text_dim: Style::default().fg(text_dim),
            status_bar: Style::default().fg(status_fg).bg(status_bg),
        }
    }

    /// Row style for the two selection states.
    pub fn row(&self, is_selected: bool) -> Style {
        if is_selected {
            self.selected
        } else {
            self.unselected
        }
    }
}

fn parse_color_or_default(s: &str) -> Color {
    parse_color(s).unwrap_or(Color::Reset)
}

/// Unparseable theme entries, as `(field, value, reason)`.
pub fn invalid_colors(config: &ThemeConfig) -> Vec<(&'static str, String, String)> {
    let fields: [(&'static str, &str); 9] = [
        ("selected_bg", config.selected_bg.as_str()),
        ("selected_fg", config.selected_fg.as_str()),
        ("unselected_bg", config.unselected_bg.as_str()),
        ("unselected_fg", config.unselected_fg.as_str()),
        ("accent", config.accent.as_str()),
        ("border", config.border.as_str()),
        ("text_dim", config.text_dim.as_str()),
        ("status_bg", config.status_bg.as_str()),
        ("status_fg", config.status_fg.as_str()),
    ];
    fields
        .into_iter()
        .filter_map(|(name, value)| parse_color(value).err().map(|e| (name, value.to_string(), e.to_string())))
        .collect()
}

/// Parse a color string into a ratatui `Color`.
///
/// Supported formats:
/// - `"#89b4fa"` hex RGB
/// - `"rgb(137,180,250)"` functional RGB
/// - `"red"`, `"green"`, etc. named colors
/// - `"default"` terminal default (`Color::Reset`)
pub fn parse_color(s: &str) -> anyhow::Result<Color> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("default") {
        return Ok(Color::Reset);
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("invalid hex color \"{s}\": expected 6 hex digits after '#'");
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| anyhow::anyhow!("invalid hex color \"{s}\""))
        };
        return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
    }

    if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 3 {
            anyhow::bail!("invalid rgb color \"{s}\": expected rgb(r,g,b)");
        }
        let channel = |part: &str| -> anyhow::Result<u8> {
            part.trim().parse().map_err(|_| anyhow::anyhow!("invalid rgb color \"{s}\": bad value \"{}\"", part.trim()))
        };
        return Ok(Color::Rgb(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?));
    }

    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Ok(Color::DarkGray),
        "lightred" | "light_red" => Ok(Color::LightRed),
        "lightgreen" | "light_green" => Ok(Color::LightGreen),
        "lightyellow" | "light_yellow" => Ok(Color::LightYellow),
        "lightblue" | "light_blue" => Ok(Color::LightBlue),
        "lightmagenta" | "light_magenta" => Ok(Color::LightMagenta),
        "lightcyan" | "light_cyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        _ => anyhow::bail!(
            "unknown color \"{s}\": expected hex (#rrggbb), rgb(r,g,b), a named color (red, green, ...), or \"default\""
        ),
    }
}
