use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(alias = "selected-bg")]
    pub selected_bg: String,
    #[serde(alias = "selected-fg")]
    pub selected_fg: String,
    #[serde(alias = "unselected-bg")]
    pub unselected_bg: String,
    #[serde(alias = "unselected-fg")]
    pub unselected_fg: String,
    pub accent: String,
    pub border: String,
    #[serde(alias = "text-dim")]
    pub text_dim: String,
    #[serde(alias = "status-bg")]
    pub status_bg: String,
    #[serde(alias = "status-fg")]
    pub status_fg: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            selected_bg: "green".into(),
            selected_fg: "black".into(),
            unselected_bg: "red".into(),
            unselected_fg: "white".into(),
            accent: "#89b4fa".into(),
            border: "#585b70".into(),
            text_dim: "#6c7086".into(),
            status_bg: "#1e1e2e".into(),
            status_fg: "#cdd6f4".into(),
        }
    }
}
