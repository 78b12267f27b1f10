use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    #[serde(alias = "tick-rate-ms")]
    pub tick_rate_ms: u64,
    pub mouse: bool,
    pub title: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250, mouse: true, title: "Items".into() }
    }
}
