use std::path::PathBuf;
use std::sync::Arc;

use crate::error::ItemsError;
use crate::item::{Item, Items};

/// Where the list's items come from. Every `load` builds a fresh sequence,
/// so reloading always yields a new reference.
#[derive(Debug, Clone)]
pub enum ItemSource {
    File(PathBuf),
    /// JSON captured up front, e.g. from stdin which can only be read once.
    Json { origin: String, contents: String },
    Inline(Vec<String>),
    Absent,
}

impl ItemSource {
    pub fn load(&self) -> Result<Items, ItemsError> {
        match self {
            Self::File(path) => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| ItemsError::Io { path: path.clone(), source })?;
                let items = parse_items(&path.display().to_string(), &contents)?;
                tracing::info!("Loaded {} items from {}", items.as_ref().map_or(0, |i| i.len()), path.display());
                Ok(items)
            }
            Self::Json { origin, contents } => parse_items(origin, contents),
            Self::Inline(texts) => Ok(Some(texts.iter().map(|t| Item::new(t.as_str())).collect::<Arc<[Item]>>())),
            Self::Absent => Ok(None),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Json { origin, .. } => origin.clone(),
            Self::Inline(texts) => format!("{} inline items", texts.len()),
            Self::Absent => "no items".to_string(),
        }
    }
}

/// Parses a JSON array of `{ "text": ... }` records. A top-level `null`
/// yields absent items.
pub fn parse_items(origin: &str, contents: &str) -> Result<Items, ItemsError> {
    let parsed: Option<Vec<Item>> = serde_json::from_str(contents)
        .map_err(|source| ItemsError::Parse { origin: origin.to_string(), source })?;
    Ok(parsed.map(Arc::from))
}
