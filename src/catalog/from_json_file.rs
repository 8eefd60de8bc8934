use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::log_info;
use super::{Catalog, QuizPack};

impl Catalog {
    /// Loads a JSON array of packs in the same camelCase layout the state
    /// file uses, then validates it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        log_info!("Loaded {} quiz packs from {}", catalog.packs.len(), path.display());
        Ok(catalog)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let packs: Vec<QuizPack> = serde_json::from_str(contents)?;
        let catalog = Self::new(packs);
        catalog.validate()?;
        Ok(catalog)
    }
}
