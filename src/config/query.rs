use crate::domain::model::PageData;
use crate::domain::ports::PageDataSource;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Page data produced by an external query, stored as JSON on disk.
#[derive(Debug, Clone)]
pub struct JsonPageData {
    path: PathBuf,
}

impl JsonPageData {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn from_json_str(content: &str) -> Result<PageData> {
        Ok(serde_json::from_str(content)?)
    }
}

impl PageDataSource for JsonPageData {
    fn page_data(&self) -> Result<PageData> {
        tracing::debug!("Reading page data from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)?;
        Self::from_json_str(&content)
    }
}
