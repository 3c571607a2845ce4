use crate::domain::model::PageData;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

/// The page-level data query. Resolved once per render.
pub trait PageDataSource {
    fn page_data(&self) -> Result<PageData>;
}

impl PageDataSource for PageData {
    fn page_data(&self) -> Result<PageData> {
        Ok(self.clone())
    }
}
