use crate::core::document::{render_document, DocumentMeta};
use crate::core::page::{HomePage, PageOptions};
use crate::core::{PageDataSource, Storage};
use crate::utils::error::Result;

pub struct SiteRenderer<S: Storage, D: PageDataSource> {
    storage: S,
    source: D,
    meta: DocumentMeta,
    options: PageOptions,
    filename: String,
}

impl<S: Storage, D: PageDataSource> SiteRenderer<S, D> {
    pub fn new(storage: S, source: D, meta: DocumentMeta, options: PageOptions) -> Self {
        Self {
            storage,
            source,
            meta,
            options,
            filename: "index.html".to_string(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Query page data once, render, write. Returns the written path.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Querying page data...");
        let data = self.source.page_data()?;
        match data.layout() {
            Some(layout) => tracing::debug!("contentPadding = {}", layout.content_padding),
            None => tracing::debug!("No layout in page data"),
        }

        tracing::info!("Rendering home page...");
        let page = HomePage::new(data, self.options.clone());
        let document = render_document(&page, &self.meta)?;
        tracing::debug!("Rendered {} bytes", document.len());

        tracing::info!("Writing {}...", self.filename);
        let output_path = self.storage.write_file(&self.filename, document.as_bytes())?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LayoutConfig, LayoutPolicy, PageData};
    use crate::utils::error::DocsError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl Storage for MemoryStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                DocsError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, path.to_string()))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
            self.files.borrow_mut().insert(path.to_string(), data.to_vec());
            Ok(format!("memory://{}", path))
        }
    }

    #[test]
    fn test_run_writes_document() {
        let renderer = SiteRenderer::new(
            MemoryStorage::default(),
            PageData::with_layout(LayoutConfig::new("2rem")),
            DocumentMeta::default(),
            PageOptions::default(),
        )
        .with_filename("home.html");

        let path = renderer.run().unwrap();
        assert_eq!(path, "memory://home.html");

        let written = renderer.storage.read_file("home.html").unwrap();
        let html = String::from_utf8(written).unwrap();
        assert!(html.contains("Telemetry Data Platform"));
    }

    #[test]
    fn test_run_strict_without_layout_writes_nothing() {
        let renderer = SiteRenderer::new(
            MemoryStorage::default(),
            PageData::default(),
            DocumentMeta::default(),
            PageOptions {
                path_prefix: String::new(),
                layout_policy: LayoutPolicy::Strict,
            },
        );

        assert!(matches!(renderer.run(), Err(DocsError::MissingLayout)));
        assert!(renderer.storage.files.borrow().is_empty());
    }
}
