pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, query::JsonPageData, toml_config::SiteConfig};
pub use core::{
    document::{render_document, DocumentMeta},
    page::{HomePage, PageOptions},
    renderer::SiteRenderer,
};
pub use domain::model::{LayoutConfig, LayoutPolicy, PageData};
pub use utils::error::{DocsError, Result};
