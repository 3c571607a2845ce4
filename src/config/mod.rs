pub mod cli;
pub mod query;
pub mod toml_config;

use crate::domain::model::{LayoutConfig, PageData};
use crate::domain::ports::PageDataSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_css_length;
use query::JsonPageData;
use toml_config::{OutputSection, SiteConfig, SiteSection};

#[cfg(feature = "cli")]
use crate::domain::model::LayoutPolicy;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::RenderSection;

pub const DEFAULT_OUTPUT_PATH: &str = "./public";
pub const DEFAULT_TITLE: &str = "New Relic Documentation";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "docs-home")]
#[command(about = "Render the documentation home page to static HTML")]
pub struct CliConfig {
    /// Path to a TOML site config
    #[arg(short, long)]
    pub config: Option<String>,

    /// JSON page data, e.g. {"site":{"layout":{"contentPadding":"2rem"}}}
    #[arg(short, long)]
    pub query: Option<String>,

    /// Output directory, overrides [output] path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Overrides the layout content padding from config or query
    #[arg(long)]
    pub content_padding: Option<String>,

    #[arg(long)]
    pub path_prefix: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// Fail instead of rendering when no layout is supplied
    #[arg(long)]
    pub strict: bool,

    /// Show what would be rendered without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                SiteConfig::from_file(path)?
            }
            None => default_site_config(),
        };

        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(title) = &self.title {
            config.site.title = title.clone();
        }
        if let Some(prefix) = &self.path_prefix {
            config.site.path_prefix = Some(prefix.clone());
        }
        if self.strict {
            config.render = Some(RenderSection {
                layout_policy: Some(LayoutPolicy::Strict),
            });
        }

        Ok(config)
    }

    pub fn page_data_source(&self, config: &SiteConfig) -> CliPageData {
        CliPageData::new(
            config.clone(),
            self.query.as_ref().map(JsonPageData::new),
            self.content_padding.clone(),
        )
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(padding) = &self.content_padding {
            validate_css_length("content_padding", padding)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        if let Some(query) = &self.query {
            validate_path("query", query)?;
        }
        Ok(())
    }
}

pub fn default_site_config() -> SiteConfig {
    SiteConfig {
        site: SiteSection {
            title: DEFAULT_TITLE.to_string(),
            description: None,
            lang: None,
            path_prefix: None,
            base_url: None,
        },
        layout: None,
        output: OutputSection {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            filename: None,
        },
        render: None,
    }
}

/// Page data as the CLI sees it: query file if given, else the site config,
/// with `--content-padding` on top.
#[derive(Debug, Clone)]
pub struct CliPageData {
    config: SiteConfig,
    query: Option<JsonPageData>,
    content_padding: Option<String>,
}

impl CliPageData {
    pub fn new(config: SiteConfig, query: Option<JsonPageData>, content_padding: Option<String>) -> Self {
        Self {
            config,
            query,
            content_padding,
        }
    }
}

impl PageDataSource for CliPageData {
    fn page_data(&self) -> Result<PageData> {
        let mut data = match &self.query {
            Some(query) => query.page_data()?,
            None => self.config.page_data()?,
        };

        if let Some(padding) = &self.content_padding {
            tracing::debug!("contentPadding overridden to {}", padding);
            data.site.layout = Some(LayoutConfig::new(padding.clone()));
        }

        if let Some(layout) = data.layout() {
            validate_css_length("site.layout.contentPadding", &layout.content_padding)?;
        }

        Ok(data)
    }
}
