use crate::core::document::DocumentMeta;
use crate::core::page::PageOptions;
use crate::domain::model::{LayoutConfig, LayoutPolicy, PageData};
use crate::domain::ports::PageDataSource;
use crate::utils::error::{DocsError, Result};
use crate::utils::validation::{
    validate_css_length, validate_file_extension, validate_non_empty_string, validate_path,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_FILENAME: &str = "index.html";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub layout: Option<LayoutSection>,
    pub output: OutputSection,
    pub render: Option<RenderSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub title: String,
    pub description: Option<String>,
    pub lang: Option<String>,
    pub path_prefix: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSection {
    pub content_padding: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSection {
    pub layout_policy: Option<LayoutPolicy>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${CONTENT_PADDING})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DocsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("site.title", &self.site.title)?;
        validate_path("output.path", &self.output.path)?;
        validate_file_extension("output.filename", self.filename(), &["html"])?;

        if let Some(layout) = &self.layout {
            validate_css_length("layout.content_padding", &layout.content_padding)?;
        }

        if let Some(base_url) = &self.site.base_url {
            validate_url("site.base_url", base_url)?;
        }

        if let Some(prefix) = &self.site.path_prefix {
            if prefix.contains("://") {
                return Err(DocsError::InvalidConfigValueError {
                    field: "site.path_prefix".to_string(),
                    value: prefix.clone(),
                    reason: "Path prefix must be a path, not a URL".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    pub fn filename(&self) -> &str {
        self.output.filename.as_deref().unwrap_or(DEFAULT_FILENAME)
    }

    pub fn layout_policy(&self) -> LayoutPolicy {
        self.render
            .as_ref()
            .and_then(|r| r.layout_policy)
            .unwrap_or_default()
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            path_prefix: self.site.path_prefix.clone().unwrap_or_default(),
            layout_policy: self.layout_policy(),
        }
    }

    pub fn document_meta(&self) -> DocumentMeta {
        let defaults = DocumentMeta::default();
        DocumentMeta {
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            lang: self.site.lang.clone().unwrap_or(defaults.lang),
            canonical_url: self.site.base_url.clone(),
        }
    }
}

impl PageDataSource for SiteConfig {
    fn page_data(&self) -> Result<PageData> {
        Ok(match &self.layout {
            Some(layout) => PageData::with_layout(LayoutConfig::new(layout.content_padding.clone())),
            None => PageData::default(),
        })
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
