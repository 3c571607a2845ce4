use serde::{Deserialize, Serialize};

/// One documentation entry point shown as a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuideEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub to: &'static str,
}

impl GuideEntry {
    pub const fn new(title: &'static str, description: &'static str, to: &'static str) -> Self {
        Self {
            title,
            description,
            to,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Topic {
    TelemetryDataPlatform,
    FullStackObservability,
    AppliedIntelligence,
}

impl Topic {
    pub fn title(&self) -> &'static str {
        match self {
            Topic::TelemetryDataPlatform => "Telemetry Data Platform",
            Topic::FullStackObservability => "Full-Stack Observability",
            Topic::AppliedIntelligence => "Alerts and Applied Intelligence (AI)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Topic::TelemetryDataPlatform => {
                "Ingest, visualize, and alert on all your telemetry data in one place."
            }
            Topic::FullStackObservability => {
                "Analyze and troubleshoot problems easily across your entire software stack."
            }
            Topic::AppliedIntelligence => {
                "Automatically detect anomalies, correlate issues, and reduce alert noise."
            }
        }
    }

    /// Anchor id for the section element.
    pub fn slug(&self) -> &'static str {
        match self {
            Topic::TelemetryDataPlatform => "telemetry-data-platform",
            Topic::FullStackObservability => "full-stack-observability",
            Topic::AppliedIntelligence => "applied-intelligence",
        }
    }
}

/// Ordered guides for one topic. Order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuideDataset {
    pub topic: Topic,
    pub entries: &'static [GuideEntry],
}

impl GuideDataset {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub content_padding: String,
}

impl LayoutConfig {
    pub fn new(content_padding: impl Into<String>) -> Self {
        Self {
            content_padding: content_padding.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(default)]
    pub layout: Option<LayoutConfig>,
}

/// 外部資料查詢的結果：`{ "site": { "layout": { "contentPadding": "2rem" } } }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub site: SiteData,
}

impl PageData {
    pub fn with_layout(layout: LayoutConfig) -> Self {
        Self {
            site: SiteData {
                layout: Some(layout),
            },
        }
    }

    pub fn layout(&self) -> Option<&LayoutConfig> {
        self.site.layout.as_ref()
    }
}

/// Background treatment of a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SectionVariant {
    #[default]
    Normal,
    Alternate,
}

impl SectionVariant {
    pub fn alternate(self) -> Self {
        match self {
            SectionVariant::Normal => SectionVariant::Alternate,
            SectionVariant::Alternate => SectionVariant::Normal,
        }
    }
}

/// Surface elevation of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TileBase {
    Primary,
    Secondary,
}

impl TileBase {
    pub fn class_name(&self) -> &'static str {
        match self {
            TileBase::Primary => "surface--primary",
            TileBase::Secondary => "surface--secondary",
        }
    }
}

/// Where a tile link points once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LinkTarget {
    Internal(String),
    External(String),
}

impl LinkTarget {
    pub fn href(&self) -> &str {
        match self {
            LinkTarget::Internal(href) | LinkTarget::External(href) => href,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }
}

/// Output of a grid's render pass, one per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTile {
    pub number: Option<usize>,
    pub title: &'static str,
    pub description: &'static str,
    pub link: LinkTarget,
    pub base: TileBase,
}

/// What to do when the page data carries no layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPolicy {
    /// Render anyway without section spacing.
    #[default]
    Permissive,
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_data_from_query_json() {
        let data: PageData =
            serde_json::from_str(r#"{"site":{"layout":{"contentPadding":"2rem"}}}"#).unwrap();
        assert_eq!(data.layout(), Some(&LayoutConfig::new("2rem")));
    }

    #[test]
    fn test_page_data_without_layout() {
        let data: PageData = serde_json::from_str(r#"{"site":{}}"#).unwrap();
        assert!(data.layout().is_none());

        let data: PageData = serde_json::from_str("{}").unwrap();
        assert!(data.layout().is_none());
    }

    #[test]
    fn test_section_variant_alternates() {
        let v = SectionVariant::default();
        assert_eq!(v, SectionVariant::Normal);
        assert_eq!(v.alternate(), SectionVariant::Alternate);
        assert_eq!(v.alternate().alternate(), SectionVariant::Normal);
    }

    #[test]
    fn test_layout_policy_names() {
        let p: LayoutPolicy = serde_json::from_str(r#""strict""#).unwrap();
        assert_eq!(p, LayoutPolicy::Strict);
        assert_eq!(LayoutPolicy::default(), LayoutPolicy::Permissive);
    }
}
