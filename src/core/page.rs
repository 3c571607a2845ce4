use crate::core::components::{
    number_tiles, render_tiles, section, section_description, section_title, tile_grid, GridKind,
};
use crate::core::link::{resolve_link, text_link};
use crate::domain::guides::{guide_datasets, WELCOME_STEPS};
use crate::domain::model::{
    GuideDataset, LayoutConfig, LayoutPolicy, PageData, RenderedTile, SectionVariant, TileBase,
};
use crate::utils::error::{DocsError, Result};
use maud::{html, Markup};
use serde::Serialize;

const TRANSITION_GUIDE: &str =
    "/docs/new-relic-one/use-new-relic-one/core-concepts/new-relic-one-transition-guide-july-2020";
const WHATS_NEW: &str = "/whats-new";
const INTRO_TO_NEW_RELIC: &str =
    "/docs/using-new-relic/welcome-new-relic/get-started/introduction-new-relic";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub path_prefix: String,
    pub layout_policy: LayoutPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Guides(GuideDataset),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub kind: SectionKind,
    pub variant: SectionVariant,
    pub base: TileBase,
}

impl SectionSpec {
    pub fn id(&self) -> &'static str {
        match self.kind {
            SectionKind::Hero => "welcome",
            SectionKind::Guides(dataset) => dataset.topic.slug(),
        }
    }
}

/// What a section will show, for dry runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub id: &'static str,
    pub variant: SectionVariant,
    pub tiles: Vec<RenderedTile>,
}

/// The documentation home page: hero followed by the three topic sections.
#[derive(Debug, Clone)]
pub struct HomePage {
    data: PageData,
    options: PageOptions,
}

impl HomePage {
    pub fn new(data: PageData, options: PageOptions) -> Self {
        Self { data, options }
    }

    pub fn data(&self) -> &PageData {
        &self.data
    }

    /// Fixed section order; the background alternates starting from normal.
    pub fn sections(&self) -> Vec<SectionSpec> {
        let [tdp, fso, ai] = guide_datasets();
        let kinds = [
            (SectionKind::Hero, TileBase::Primary),
            (SectionKind::Guides(tdp), TileBase::Secondary),
            (SectionKind::Guides(fso), TileBase::Primary),
            (SectionKind::Guides(ai), TileBase::Secondary),
        ];

        let mut variant = SectionVariant::Normal;
        kinds
            .into_iter()
            .map(|(kind, base)| {
                let spec = SectionSpec {
                    kind,
                    variant,
                    base,
                };
                variant = variant.alternate();
                spec
            })
            .collect()
    }

    /// 依照 layout policy 取得 layout
    pub fn layout(&self) -> Result<Option<&LayoutConfig>> {
        match (self.data.layout(), self.options.layout_policy) {
            (Some(layout), _) => Ok(Some(layout)),
            (None, LayoutPolicy::Strict) => Err(DocsError::MissingLayout),
            (None, LayoutPolicy::Permissive) => {
                tracing::warn!("Page data has no site.layout, sections render without edge padding");
                Ok(None)
            }
        }
    }

    pub fn tiles(&self, spec: &SectionSpec) -> Vec<RenderedTile> {
        match spec.kind {
            SectionKind::Hero => number_tiles(WELCOME_STEPS, &self.options.path_prefix),
            SectionKind::Guides(dataset) => {
                render_tiles(dataset.entries, spec.base, &self.options.path_prefix)
            }
        }
    }

    pub fn summary(&self) -> Vec<SectionSummary> {
        self.sections()
            .iter()
            .map(|spec| SectionSummary {
                id: spec.id(),
                variant: spec.variant,
                tiles: self.tiles(spec),
            })
            .collect()
    }

    pub fn render(&self) -> Result<Markup> {
        let layout = self.layout()?;
        let sections = self.sections();
        tracing::debug!("Rendering {} sections", sections.len());

        Ok(html! {
            @for spec in &sections {
                (self.render_section(spec, layout))
            }
        })
    }

    fn render_section(&self, spec: &SectionSpec, layout: Option<&LayoutConfig>) -> Markup {
        let tiles = self.tiles(spec);
        tracing::debug!("{}: {} tiles", spec.id(), tiles.len());

        match spec.kind {
            SectionKind::Hero => section(spec.variant, layout, Some(spec.id()), self.hero(&tiles)),
            SectionKind::Guides(dataset) => {
                section(
                    spec.variant,
                    layout,
                    Some(spec.id()),
                    html! {
                        (section_title(dataset.topic))
                        (section_description(dataset.topic.description()))
                        (tile_grid(GridKind::Guides, &tiles))
                    },
                )
            }
        }
    }

    fn hero(&self, steps: &[RenderedTile]) -> Markup {
        let prefix = &self.options.path_prefix;

        html! {
            div.hero {
                div.hero__intro {
                    h1 { "Welcome to New Relic" }
                    p {
                        "If you're new, follow these three steps to create an account and get going (it's free!)."
                    }
                    p {
                        "If you're catching up on the changes in New Relic One, start with "
                        (text_link(&resolve_link(TRANSITION_GUIDE, prefix), "this transition guide"))
                        " or check out "
                        (text_link(&resolve_link(WHATS_NEW, prefix), "what's new"))
                        "."
                    }
                    p {
                        "Scroll on for more about our Telemetry Data Platform, Full-Stack Observability, and Applied Intelligence. Or get a wider view of the platform with our "
                        (text_link(&resolve_link(INTRO_TO_NEW_RELIC, prefix), "Intro to New Relic"))
                        "."
                    }
                }
                (tile_grid(GridKind::Welcome, steps))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Topic;

    fn page(layout: Option<&str>, policy: LayoutPolicy) -> HomePage {
        let data = match layout {
            Some(padding) => PageData::with_layout(LayoutConfig::new(padding)),
            None => PageData::default(),
        };
        HomePage::new(
            data,
            PageOptions {
                path_prefix: String::new(),
                layout_policy: policy,
            },
        )
    }

    #[test]
    fn test_section_order_and_variants() {
        let sections = page(Some("2rem"), LayoutPolicy::Permissive).sections();
        let variants: Vec<_> = sections.iter().map(|s| s.variant).collect();
        assert_eq!(
            variants,
            vec![
                SectionVariant::Normal,
                SectionVariant::Alternate,
                SectionVariant::Normal,
                SectionVariant::Alternate,
            ]
        );

        assert_eq!(sections[0].kind, SectionKind::Hero);
        let topics: Vec<_> = sections[1..]
            .iter()
            .map(|s| match s.kind {
                SectionKind::Guides(d) => d.topic,
                SectionKind::Hero => panic!("hero out of place"),
            })
            .collect();
        assert_eq!(
            topics,
            vec![
                Topic::TelemetryDataPlatform,
                Topic::FullStackObservability,
                Topic::AppliedIntelligence,
            ]
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let page = page(Some("2rem"), LayoutPolicy::Permissive);
        let first = page.render().unwrap().into_string();
        let second = page.render().unwrap().into_string();
        assert_eq!(first, second);
        assert_eq!(page.sections(), page.sections());
    }

    #[test]
    fn test_render_counts_tiles() {
        let html = page(Some("2rem"), LayoutPolicy::Permissive)
            .render()
            .unwrap()
            .into_string();
        assert_eq!(html.matches("<section").count(), 4);
        assert_eq!(html.matches(r#"doc-tile""#).count(), 7 + 9 + 5);
        assert_eq!(html.matches(r#"welcome-tile""#).count(), 3);
        assert_eq!(html.matches("margin: 0 -2rem; padding: 2rem;").count(), 4);
    }

    #[test]
    fn test_missing_layout_permissive() {
        let html = page(None, LayoutPolicy::Permissive)
            .render()
            .unwrap()
            .into_string();
        assert!(!html.contains("undefined"));
        assert!(!html.contains("margin:"));
        assert_eq!(html.matches("<section").count(), 4);
    }

    #[test]
    fn test_missing_layout_strict() {
        let result = page(None, LayoutPolicy::Strict).render();
        assert!(matches!(result, Err(DocsError::MissingLayout)));
    }

    #[test]
    fn test_summary_matches_datasets() {
        let summary = page(Some("2rem"), LayoutPolicy::Permissive).summary();
        let ids: Vec<_> = summary.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "welcome",
                "telemetry-data-platform",
                "full-stack-observability",
                "applied-intelligence",
            ]
        );
        let numbers: Vec<_> = summary[0].tiles.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![Some(1), Some(2), Some(3)]);
        assert!(summary[1..]
            .iter()
            .flat_map(|s| s.tiles.iter())
            .all(|t| t.number.is_none()));
        assert_eq!(summary[1].tiles[0].base, TileBase::Secondary);
        assert_eq!(summary[2].tiles[0].base, TileBase::Primary);
    }

    #[test]
    fn test_hero_links_use_prefix() {
        let page = HomePage::new(
            PageData::with_layout(LayoutConfig::new("1rem")),
            PageOptions {
                path_prefix: "/docs-site".to_string(),
                layout_policy: LayoutPolicy::Permissive,
            },
        );
        let html = page.render().unwrap().into_string();
        assert!(html.contains(r#"href="/docs-site/whats-new""#));
        assert!(html.contains(r#"href="https://newrelic.com/signup" target="_blank""#));
    }
}
