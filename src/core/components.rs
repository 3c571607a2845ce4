use crate::core::icons::Icon;
use crate::core::link::{resolve_link, surface_link};
use crate::domain::model::{GuideEntry, LayoutConfig, RenderedTile, SectionVariant, TileBase, Topic};
use maud::{html, Markup};

pub const SECTION_ICON_SIZE: &str = "3rem";

/// Declarations applied to a section band.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionStyle {
    pub background: Option<&'static str>,
    pub margin: Option<String>,
    pub padding: Option<String>,
}

impl SectionStyle {
    /// Inline `style` value, `None` when nothing applies.
    pub fn to_css(&self) -> Option<String> {
        let mut decls = Vec::with_capacity(3);
        if let Some(background) = self.background {
            decls.push(format!("background: {}", background));
        }
        if let Some(margin) = &self.margin {
            decls.push(format!("margin: {}", margin));
        }
        if let Some(padding) = &self.padding {
            decls.push(format!("padding: {}", padding));
        }

        if decls.is_empty() {
            None
        } else {
            Some(format!("{};", decls.join("; ")))
        }
    }
}

/// Negative horizontal margin plus matching padding lets the background reach
/// the viewport edge while the content stays on the page column.
pub fn section_style(variant: SectionVariant, layout: Option<&LayoutConfig>) -> SectionStyle {
    let background = match variant {
        SectionVariant::Normal => None,
        SectionVariant::Alternate => Some("var(--secondary-background-color)"),
    };

    let padding = layout
        .map(|layout| layout.content_padding.trim())
        .filter(|padding| !padding.is_empty());

    match padding {
        Some(padding) => SectionStyle {
            background,
            margin: Some(format!("0 {}", negate_length(padding))),
            padding: Some(padding.to_string()),
        },
        None => SectionStyle {
            background,
            margin: None,
            padding: None,
        },
    }
}

fn negate_length(length: &str) -> String {
    if let Some(positive) = length.strip_prefix('-') {
        positive.to_string()
    } else if length.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        format!("-{}", length)
    } else {
        // var(), calc() and friends
        format!("calc(-1 * {})", length)
    }
}

pub fn section(
    variant: SectionVariant,
    layout: Option<&LayoutConfig>,
    id: Option<&str>,
    children: Markup,
) -> Markup {
    let style = section_style(variant, layout);
    html! {
        section.page-section.page-section--alternate[variant == SectionVariant::Alternate]
            id=[id]
            style=[style.to_css()] {
            (children)
        }
    }
}

pub fn section_title(topic: Topic) -> Markup {
    html! {
        h2.section-title {
            (Icon::for_topic(topic).render(SECTION_ICON_SIZE))
            (topic.title())
        }
    }
}

pub fn section_description(text: &str) -> Markup {
    html! {
        p.section-description { (text) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    /// 5 / 3 / 1 columns, unnumbered doc tiles.
    Guides,
    /// Hero steps; owns the badge numbering.
    Welcome,
}

/// One tile per entry, in entry order.
pub fn render_tiles(entries: &[GuideEntry], base: TileBase, path_prefix: &str) -> Vec<RenderedTile> {
    entries
        .iter()
        .map(|entry| RenderedTile {
            number: None,
            title: entry.title,
            description: entry.description,
            link: resolve_link(entry.to, path_prefix),
            base,
        })
        .collect()
}

/// Welcome tiles, badges numbered from 1 in entry order.
pub fn number_tiles(entries: &[GuideEntry], path_prefix: &str) -> Vec<RenderedTile> {
    render_tiles(entries, TileBase::Primary, path_prefix)
        .into_iter()
        .enumerate()
        .map(|(index, tile)| RenderedTile {
            number: Some(index + 1),
            ..tile
        })
        .collect()
}

pub fn doc_tile(tile: &RenderedTile) -> Markup {
    surface_link(
        &tile.link,
        tile.base,
        "doc-tile",
        html! {
            h3 { (tile.title) }
            p { (tile.description) }
        },
    )
}

pub fn welcome_tile(tile: &RenderedTile) -> Markup {
    surface_link(
        &tile.link,
        tile.base,
        "welcome-tile",
        html! {
            @if let Some(number) = tile.number {
                span.welcome-tile__badge aria-hidden="true" { (number) }
            }
            h3 { (tile.title) }
            p { (tile.description) }
        },
    )
}

pub fn tile_grid(kind: GridKind, tiles: &[RenderedTile]) -> Markup {
    match kind {
        GridKind::Guides => html! {
            div.tile-grid {
                @for tile in tiles {
                    (doc_tile(tile))
                }
            }
        },
        GridKind::Welcome => html! {
            div.welcome-grid {
                @for tile in tiles {
                    (welcome_tile(tile))
                }
            }
        },
    }
}
