use crate::domain::model::{LinkTarget, TileBase};
use maud::{html, Markup};
use url::Url;

/// Classifies a guide target. Absolute http(s) URLs leave the site. Rooted
/// paths are source paths and always get the path prefix.
pub fn resolve_link(to: &str, path_prefix: &str) -> LinkTarget {
    if let Ok(url) = Url::parse(to) {
        if matches!(url.scheme(), "http" | "https") {
            return LinkTarget::External(to.to_string());
        }
    }

    let prefix = normalize_prefix(path_prefix);
    if to.starts_with('/') && !prefix.is_empty() {
        LinkTarget::Internal(format!("{}{}", prefix, to))
    } else {
        LinkTarget::Internal(to.to_string())
    }
}

/// `docs/` -> `/docs`, `/` -> ``
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Plain inline link, same resolution rules as tiles.
pub fn text_link(link: &LinkTarget, body: &str) -> Markup {
    let (target, rel) = external_attrs(link);
    html! {
        a href=(link.href()) target=[target] rel=[rel] { (body) }
    }
}

/// A card-shaped link on a themed surface.
pub fn surface_link(link: &LinkTarget, base: TileBase, class: &str, body: Markup) -> Markup {
    let (target, rel) = external_attrs(link);
    html! {
        a class={ "surface " (base.class_name()) " " (class) }
            href=(link.href())
            target=[target]
            rel=[rel] {
            (body)
        }
    }
}

fn external_attrs(link: &LinkTarget) -> (Option<&'static str>, Option<&'static str>) {
    if link.is_external() {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    }
}
