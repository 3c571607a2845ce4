use crate::core::page::HomePage;
use crate::core::styles::stylesheet;
use crate::utils::error::Result;
use maud::{html, PreEscaped, DOCTYPE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: String,
    pub description: Option<String>,
    pub lang: String,
    /// Absolute URL of the published page.
    pub canonical_url: Option<String>,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            title: "New Relic Documentation".to_string(),
            description: None,
            lang: "en".to_string(),
            canonical_url: None,
        }
    }
}

/// Full HTML document for the page. Same inputs give byte-identical output.
pub fn render_document(page: &HomePage, meta: &DocumentMeta) -> Result<String> {
    let body = page.render()?;
    let css = stylesheet()?;

    let content_padding = page
        .data()
        .layout()
        .map(|layout| layout.content_padding.trim())
        .filter(|padding| !padding.is_empty())
        .map(|padding| format!("padding: 0 {};", padding));

    let markup = html! {
        (DOCTYPE)
        html lang=(meta.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                @if let Some(description) = &meta.description {
                    meta name="description" content=(description);
                }
                @if let Some(canonical) = &meta.canonical_url {
                    link rel="canonical" href=(canonical);
                }
                style { (PreEscaped(css)) }
            }
            body {
                main style=[content_padding] {
                    (body)
                }
            }
        }
    };

    Ok(markup.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::PageOptions;
    use crate::domain::model::{LayoutConfig, PageData};

    fn home(padding: &str) -> HomePage {
        HomePage::new(
            PageData::with_layout(LayoutConfig::new(padding)),
            PageOptions::default(),
        )
    }

    #[test]
    fn test_document_shell() {
        let meta = DocumentMeta {
            title: "Docs & Guides".to_string(),
            description: Some("Start here".to_string()),
            lang: "en".to_string(),
            canonical_url: Some("https://docs.newrelic.com/".to_string()),
        };
        let html = render_document(&home("2rem"), &meta).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Docs &amp; Guides</title>"));
        assert!(html.contains(r#"<meta name="description" content="Start here">"#));
        assert!(html.contains(r#"<main style="padding: 0 2rem;">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://docs.newrelic.com/">"#));
        assert!(html.contains("@keyframes pulse"));
    }

    #[test]
    fn test_document_is_deterministic() {
        let meta = DocumentMeta::default();
        let a = render_document(&home("24px"), &meta).unwrap();
        let b = render_document(&home("24px"), &meta).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_document_without_layout() {
        let page = HomePage::new(PageData::default(), PageOptions::default());
        let html = render_document(&page, &DocumentMeta::default()).unwrap();
        assert!(html.contains("<main>"));
        assert!(!html.contains("undefined"));
    }
}
