use anyhow::Result;
use docs_home::domain::guides::{guide_datasets, WELCOME_STEPS};
use docs_home::{
    render_document, DocsError, DocumentMeta, HomePage, LayoutConfig, LayoutPolicy,
    LocalStorage, PageData, PageOptions, SiteRenderer,
};
use tempfile::TempDir;

fn page_with(padding: Option<&str>, policy: LayoutPolicy) -> HomePage {
    let data = match padding {
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

/// 端到端：渲染並寫入 index.html
#[test]
fn test_end_to_end_render_to_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let renderer = SiteRenderer::new(
        LocalStorage::new(output_path.clone()),
        PageData::with_layout(LayoutConfig::new("2rem")),
        DocumentMeta::default(),
        PageOptions::default(),
    );

    let written = renderer.run()?;
    assert!(written.ends_with("index.html"));

    let full_path = std::path::Path::new(&output_path).join("index.html");
    assert!(full_path.exists());

    let html = std::fs::read_to_string(full_path)?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Welcome to New Relic</h1>"));
    for dataset in guide_datasets() {
        assert!(html.contains(dataset.topic.title()));
    }
    Ok(())
}

#[test]
fn test_every_guide_is_linked_in_order() {
    let html = page_with(Some("2rem"), LayoutPolicy::Permissive)
        .render()
        .unwrap()
        .into_string();

    let mut cursor = 0;
    let entries = WELCOME_STEPS
        .iter()
        .chain(guide_datasets().into_iter().flat_map(|d| d.entries.iter()));
    for entry in entries {
        let needle = format!(r#"href="{}""#, entry.to);
        let found = html[cursor..]
            .find(&needle)
            .unwrap_or_else(|| panic!("{} missing or out of order", entry.title));
        cursor += found + needle.len();
    }
}

#[test]
fn test_section_backgrounds_alternate() {
    let html = page_with(Some("2rem"), LayoutPolicy::Permissive)
        .render()
        .unwrap()
        .into_string();

    let sections: Vec<&str> = html.split("<section").skip(1).collect();
    assert_eq!(sections.len(), 4);

    let alternates: Vec<bool> = sections
        .iter()
        .map(|s| {
            let open_tag = &s[..s.find('>').unwrap()];
            open_tag.contains("var(--secondary-background-color)")
        })
        .collect();
    assert_eq!(alternates, vec![false, true, false, true]);
}

#[test]
fn test_welcome_badges_numbered_from_one() {
    let html = page_with(Some("2rem"), LayoutPolicy::Permissive)
        .render()
        .unwrap()
        .into_string();

    let badges: Vec<&str> = html
        .split(r#"<span class="welcome-tile__badge" aria-hidden="true">"#)
        .skip(1)
        .map(|rest| &rest[..rest.find('<').unwrap()])
        .collect();
    assert_eq!(badges, vec!["1", "2", "3"]);
}

#[test]
fn test_identical_inputs_identical_documents() {
    let meta = DocumentMeta::default();
    let first = render_document(&page_with(Some("1.5rem"), LayoutPolicy::Permissive), &meta).unwrap();
    let second =
        render_document(&page_with(Some("1.5rem"), LayoutPolicy::Permissive), &meta).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_layout_policies() {
    let meta = DocumentMeta::default();

    let html = render_document(&page_with(None, LayoutPolicy::Permissive), &meta).unwrap();
    assert!(!html.contains("undefined"));
    assert!(html.contains("Full-Stack Observability"));

    let err = render_document(&page_with(None, LayoutPolicy::Strict), &meta).unwrap_err();
    assert!(matches!(err, DocsError::MissingLayout));
}
