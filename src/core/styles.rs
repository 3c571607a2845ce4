use crate::utils::error::{DocsError, Result};

pub const ACCENT: &str = "#008c99";

/// Column breakpoints of the guide grids: 5 columns, then 3, then 1.
pub const GRID_COLUMNS_WIDE: usize = 5;
pub const GRID_COLUMNS_MEDIUM: usize = 3;
pub const GRID_BREAKPOINT_MEDIUM: &str = "1470px";
pub const GRID_BREAKPOINT_NARROW: &str = "700px";
pub const HERO_BREAKPOINT: &str = "1500px";

const THEME_CSS: &str = r#":root {
  --primary-background-color: #ffffff;
  --secondary-background-color: #f4f5f5;
  --primary-text-color: #000e0e;
  --border-color: #e3e4e4;
  --color-teal-500: #008c99;
}

*, *::before, *::after { box-sizing: border-box; }

body {
  margin: 0;
  font-family: "Open Sans", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
  color: var(--primary-text-color);
  background: var(--primary-background-color);
}

main { overflow-x: hidden; }

.surface {
  display: block;
  border: 1px solid var(--border-color);
  border-radius: 4px;
  text-decoration: none;
}

.surface--primary { background: var(--primary-background-color); }

.surface--secondary {
  background: var(--primary-background-color);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
}

.section-title {
  display: flex;
  align-items: center;
}

.section-icon { margin-right: 1rem; }

.section-description { font-size: 1.125rem; }
"#;

const HERO_CSS: &str = r#"
.hero {
  display: flex;
}

.hero__intro {
  flex: 1;
  margin-right: 2rem;
}

.welcome-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  grid-gap: 1rem;
  flex: 2;
}

.welcome-tile {
  text-align: center;
  padding: 4rem 1rem 0;
  color: currentColor;
  position: relative;
  height: 250px;
}

.welcome-tile__badge {
  display: flex;
  align-items: center;
  justify-content: center;
  position: absolute;
  top: 0;
  left: 50%;
  transform: translate(-50%, -50%);
  border-radius: 50%;
  height: 2rem;
  width: 2rem;
  border: 1px solid var(--color-teal-500);
  background: var(--primary-background-color);
  z-index: 1;
}

.welcome-tile:hover { color: currentColor; }

.welcome-tile:hover .welcome-tile__badge { animation: pulse 1.5s infinite; }
"#;

const TILE_CSS: &str = r#"
.doc-tile {
  color: currentColor;
  padding: 1rem;
  min-height: 170px;
}

.doc-tile:hover { color: currentColor; }

.doc-tile h3 { font-size: 1rem; }
"#;

/// `#rrggbb` or `#rgb` to `rgba(r,g,b,a)`.
pub fn rgba(hex: &str, alpha: f32) -> Result<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String = match digits.len() {
        3 if digits.is_ascii() => digits.chars().flat_map(|c| [c, c]).collect(),
        6 if digits.is_ascii() => digits.to_string(),
        _ => {
            return Err(DocsError::RenderError {
                message: format!("'{}' is not a hex color", hex),
            })
        }
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| DocsError::RenderError {
            message: format!("'{}' is not a hex color", hex),
        })
    };

    Ok(format!(
        "rgba({},{},{},{})",
        channel(0)?,
        channel(2)?,
        channel(4)?,
        alpha.clamp(0.0, 1.0)
    ))
}

fn pulse_keyframes() -> Result<String> {
    Ok(format!(
        "\n@keyframes pulse {{\n  0% {{ box-shadow: 0 0 0 0 {}; }}\n  70% {{ box-shadow: 0 0 0 10px {}; }}\n  100% {{ box-shadow: 0 0 0 0 {}; }}\n}}\n",
        rgba(ACCENT, 0.7)?,
        rgba(ACCENT, 0.0)?,
        rgba(ACCENT, 0.0)?
    ))
}

/// Ring drawn behind the badge.
fn ring_css() -> Result<String> {
    Ok(format!(
        "\n.welcome-tile::after {{\n  content: '';\n  position: absolute;\n  top: 0;\n  left: 50%;\n  transform: translate(-50%, -50%);\n  border-radius: 50%;\n  height: 2.75rem;\n  width: 2.75rem;\n  border: 1px solid {};\n  background: var(--primary-background-color);\n  transition: border-color 0.15s ease-out;\n}}\n",
        rgba(ACCENT, 0.3)?
    ))
}

fn grid_css() -> String {
    format!(
        "\n.tile-grid {{\n  display: grid;\n  grid-template-columns: repeat({}, 1fr);\n  grid-gap: 1rem;\n}}\n\n@media screen and (max-width: {}) {{\n  .tile-grid {{ grid-template-columns: repeat({}, 1fr); }}\n}}\n\n@media screen and (max-width: {}) {{\n  .tile-grid {{ grid-template-columns: 1fr; }}\n}}\n",
        GRID_COLUMNS_WIDE, GRID_BREAKPOINT_MEDIUM, GRID_COLUMNS_MEDIUM, GRID_BREAKPOINT_NARROW
    )
}

fn hero_media_css() -> String {
    format!(
        "\n@media screen and (max-width: {}) {{\n  .hero {{ flex-direction: column; }}\n  .hero__intro {{\n    margin-right: 0;\n    margin-bottom: 2rem;\n    max-width: 600px;\n  }}\n}}\n",
        HERO_BREAKPOINT
    )
}

/// The complete page stylesheet.
pub fn stylesheet() -> Result<String> {
    let mut css = String::with_capacity(4096);
    css.push_str(THEME_CSS);
    css.push_str(HERO_CSS);
    css.push_str(&ring_css()?);
    css.push_str(&pulse_keyframes()?);
    css.push_str(&hero_media_css());
    css.push_str(&grid_css());
    css.push_str(TILE_CSS);
    Ok(css)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba() {
        assert_eq!(rgba("#008c99", 0.7).unwrap(), "rgba(0,140,153,0.7)");
        assert_eq!(rgba("#008c99", 0.0).unwrap(), "rgba(0,140,153,0)");
        assert_eq!(rgba("#fff", 1.0).unwrap(), "rgba(255,255,255,1)");
        assert!(rgba("#12345", 0.5).is_err());
        assert!(rgba("#zzzzzz", 0.5).is_err());
    }

    #[test]
    fn test_stylesheet_breakpoints() {
        let css = stylesheet().unwrap();
        assert!(css.contains("grid-template-columns: repeat(5, 1fr)"));
        assert!(css.contains("@media screen and (max-width: 1470px)"));
        assert!(css.contains("grid-template-columns: repeat(3, 1fr)"));
        assert!(css.contains("@media screen and (max-width: 700px)"));
        assert!(css.contains("@media screen and (max-width: 1500px)"));
    }

    #[test]
    fn test_pulse_only_on_hover() {
        let css = stylesheet().unwrap();
        assert!(css.contains("@keyframes pulse"));
        assert!(css.contains("box-shadow: 0 0 0 0 rgba(0,140,153,0.7)"));
        assert!(css.contains(".welcome-tile:hover .welcome-tile__badge { animation: pulse 1.5s infinite; }"));
        assert_eq!(css.matches("animation:").count(), 1);
    }
}
