use crate::domain::model::Topic;
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Tdp,
    Fso,
    Ai,
}

impl Icon {
    pub fn for_topic(topic: Topic) -> Self {
        match topic {
            Topic::TelemetryDataPlatform => Icon::Tdp,
            Topic::FullStackObservability => Icon::Fso,
            Topic::AppliedIntelligence => Icon::Ai,
        }
    }

    /// Decorative glyph; `size` is any CSS length.
    pub fn render(&self, size: &str) -> Markup {
        html! {
            svg class="section-icon"
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 48 48"
                width=(size)
                height=(size)
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                aria-hidden="true"
                focusable="false" {
                @match self {
                    Icon::Tdp => {
                        ellipse cx="24" cy="10" rx="16" ry="5" {}
                        path d="M8 10v28c0 2.8 7.2 5 16 5s16-2.2 16-5V10" {}
                        path d="M8 24c0 2.8 7.2 5 16 5s16-2.2 16-5" {}
                    }
                    Icon::Fso => {
                        rect x="6" y="6" width="36" height="10" rx="2" {}
                        rect x="6" y="19" width="36" height="10" rx="2" {}
                        rect x="6" y="32" width="36" height="10" rx="2" {}
                        polyline points="12,37 18,34 24,38 30,33 36,36" {}
                    }
                    Icon::Ai => {
                        path d="M24 4l4 10 10 4-10 4-4 10-4-10-10-4 10-4z" {}
                        circle cx="38" cy="36" r="5" {}
                        path d="M14 34l-4 8" {}
                    }
                }
            }
        }
    }
}
