pub mod components;
pub mod document;
pub mod icons;
pub mod link;
pub mod page;
pub mod renderer;
pub mod styles;

pub use crate::domain::model::{GuideEntry, LayoutConfig, PageData, RenderedTile};
pub use crate::domain::ports::{PageDataSource, Storage};
pub use crate::utils::error::Result;
