//! Render module - pure projection of session state and the sink contract
//!
//! - `view`: `PageView` and friends, built by [`project`]
//! - `thumbnail`: asset and placeholder thumbnail sources
//! - `sink`: the [`RenderSink`] trait and an in-memory recorder

pub mod sink;
pub mod thumbnail;
pub mod view;

pub use sink::{RecordingSink, RenderSink};
pub use thumbnail::{Thumbnail, pdf_placeholder_svg, pdf_placeholder_uri};
pub use view::{
    CategoryButton, GridEntry, PageView, TypeToggle, ViewOptions, ViewerMedia, ViewerView,
    group_thousands, project,
};
