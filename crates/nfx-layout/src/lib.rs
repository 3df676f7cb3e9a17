//! Layout engine entry points: block/inline flow, word wrapping and hit testing.

mod canvas;
mod config;
mod flow;
mod style;

pub use canvas::Canvas;
pub use config::LayoutConfig;
pub use flow::{Cursor, LayoutEngine, LayoutSummary, is_block_tag};
pub use hit_test::{enclosing_link, hit_test, link_at};
pub use style::StyleKey;
