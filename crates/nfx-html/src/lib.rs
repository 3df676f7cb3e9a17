//! HTML parsing boundary and document tree construction.
//!
//! Tokenizing and tree construction are delegated to html5ever; this crate
//! only walks its output through the [`ParseNode`] view and decides what
//! reaches the document tree.

mod builder;
mod parse;
mod title;

pub use builder::{BuildReport, DEFAULT_SITE_NAME, TreeBuilder};
pub use parse::{HtmlParser, ParseNode, ParseNodeKind, ParsedHtml};
pub use title::{RecordedTitle, TitleSink};
