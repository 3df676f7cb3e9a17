use eframe::egui;
use encoding_rs::Encoding;
use nfx_core::BrowserError;
use nfx_core::BrowserResult;
use nfx_layout::StyleKey;
use nfx_render::DrawCommand;
use nfx_render::Frame;
use nfx_render::TextMetrics;
use nfx_renderer::RendererProcess;
use std::path::Path;
use std::path::PathBuf;
use url::Url;

const APP_NAME: &str = "NetFX Browser";
const WELCOME_URL: &str = "about:netfx";
const DEFAULT_WINDOW_SIZE: [f32; 2] = [1024.0, 768.0];
const MIN_WINDOW_SIZE: [f32; 2] = [480.0, 360.0];
const MAX_CHARSET_PREFIX_BYTES: usize = 8192;
const DEFAULT_LOG_FILTER: &str = "info";

const WELCOME_PAGE: &str = "<html><head><title>Welcome</title></head><body>\
<h1>NetFX</h1>\
<p>Open a local HTML file by typing its path in the address bar, \
or pass it on the command line.</p>\
<p>Headings, paragraphs, line breaks and <a href=\"about:netfx\">links</a> are laid out \
with greedy word wrapping.</p>\
</body></html>";

include!("types.rs");

mod metrics;
mod source;
mod startup;
mod ui;

#[cfg(test)]
mod tests;

pub(crate) use startup::run;
