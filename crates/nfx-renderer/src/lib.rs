//! Renderer process pipeline from HTML source to frame output.

use nfx_dom::Tree;
use nfx_html::BuildReport;
use nfx_html::HtmlParser;
use nfx_html::TitleSink;
use nfx_html::TreeBuilder;
use nfx_layout::LayoutEngine;
use nfx_render::ApproximateMetrics;
use nfx_render::Frame;
use nfx_render::Renderer;
use nfx_render::TextMetrics;

/// Document state that survives between frames.
#[derive(Debug, Default)]
pub struct Page {
    tree: Tree,
    title: Option<String>,
}

impl Page {
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Decorated title from the last load, if the document had one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Dedicated renderer process.
#[derive(Debug, Default)]
pub struct RendererProcess {
    parser: HtmlParser,
    builder: TreeBuilder,
    render: Renderer,
    page: Page,
}

impl RendererProcess {
    pub fn new(builder: TreeBuilder, layout: LayoutEngine) -> Self {
        Self {
            parser: HtmlParser,
            builder,
            render: Renderer::new(layout),
            page: Page::default(),
        }
    }

    pub fn with_site_name(site_name: impl Into<String>) -> Self {
        Self::new(TreeBuilder::new(site_name), LayoutEngine::default())
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Replaces the current page with `html`.
    pub fn load_document(&mut self, html: &str) -> BuildReport {
        self.load_document_with(html, &mut |_: &str| {})
    }

    /// [`load_document`](Self::load_document), forwarding title updates to `titles`.
    pub fn load_document_with(&mut self, html: &str, titles: &mut dyn TitleSink) -> BuildReport {
        let parsed = self.parser.parse(html);
        let report = self
            .builder
            .build_document(&mut self.page.tree, &parsed, titles);
        self.page.title = report.title.clone();

        tracing::info!(
            bytes = html.len(),
            nodes = report.nodes,
            titled = report.title.is_some(),
            "document loaded"
        );
        report
    }

    /// Lays out the current page at `max_width` and records its draw calls.
    pub fn render_frame<M: TextMetrics + ?Sized>(&mut self, max_width: f32, metrics: &M) -> Frame {
        self.render.render(&mut self.page.tree, max_width, metrics)
    }

    /// `href` of the link painted at `(x, y)` in the last frame.
    pub fn link_at(&self, x: f32, y: f32) -> Option<&str> {
        nfx_layout::link_at(&self.page.tree, x, y)
    }

    /// One-shot load and render with font-free metrics.
    pub fn render_document(&mut self, html: &str, max_width: f32) -> Frame {
        self.load_document(html);
        self.render_frame(max_width, &ApproximateMetrics)
    }
}
