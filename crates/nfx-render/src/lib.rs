//! Paint command generation.
//!
//! Layout paints through [`nfx_layout::Canvas`]; here that canvas records a
//! display list which a backend (the egui shell, or a test) replays.

use nfx_dom::Tree;
use nfx_layout::Canvas;
use nfx_layout::LayoutEngine;
use nfx_layout::StyleKey;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        style: StyleKey,
        x: f32,
        y: f32,
    },
}

/// Display list for one rendered frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub content_height: f32,
}

impl Frame {
    pub fn draw_calls(&self) -> usize {
        self.commands.len()
    }
}

/// Text measurement supplied by a font backend.
pub trait TextMetrics {
    fn measure(&self, text: &str, style: StyleKey) -> (f32, f32);
}

/// Font-free estimate: 0.6em per character, 1.2em line height.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateMetrics;

impl TextMetrics for ApproximateMetrics {
    fn measure(&self, text: &str, style: StyleKey) -> (f32, f32) {
        const CHAR_WIDTH_RATIO: f32 = 0.6;
        const LINE_HEIGHT_RATIO: f32 = 1.2;

        let size = style.font_size();
        (
            text.chars().count() as f32 * size * CHAR_WIDTH_RATIO,
            size * LINE_HEIGHT_RATIO,
        )
    }
}

/// [`Canvas`] that measures through `M` and records every draw.
#[derive(Debug)]
pub struct FrameRecorder<'m, M: ?Sized> {
    metrics: &'m M,
    commands: Vec<DrawCommand>,
}

impl<'m, M: TextMetrics + ?Sized> FrameRecorder<'m, M> {
    pub fn new(metrics: &'m M) -> Self {
        Self {
            metrics,
            commands: Vec::new(),
        }
    }

    pub fn finish(self, content_height: f32) -> Frame {
        Frame {
            commands: self.commands,
            content_height,
        }
    }
}

impl<M: TextMetrics + ?Sized> Canvas for FrameRecorder<'_, M> {
    fn measure(&self, text: &str, style: StyleKey) -> (f32, f32) {
        self.metrics.measure(text, style)
    }

    fn draw(&mut self, text: &str, style: StyleKey, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            style,
            x,
            y,
        });
    }
}

/// Runs layout over a tree and collects the resulting frame.
#[derive(Debug, Default)]
pub struct Renderer {
    layout: LayoutEngine,
}

impl Renderer {
    pub fn new(layout: LayoutEngine) -> Self {
        Self { layout }
    }

    pub fn render<M: TextMetrics + ?Sized>(
        &self,
        tree: &mut Tree,
        max_width: f32,
        metrics: &M,
    ) -> Frame {
        let mut recorder = FrameRecorder::new(metrics);
        let summary = self.layout.layout(tree, max_width, &mut recorder);
        recorder.finish(summary.content_height)
    }
}
