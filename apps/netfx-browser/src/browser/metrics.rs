use super::*;

const LINK_COLOR: egui::Color32 = egui::Color32::from_rgb(64, 128, 220);

pub(super) fn font_id(style: StyleKey) -> egui::FontId {
    if style.is_monospace() {
        egui::FontId::monospace(style.font_size())
    } else {
        egui::FontId::proportional(style.font_size())
    }
}

pub(super) fn text_color(style: StyleKey, visuals: &egui::Visuals) -> egui::Color32 {
    match style {
        StyleKey::Link => LINK_COLOR,
        StyleKey::Heading1 | StyleKey::Heading2 | StyleKey::Heading3 => visuals.strong_text_color(),
        StyleKey::Body | StyleKey::Monospace => visuals.text_color(),
    }
}

/// Measures words with the fonts egui will paint them in.
pub(super) struct EguiMetrics<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiMetrics<'a> {
    pub(super) fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl TextMetrics for EguiMetrics<'_> {
    fn measure(&self, text: &str, style: StyleKey) -> (f32, f32) {
        let size = self.ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), font_id(style), egui::Color32::PLACEHOLDER)
                .size()
        });
        (size.x, size.y)
    }
}

/// Replays a frame's draw calls with `origin` as the layout origin.
pub(super) fn paint_frame(painter: &egui::Painter, origin: egui::Pos2, frame: &Frame) {
    let visuals = painter.ctx().style().visuals.clone();
    for command in &frame.commands {
        let DrawCommand::Text { text, style, x, y } = command;
        painter.text(
            origin + egui::vec2(*x, *y),
            egui::Align2::LEFT_TOP,
            text,
            font_id(*style),
            text_color(*style, &visuals),
        );
    }
}
