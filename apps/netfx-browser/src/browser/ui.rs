use super::metrics::EguiMetrics;
use super::metrics::paint_frame;
use super::source::load_markup;
use super::source::normalize_location;
use super::source::resolve_link;
use super::*;

const VIEWPORT_RIGHT_MARGIN: f32 = 8.0;

impl BrowserUiApp {
    pub(super) fn new(config: BrowserConfig) -> Self {
        let renderer = RendererProcess::with_site_name(config.site_name.clone());
        let start_location = config.start_location.clone();

        let mut app = Self {
            config,
            renderer,
            address_input: start_location.clone(),
            page_view: None,
            status_line: "Ready".to_owned(),
            last_error: None,
            history: History::default(),
            applied_title: None,
        };
        app.navigate(&start_location, true);
        app
    }

    /// Loads `raw_location`; `false` when it could not be shown.
    pub(super) fn navigate(&mut self, raw_location: &str, add_to_history: bool) -> bool {
        let cwd = std::env::current_dir().unwrap_or_default();
        let loaded = normalize_location(raw_location, &cwd)
            .and_then(|url| load_markup(&url).map(|markup| (url, markup)));

        match loaded {
            Ok((url, markup)) => {
                self.show_document(url, &markup, add_to_history);
                true
            }
            Err(error) => {
                tracing::warn!(location = raw_location, %error, "navigation failed");
                self.status_line = "Navigation failed".to_owned();
                self.last_error = Some(error.to_string());
                false
            }
        }
    }

    fn show_document(&mut self, url: Url, markup: &str, add_to_history: bool) {
        let report = self.renderer.load_document(markup);
        if add_to_history {
            self.history.push(url.to_string());
        }

        self.address_input = url.to_string();
        self.status_line = format!("Loaded {url} ({} nodes)", report.nodes);
        self.last_error = None;
        self.page_view = Some(PageView {
            url,
            title: report.title,
            nodes: report.nodes,
        });
    }

    fn follow_link(&mut self, href: &str) {
        let Some(base) = self.page_view.as_ref().map(|page| page.url.clone()) else {
            return;
        };
        match resolve_link(&base, href) {
            Some(target) => {
                tracing::debug!(href, target = %target, "following link");
                self.navigate(target.as_str(), true);
            }
            None => {
                self.status_line = format!("Cannot resolve link `{href}`");
            }
        }
    }

    pub(super) fn navigate_back(&mut self) {
        if let Some((index, url)) = self.history.back_target() {
            if self.navigate(&url, false) {
                self.history.select(index);
            }
        }
    }

    pub(super) fn navigate_forward(&mut self) {
        if let Some((index, url)) = self.history.forward_target() {
            if self.navigate(&url, false) {
                self.history.select(index);
            }
        }
    }

    fn reload(&mut self) {
        match self.page_view.as_ref().map(|page| page.url.to_string()) {
            Some(current) => {
                self.navigate(&current, false);
            }
            None => {
                let input = self.address_input.clone();
                self.navigate(&input, true);
            }
        }
    }

    /// Document title when present, otherwise the bare site name.
    fn window_title(&self) -> String {
        self.page_view
            .as_ref()
            .and_then(|page| page.title.clone())
            .unwrap_or_else(|| self.config.site_name.clone())
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = self.window_title();
        if self.applied_title.as_deref() == Some(title.as_str()) {
            return;
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
        self.applied_title = Some(title);
    }

    /// Lays out and paints the page; returns the `href` of a clicked link.
    fn render_viewport(&mut self, ui: &mut egui::Ui) -> Option<String> {
        if self.page_view.is_none() {
            ui.label("No page loaded yet.");
            return None;
        }

        let mut clicked = None;
        egui::ScrollArea::vertical()
            .id_salt("viewport_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let width = ui.available_width();
                let metrics = EguiMetrics::new(ui.ctx());
                let frame = self
                    .renderer
                    .render_frame((width - VIEWPORT_RIGHT_MARGIN).max(0.0), &metrics);

                let height = frame.content_height.max(ui.available_height());
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());
                paint_frame(&ui.painter_at(rect), rect.min, &frame);

                if let Some(pos) = response.hover_pos() {
                    let local = pos - rect.min;
                    if self.renderer.link_at(local.x, local.y).is_some() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                }

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let local = pos - rect.min;
                        clicked = self.renderer.link_at(local.x, local.y).map(str::to_owned);
                    }
                }
            });
        clicked
    }
}

impl eframe::App for BrowserUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_window_title(ctx);

        egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.history.can_go_back(), egui::Button::new("Back"))
                    .clicked()
                {
                    self.navigate_back();
                }
                if ui
                    .add_enabled(self.history.can_go_forward(), egui::Button::new("Forward"))
                    .clicked()
                {
                    self.navigate_forward();
                }
                if ui.button("Reload").clicked() {
                    self.reload();
                }

                let width = (ui.available_width() - 60.0).max(200.0);
                let response = ui.add_sized(
                    [width, 28.0],
                    egui::TextEdit::singleline(&mut self.address_input)
                        .hint_text("File path or file:// URL"),
                );

                let pressed_enter =
                    response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
                if pressed_enter || ui.button("Go").clicked() {
                    let input = self.address_input.clone();
                    self.navigate(&input, true);
                }
            });
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(&self.status_line);
                if let Some(page) = &self.page_view {
                    ui.separator();
                    ui.label(format!("{} nodes", page.nodes));
                }
                if let Some(error) = &self.last_error {
                    ui.colored_label(
                        egui::Color32::from_rgb(200, 65, 65),
                        format!("Error: {error}"),
                    );
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(href) = self.render_viewport(ui) {
                self.follow_link(&href);
            }
        });
    }
}
