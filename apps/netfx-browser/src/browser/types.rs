/// Startup options gathered from the command line.
#[derive(Debug, Clone, PartialEq)]
struct BrowserConfig {
    start_location: String,
    site_name: String,
    window_size: [f32; 2],
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            start_location: WELCOME_URL.to_owned(),
            site_name: nfx_html::DEFAULT_SITE_NAME.to_owned(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// Back/forward list. `index` points at the current entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct History {
    entries: Vec<String>,
    index: Option<usize>,
}

impl History {
    fn push(&mut self, url: String) {
        if let Some(index) = self.index {
            self.entries.truncate(index.saturating_add(1));
        }

        if self.entries.last().is_some_and(|existing| existing == &url) {
            self.index = Some(self.entries.len().saturating_sub(1));
            return;
        }

        self.entries.push(url);
        self.index = Some(self.entries.len().saturating_sub(1));
    }

    fn can_go_back(&self) -> bool {
        matches!(self.index, Some(index) if index > 0)
    }

    fn can_go_forward(&self) -> bool {
        matches!(self.index, Some(index) if index + 1 < self.entries.len())
    }

    /// Entry one step back. The index only moves once [`select`](Self::select)
    /// confirms the page actually loaded.
    fn back_target(&self) -> Option<(usize, String)> {
        let index = self.index.filter(|index| *index > 0)? - 1;
        self.entries.get(index).map(|url| (index, url.clone()))
    }

    fn forward_target(&self) -> Option<(usize, String)> {
        let index = self.index? + 1;
        self.entries.get(index).map(|url| (index, url.clone()))
    }

    fn select(&mut self, index: usize) {
        if index < self.entries.len() {
            self.index = Some(index);
        }
    }
}

/// What the viewport shows for the current location.
#[derive(Debug, Clone, PartialEq)]
struct PageView {
    url: Url,
    title: Option<String>,
    nodes: usize,
}

struct BrowserUiApp {
    config: BrowserConfig,
    renderer: RendererProcess,
    address_input: String,
    page_view: Option<PageView>,
    status_line: String,
    last_error: Option<String>,
    history: History,
    applied_title: Option<String>,
}
