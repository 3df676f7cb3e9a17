/// Receives the window title derived from a document's `<title>`.
pub trait TitleSink {
    fn set_title(&mut self, title: &str);
}

impl<F> TitleSink for F
where
    F: FnMut(&str),
{
    fn set_title(&mut self, title: &str) {
        self(title);
    }
}

/// Sink that keeps the most recent title, for callers that apply it later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedTitle {
    pub title: Option<String>,
    pub updates: usize,
}

impl TitleSink for RecordedTitle {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_owned());
        self.updates = self.updates.saturating_add(1);
    }
}
