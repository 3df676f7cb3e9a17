/// Font/style handle resolved from the tag of a text node's parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StyleKey {
    #[default]
    Body,
    Heading1,
    Heading2,
    Heading3,
    Link,
    Monospace,
}

impl StyleKey {
    /// Unmapped tags get the body style.
    pub fn for_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "h1" => Self::Heading1,
            "h2" => Self::Heading2,
            "h3" => Self::Heading3,
            "a" => Self::Link,
            "pre" | "code" => Self::Monospace,
            _ => Self::Body,
        }
    }

    /// Nominal font size in pixels.
    pub fn font_size(self) -> f32 {
        match self {
            Self::Body | Self::Link => 16.0,
            Self::Heading1 => 32.0,
            Self::Heading2 => 24.0,
            Self::Heading3 => 20.0,
            Self::Monospace => 15.0,
        }
    }

    pub fn is_monospace(self) -> bool {
        self == Self::Monospace
    }
}
