use html5ever::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::Handle;
use markup5ever_rcdom::NodeData;
use markup5ever_rcdom::RcDom;

/// Coarse node classification the tree builder cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseNodeKind {
    Element,
    Text,
    /// Comments, doctypes, processing instructions, the document node.
    Other,
}

/// Read-only view of one node produced by an HTML parser.
pub trait ParseNode: Sized {
    fn kind(&self) -> ParseNodeKind;

    /// Normalized element name; `None` for non-elements.
    fn tag_name(&self) -> Option<String>;

    /// Attributes in source order. Empty for non-elements.
    fn attributes(&self) -> Vec<(String, String)>;

    /// Raw character data; `None` for non-text nodes.
    fn text(&self) -> Option<String>;

    fn children(&self) -> Vec<Self>;
}

impl ParseNode for Handle {
    fn kind(&self) -> ParseNodeKind {
        match self.data {
            NodeData::Element { .. } => ParseNodeKind::Element,
            NodeData::Text { .. } => ParseNodeKind::Text,
            _ => ParseNodeKind::Other,
        }
    }

    fn tag_name(&self) -> Option<String> {
        match &self.data {
            NodeData::Element { name, .. } => Some(name.local.to_string()),
            _ => None,
        }
    }

    fn attributes(&self) -> Vec<(String, String)> {
        match &self.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn text(&self) -> Option<String> {
        match &self.data {
            NodeData::Text { contents } => Some(contents.borrow().to_string()),
            _ => None,
        }
    }

    fn children(&self) -> Vec<Self> {
        self.children.borrow().iter().cloned().collect()
    }
}

/// Parses raw HTML with html5ever.
#[derive(Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn parse(&self, input: &str) -> ParsedHtml {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };

        ParsedHtml {
            dom: parse_document(RcDom::default(), opts).one(input),
        }
    }
}

/// Output of [`HtmlParser::parse`].
pub struct ParsedHtml {
    dom: RcDom,
}

impl ParsedHtml {
    /// The `<html>` element; the document node itself has no renderable kind.
    pub fn document_element(&self) -> Option<Handle> {
        self.dom
            .document
            .children
            .borrow()
            .iter()
            .find(|child| child.kind() == ParseNodeKind::Element)
            .cloned()
    }
}
