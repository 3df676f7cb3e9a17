use std::collections::HashMap;

use nfx_dom::{DrawObject, NodeId, Tree};

use crate::parse::{ParseNode, ParseNodeKind, ParsedHtml};
use crate::title::TitleSink;

/// Prefix placed in front of document titles.
pub const DEFAULT_SITE_NAME: &str = "NetFX";

const TEXT_WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Summary of one [`TreeBuilder::build`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub nodes: usize,
    /// Parse nodes dropped on the way: comments, `script`/`style`, `title`,
    /// whitespace-only text and nodes the tree refused.
    pub skipped: usize,
    pub title: Option<String>,
}

/// Converts parser output into a document tree, dropping what never renders.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    site_name: String,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_NAME)
    }
}

impl TreeBuilder {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
        }
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Replaces the contents of `tree` with the document rooted at `root`.
    pub fn build<N: ParseNode>(
        &self,
        tree: &mut Tree,
        root: &N,
        titles: &mut dyn TitleSink,
    ) -> BuildReport {
        tree.clear();

        let mut recorder = ForwardingTitle {
            inner: titles,
            last: None,
        };
        let (_, skipped) = self.convert_subtree(tree, &mut recorder, root, None);

        let report = BuildReport {
            nodes: tree.len(),
            skipped,
            title: recorder.last,
        };
        tracing::debug!(nodes = report.nodes, skipped, "document tree built");
        report
    }

    /// [`build`](Self::build) starting from the parsed `<html>` element.
    pub fn build_document(
        &self,
        tree: &mut Tree,
        parsed: &ParsedHtml,
        titles: &mut dyn TitleSink,
    ) -> BuildReport {
        match parsed.document_element() {
            Some(root) => self.build(tree, &root, titles),
            None => {
                tree.clear();
                BuildReport::default()
            }
        }
    }

    /// Inserts `node` (and its renderable subtree) under `parent`, or as the
    /// root when `parent` is `None`. Returns `None` when the node was skipped.
    pub fn convert<N: ParseNode>(
        &self,
        tree: &mut Tree,
        titles: &mut dyn TitleSink,
        node: &N,
        parent: Option<NodeId>,
    ) -> Option<NodeId> {
        self.convert_subtree(tree, titles, node, parent).0
    }

    /// Pre-order walk over an explicit stack of `(parse node, tree parent)`
    /// pairs, so nesting depth is bounded by memory rather than the call stack.
    fn convert_subtree<N: ParseNode>(
        &self,
        tree: &mut Tree,
        titles: &mut dyn TitleSink,
        node: &N,
        parent: Option<NodeId>,
    ) -> (Option<NodeId>, usize) {
        let mut skipped = 0;
        let Some(top) = self.insert_node(tree, titles, node, parent, &mut skipped) else {
            return (None, skipped);
        };

        let mut pending: Vec<(N, NodeId)> = Vec::new();
        queue_children(tree, &mut pending, node, top);
        while let Some((child, parent)) = pending.pop() {
            if let Some(id) = self.insert_node(tree, titles, &child, Some(parent), &mut skipped) {
                queue_children(tree, &mut pending, &child, id);
            }
        }

        (Some(top), skipped)
    }

    fn insert_node<N: ParseNode>(
        &self,
        tree: &mut Tree,
        titles: &mut dyn TitleSink,
        node: &N,
        parent: Option<NodeId>,
        skipped: &mut usize,
    ) -> Option<NodeId> {
        let value = match node.kind() {
            ParseNodeKind::Element => self.element_value(node, titles),
            ParseNodeKind::Text => text_value(node),
            ParseNodeKind::Other => {
                tracing::debug!("skipping non-renderable parse node");
                None
            }
        };
        let Some(value) = value else {
            *skipped += 1;
            return None;
        };

        let inserted = match parent {
            Some(parent) => tree.add_child(parent, value),
            None => tree.create_root(value),
        };
        match inserted {
            Ok(id) => Some(id),
            Err(error) => {
                tracing::debug!(%error, "dropping node that could not be inserted");
                *skipped += 1;
                None
            }
        }
    }

    fn element_value<N: ParseNode>(
        &self,
        node: &N,
        titles: &mut dyn TitleSink,
    ) -> Option<DrawObject> {
        let Some(tag) = node.tag_name().filter(|tag| !tag.is_empty()) else {
            tracing::debug!("skipping element without a tag name");
            return None;
        };

        if matches!(tag.as_str(), "script" | "style") {
            tracing::debug!(tag = %tag, "skipping non-rendered element");
            return None;
        }

        if tag == "title" {
            tracing::debug!("diverting title element to the title sink");
            self.forward_title(node, titles);
            return None;
        }

        let attributes: HashMap<String, String> = node.attributes().into_iter().collect();
        Some(DrawObject::element(tag, attributes))
    }

    fn forward_title<N: ParseNode>(&self, node: &N, titles: &mut dyn TitleSink) {
        let Some(first) = node.children().into_iter().next() else {
            return;
        };
        if first.kind() != ParseNodeKind::Text {
            return;
        }
        let Some(text) = first.text() else {
            return;
        };

        let title = format!("{} - {}", self.site_name, text);
        tracing::info!(title = %title, "document title");
        titles.set_title(&title);
    }
}

fn text_value<N: ParseNode>(node: &N) -> Option<DrawObject> {
    let raw = node.text()?;
    let value = DrawObject::text(raw.trim_matches(TEXT_WHITESPACE));
    if value.is_none() {
        tracing::debug!("skipping whitespace-only text");
    }
    value
}

/// Children of an inserted element, queued so they pop in document order.
fn queue_children<N: ParseNode>(
    tree: &Tree,
    pending: &mut Vec<(N, NodeId)>,
    node: &N,
    id: NodeId,
) {
    if tree.get(id).is_some_and(|value| !value.is_text()) {
        pending.extend(node.children().into_iter().rev().map(|child| (child, id)));
    }
}

struct ForwardingTitle<'a> {
    inner: &'a mut dyn TitleSink,
    last: Option<String>,
}

impl TitleSink for ForwardingTitle<'_> {
    fn set_title(&mut self, title: &str) {
        self.last = Some(title.to_owned());
        self.inner.set_title(title);
    }
}
