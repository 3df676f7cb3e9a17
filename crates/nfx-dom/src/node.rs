//! Node payload and handles.

use core::fmt;
use std::collections::HashMap;

use crate::geometry::Rect;

/// Tag carried by text nodes in place of an element name.
pub const TEXT_TAG: &str = "#text";

/// Handle to a node inside one specific [`Tree`](crate::Tree).
///
/// Besides the slot index it records which tree issued it and the tree's
/// generation at that time, so handles from another tree or from before a
/// `clear()` are rejected instead of aliasing an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) tree: u32,
    pub(crate) generation: u32,
    pub(crate) index: u32,
}

impl NodeId {
    /// Position of the node in creation order.
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}.{}", self.index, self.tree, self.generation)
    }
}

/// Renderable payload stored per node.
///
/// `tag` is [`TEXT_TAG`] exactly when `inner` holds text and there are no
/// attributes; the constructors keep that invariant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawObject {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub inner: String,
    /// Geometry from the last layout pass.
    pub bounds: Option<Rect>,
}

impl DrawObject {
    pub fn element(tag: impl Into<String>, attributes: HashMap<String, String>) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            inner: String::new(),
            bounds: None,
        }
    }

    /// Returns `None` for empty text, which has no place in the tree.
    pub fn text(inner: impl Into<String>) -> Option<Self> {
        let inner = inner.into();
        if inner.is_empty() {
            return None;
        }

        Some(Self {
            tag: TEXT_TAG.to_owned(),
            attributes: HashMap::new(),
            inner,
            bounds: None,
        })
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    pub fn is_element(&self, tag: &str) -> bool {
        !self.is_text() && self.tag.eq_ignore_ascii_case(tag)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// One tree slot: the payload plus its three links.
#[derive(Debug, Clone)]
pub struct Node {
    pub value: DrawObject,
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(value: DrawObject, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            first_child: None,
            next_sibling: None,
            last_child: None,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }
}
