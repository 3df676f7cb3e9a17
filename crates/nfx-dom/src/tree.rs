//! Arena-owned first-child / next-sibling tree.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::{DomError, Result};
use crate::geometry::Rect;
use crate::node::{DrawObject, Node, NodeId};

static NEXT_TREE_SERIAL: AtomicU32 = AtomicU32::new(1);

/// Exclusive owner of every node of one document.
#[derive(Debug)]
pub struct Tree {
    serial: u32,
    generation: u32,
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            serial: NEXT_TREE_SERIAL.fetch_add(1, Ordering::Relaxed),
            generation: 0,
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Creates the single root. Fails if the tree already has one.
    pub fn create_root(&mut self, value: DrawObject) -> Result<NodeId> {
        if self.root.is_some() {
            return Err(DomError::AlreadyRooted);
        }

        let id = self.push(Node::new(value, None));
        self.root = Some(id);
        Ok(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Appends `value` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, value: DrawObject) -> Result<NodeId> {
        let parent_slot = self.slot(parent).ok_or(DomError::InvalidParent(parent))?;
        let id = self.push(Node::new(value, Some(parent)));

        let previous_last = self.nodes[parent_slot].last_child;
        match previous_last {
            Some(last) => self.nodes[last.index()].next_sibling = Some(id),
            None => self.nodes[parent_slot].first_child = Some(id),
        }
        self.nodes[parent_slot].last_child = Some(id);

        Ok(id)
    }

    /// Appends `value` at the end of the sibling chain that contains `node`.
    ///
    /// The new node shares `node`'s parent.
    pub fn add_sibling(&mut self, node: NodeId, value: DrawObject) -> Result<NodeId> {
        let mut tail = self.slot(node).ok_or(DomError::InvalidNode(node))?;
        while let Some(next) = self.nodes[tail].next_sibling {
            tail = next.index();
        }

        let parent = self.nodes[tail].parent;
        let id = self.push(Node::new(value, parent));
        self.nodes[tail].next_sibling = Some(id);

        if let Some(parent) = parent.and_then(|parent| self.slot(parent)) {
            self.nodes[parent].last_child = Some(id);
        }

        Ok(id)
    }

    /// Releases every node. Handles issued before the call stop resolving.
    pub fn clear(&mut self) {
        if self.nodes.is_empty() && self.root.is_none() {
            return;
        }

        self.nodes.clear();
        self.root = None;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slot(id).map(|slot| &self.nodes[slot])
    }

    pub fn get(&self, id: NodeId) -> Option<&DrawObject> {
        self.node(id).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut DrawObject> {
        let slot = self.slot(id)?;
        Some(&mut self.nodes[slot].value)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::first_child)
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::next_sibling)
    }

    /// Children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.first_child(id),
        }
    }

    /// `id` followed by every node after it in its sibling chain.
    pub fn siblings_from(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.contains(id).then_some(id),
        }
    }

    /// `id` itself, then its parent chain up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.contains(id).then_some(id),
        }
    }

    /// Pre-order walk of `id` and everything below it.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            start: id,
            stack: if self.contains(id) { vec![id] } else { Vec::new() },
        }
    }

    pub fn set_bounds(&mut self, id: NodeId, bounds: Option<Rect>) -> bool {
        match self.get_mut(id) {
            Some(value) => {
                value.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Forgets all geometry from a previous layout pass.
    pub fn clear_bounds(&mut self) {
        for node in &mut self.nodes {
            node.value.bounds = None;
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId {
            tree: self.serial,
            generation: self.generation,
            index: self.nodes.len() as u32,
        };
        self.nodes.push(node);
        id
    }

    fn slot(&self, id: NodeId) -> Option<usize> {
        if id.tree != self.serial || id.generation != self.generation {
            return None;
        }

        let slot = id.index();
        (slot < self.nodes.len()).then_some(slot)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator following `next_sibling` links.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}

/// Iterator following `parent` links.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Pre-order iterator; explicit stack so deep documents can't overflow.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    tree: &'a Tree,
    start: NodeId,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;

        if current != self.start {
            if let Some(sibling) = self.tree.next_sibling(current) {
                self.stack.push(sibling);
            }
        }
        if let Some(child) = self.tree.first_child(current) {
            self.stack.push(child);
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::Tree;
    use crate::error::DomError;
    use crate::geometry::Rect;
    use crate::node::DrawObject;
    use std::collections::HashMap;

    fn element(tag: &str) -> DrawObject {
        DrawObject::element(tag, HashMap::new())
    }

    fn tags(tree: &Tree, ids: impl Iterator<Item = crate::NodeId>) -> Vec<String> {
        ids.filter_map(|id| tree.get(id).map(|value| value.tag.clone()))
            .collect()
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut tree = Tree::new();
        let root = tree.create_root(element("body")).expect("root");
        for tag in ["h1", "p", "div", "ul", "p"] {
            tree.add_child(root, element(tag)).expect("child");
        }

        assert_eq!(tags(&tree, tree.children(root)), ["h1", "p", "div", "ul", "p"]);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn second_root_is_rejected_and_first_survives() {
        let mut tree = Tree::new();
        let root = tree.create_root(element("html")).expect("root");

        let second = tree.create_root(element("body"));
        assert_eq!(second, Err(DomError::AlreadyRooted));
        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn children_point_back_to_parent() {
        let mut tree = Tree::new();
        let root = tree.create_root(element("div")).expect("root");
        let child = tree.add_child(root, element("span")).expect("child");
        let grandchild = tree
            .add_child(child, DrawObject::text("hi").expect("text"))
            .expect("grandchild");

        assert_eq!(tree.parent(grandchild), Some(child));
        assert_eq!(tree.parent(child), Some(root));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.ancestors(grandchild).collect::<Vec<_>>(), [grandchild, child, root]);
    }

    #[test]
    fn sibling_joins_end_of_chain_with_same_parent() {
        let mut tree = Tree::new();
        let root = tree.create_root(element("ul")).expect("root");
        let first = tree.add_child(root, element("li")).expect("first");
        tree.add_child(root, element("li")).expect("second");

        let appended = tree.add_sibling(first, element("p")).expect("sibling");
        assert_eq!(tree.parent(appended), Some(root));
        assert_eq!(tree.children(root).last(), Some(appended));

        let after = tree.add_child(root, element("hr")).expect("after sibling");
        assert_eq!(tags(&tree, tree.children(root)), ["li", "li", "p", "hr"]);
        assert_eq!(tree.next_sibling(appended), Some(after));
    }

    #[test]
    fn foreign_handles_are_rejected() {
        let mut left = Tree::new();
        let mut right = Tree::new();
        let left_root = left.create_root(element("html")).expect("left root");
        right.create_root(element("html")).expect("right root");

        assert_eq!(
            right.add_child(left_root, element("p")),
            Err(DomError::InvalidParent(left_root))
        );
        assert_eq!(
            right.add_sibling(left_root, element("p")),
            Err(DomError::InvalidNode(left_root))
        );
        assert_eq!(right.len(), 1);
    }

    #[test]
    fn clear_resets_and_invalidates_handles() {
        let mut tree = Tree::new();
        let root = tree.create_root(element("html")).expect("root");
        tree.add_child(root, element("body")).expect("child");

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(
            tree.add_child(root, element("p")),
            Err(DomError::InvalidParent(root))
        );

        let fresh = tree.create_root(element("html")).expect("root after clear");
        assert_ne!(fresh, root);
    }

    #[test]
    fn clear_on_empty_tree_is_a_no_op() {
        let mut tree = Tree::new();
        tree.clear();
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.create_root(element("html")).is_ok());
    }

    #[test]
    fn descendants_walk_in_document_order() {
        let mut tree = Tree::new();
        let root = tree.create_root(element("body")).expect("root");
        let div = tree.add_child(root, element("div")).expect("div");
        tree.add_child(div, element("p")).expect("p");
        tree.add_child(div, element("span")).expect("span");
        let footer = tree.add_child(root, element("footer")).expect("footer");
        tree.add_child(footer, element("a")).expect("a");

        assert_eq!(
            tags(&tree, tree.descendants(root)),
            ["body", "div", "p", "span", "footer", "a"]
        );
        assert_eq!(tags(&tree, tree.descendants(div)), ["div", "p", "span"]);
    }

    #[test]
    fn bounds_can_be_set_and_cleared() {
        let mut tree = Tree::new();
        let root = tree.create_root(element("div")).expect("root");
        assert!(tree.set_bounds(root, Some(Rect::new(1.0, 2.0, 3.0, 4.0))));
        assert_eq!(
            tree.get(root).and_then(|value| value.bounds),
            Some(Rect::new(1.0, 2.0, 3.0, 4.0))
        );

        tree.clear_bounds();
        assert_eq!(tree.get(root).and_then(|value| value.bounds), None);
    }
}
