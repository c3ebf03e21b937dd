//! Element tree for hierarchical screen state.

use super::{Element, ElementId};
use std::collections::HashMap;

/// Owns every element of a screen and their parent-child links.
#[derive(Debug, Clone)]
pub struct ElementTree {
    /// Elements indexed by ID.
    elements: HashMap<ElementId, Element>,
    /// Elements without a parent, in insertion order.
    roots: Vec<ElementId>,
    /// Ordered children per element.
    children: HashMap<ElementId, Vec<ElementId>>,
    /// ID counter for generating unique IDs.
    next_id: u64,
}

impl ElementTree {
    /// Creates a new empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: HashMap::with_capacity(128),
            roots: Vec::with_capacity(8),
            children: HashMap::with_capacity(128),
            next_id: 1,
        }
    }

    fn next_id(&mut self) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Inserts an element without a parent and returns its ID.
    pub fn add_root(&mut self, mut element: Element) -> ElementId {
        let id = self.next_id();
        element.id = id;
        element.parent = None;
        self.elements.insert(id, element);
        self.roots.push(id);
        self.children.insert(id, Vec::new());
        id
    }

    /// Inserts an element as the last child of `parent`.
    ///
    /// Returns `None` (and drops the element) if `parent` is not in the tree.
    pub fn add_child(&mut self, parent: ElementId, mut element: Element) -> Option<ElementId> {
        if !self.elements.contains_key(&parent) {
            return None;
        }
        let id = self.next_id();
        element.id = id;
        element.parent = Some(parent);
        self.elements.insert(id, element);
        self.children.entry(parent).or_default().push(id);
        self.children.insert(id, Vec::new());
        Some(id)
    }

    /// Moves an existing element to the end of `parent`'s children.
    ///
    /// Returns false if either element is missing or if the move would
    /// make an element its own ancestor.
    pub fn attach(&mut self, child: ElementId, parent: ElementId) -> bool {
        if child == parent || !self.contains(child) || !self.contains(parent) {
            return false;
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return false;
        }
        self.detach(child);
        if let Some(element) = self.elements.get_mut(&child) {
            element.parent = Some(parent);
        }
        self.children.entry(parent).or_default().push(child);
        true
    }

    fn detach(&mut self, id: ElementId) {
        let parent = self.elements.get(&id).and_then(|element| element.parent);
        match parent {
            Some(parent) => {
                if let Some(siblings) = self.children.get_mut(&parent) {
                    siblings.retain(|&c| c != id);
                }
            }
            None => self.roots.retain(|&r| r != id),
        }
    }

    /// Removes an element and all its descendants. Returns how many were removed.
    pub fn remove(&mut self, id: ElementId) -> usize {
        if !self.contains(id) {
            return 0;
        }
        self.detach(id);
        self.remove_subtree(id)
    }

    fn remove_subtree(&mut self, id: ElementId) -> usize {
        let mut removed = 0;
        if let Some(children) = self.children.remove(&id) {
            for child in children {
                removed += self.remove_subtree(child);
            }
        }
        if self.elements.remove(&id).is_some() {
            removed += 1;
        }
        removed
    }

    /// Removes every descendant of `id`, keeping `id` itself.
    pub fn clear_children(&mut self, id: ElementId) -> usize {
        let children = self
            .children
            .get_mut(&id)
            .map(std::mem::take)
            .unwrap_or_default();
        children.into_iter().map(|child| self.remove_subtree(child)).sum()
    }

    /// Gets an element by ID.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Gets mutable access to an element.
    #[must_use]
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// True if the element is in the tree.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Returns the children of an element.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns all root elements.
    #[must_use]
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the tree holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Walks from the parent of `id` up to its root.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self.get(id).and_then(|e| e.parent), |&current| {
            self.get(current).and_then(|e| e.parent)
        })
    }

    /// Returns all element IDs in depth-first order.
    pub fn iter_dfs(&self) -> impl Iterator<Item = ElementId> + '_ {
        ElementDfsIterator {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Returns `id` and its descendants in depth-first order.
    pub fn iter_subtree(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        let stack = if self.contains(id) { vec![id] } else { Vec::new() };
        ElementDfsIterator { tree: self, stack }
    }

    /// IDs of elements changed since the last call, clearing their dirty flag.
    pub fn take_dirty(&mut self) -> Vec<ElementId> {
        let mut dirty: Vec<ElementId> = self
            .elements
            .values_mut()
            .filter(|element| element.is_dirty())
            .map(|element| {
                element.flags.clear(super::ElementFlags::DIRTY);
                element.id
            })
            .collect();
        dirty.sort_unstable();
        dirty
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first iterator over the element tree.
struct ElementDfsIterator<'a> {
    tree: &'a ElementTree,
    stack: Vec<ElementId>,
}

impl Iterator for ElementDfsIterator<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;

        // Reverse push keeps siblings left-to-right.
        if let Some(children) = self.tree.children.get(&id) {
            self.stack.extend(children.iter().rev().copied());
        }

        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ContainerData, ElementKind, TextData};

    fn container() -> Element {
        Element::new("VerticalContainer", ElementKind::Container(ContainerData::default()))
    }

    fn text(label: &str) -> Element {
        Element::new(
            "Text",
            ElementKind::Text(TextData {
                text: label.into(),
                ..TextData::default()
            }),
        )
    }

    #[test]
    fn test_tree_hierarchy() {
        let mut tree = ElementTree::new();
        let root = tree.add_root(container());
        let first = tree.add_child(root, text("a")).unwrap();
        let second = tree.add_child(root, text("b")).unwrap();

        assert_eq!(tree.children(root), &[first, second]);
        assert_eq!(tree.roots(), &[root]);
        assert_eq!(tree.get(first).unwrap().parent, Some(root));
        assert_eq!(tree.iter_dfs().collect::<Vec<_>>(), vec![root, first, second]);
    }

    #[test]
    fn test_iter_subtree() {
        let mut tree = ElementTree::new();
        let root = tree.add_root(container());
        let inner = tree.add_child(root, container()).unwrap();
        let deep = tree.add_child(inner, text("deep")).unwrap();
        let flat = tree.add_child(root, text("flat")).unwrap();
        tree.add_root(text("other root"));

        assert_eq!(tree.iter_subtree(root).collect::<Vec<_>>(), vec![root, inner, deep, flat]);
        assert_eq!(tree.iter_subtree(inner).collect::<Vec<_>>(), vec![inner, deep]);
        assert_eq!(tree.iter_subtree(ElementId::new(99)).count(), 0);
    }

    #[test]
    fn test_add_child_to_missing_parent() {
        let mut tree = ElementTree::new();
        assert!(tree.add_child(ElementId::new(99), text("x")).is_none());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_attach_moves_root() {
        let mut tree = ElementTree::new();
        let host = tree.add_root(container());
        let loose = tree.add_root(text("x"));
        assert!(tree.attach(loose, host));
        assert_eq!(tree.roots(), &[host]);
        assert_eq!(tree.children(host), &[loose]);
        assert!(!tree.attach(host, loose), "cycle must be rejected");
    }

    #[test]
    fn test_clear_children_is_recursive() {
        let mut tree = ElementTree::new();
        let root = tree.add_root(container());
        let inner = tree.add_child(root, container()).unwrap();
        tree.add_child(inner, text("deep")).unwrap();
        tree.add_child(root, text("flat")).unwrap();

        assert_eq!(tree.clear_children(root), 3);
        assert_eq!(tree.len(), 1);
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.clear_children(root), 0);
    }

    #[test]
    fn test_remove_unlinks_from_parent() {
        let mut tree = ElementTree::new();
        let root = tree.add_root(container());
        let child = tree.add_child(root, text("a")).unwrap();
        assert_eq!(tree.remove(child), 1);
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.remove(child), 0);
    }

    #[test]
    fn test_take_dirty() {
        let mut tree = ElementTree::new();
        let root = tree.add_root(container());
        assert_eq!(tree.take_dirty(), vec![root]);
        assert!(tree.take_dirty().is_empty());
        tree.get_mut(root).unwrap().mark_dirty();
        assert_eq!(tree.take_dirty(), vec![root]);
    }
}
