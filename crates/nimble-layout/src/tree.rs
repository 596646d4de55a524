//! Layout tree data structures.
//!
//! Nodes live in an arena owned by [`LayoutTree`] and are addressed by
//! [`NodeId`]. Each node links only downward (first child) and forward (next
//! sibling); a node cannot find its parent.

use std::fmt;
use std::ops::{Index, IndexMut};

use glam::Vec2;
use tracing::warn;

use crate::compute::LayoutOptions;
use crate::error::{LayoutError, Result};
use crate::flags::{Align, Behave, Contain, Flags, ItemState};
use crate::geometry::{Axis, Margins, Rect};

/// Handle of a node inside a [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A box in the layout tree: input hints plus the computed rect.
#[derive(Debug, Default)]
pub struct Node {
    pub(crate) flags: Flags,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    size: Vec2,
    margins: Margins,
    pub(crate) rect: Rect,
}

impl Node {
    /// Create an empty node: no flags, auto size, no margins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit size.
    pub fn with_size(mut self, size: impl Into<Vec2>) -> Self {
        self.set_size(size);
        self
    }

    /// Set the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the container model.
    pub fn with_contain(mut self, contain: Contain) -> Self {
        self.flags.set_contain(contain);
        self
    }

    /// Set the stack alignment.
    pub fn with_align(mut self, align: Align) -> Self {
        self.flags.set_align(align);
        self
    }

    /// Set how this node attaches to its parent.
    pub fn with_behave(mut self, behave: Behave) -> Self {
        self.flags.set_behave(behave);
        self
    }

    /// Explicit size; `0` on an axis means the size comes from the children.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Set the explicit size.
    ///
    /// A size of exactly zero on an axis is the same as no explicit size.
    pub fn set_size(&mut self, size: impl Into<Vec2>) {
        self.size = size.into();
        for axis in Axis::ALL {
            self.flags.set_fixed(axis, self.size[axis.index()] != 0.0);
        }
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    pub fn contain(&self) -> Contain {
        self.flags.contain()
    }

    pub fn set_contain(&mut self, contain: Contain) {
        self.flags.set_contain(contain);
    }

    pub fn align(&self) -> Align {
        self.flags.align()
    }

    pub fn set_align(&mut self, align: Align) {
        self.flags.set_align(align);
    }

    pub fn behave(&self) -> Behave {
        self.flags.behave()
    }

    /// Set the behavior field, including the break marker.
    pub fn set_behave(&mut self, behave: Behave) {
        self.flags.set_behave(behave);
    }

    /// Whether a wrapping parent starts a new line at this node.
    pub fn is_break(&self) -> bool {
        self.flags.is_break()
    }

    pub fn set_break(&mut self, on: bool) {
        self.flags.set_break(on);
    }

    pub fn is_inserted(&self) -> bool {
        self.flags.is_inserted()
    }

    /// Bookkeeping bits (inserted, fixed width, fixed height).
    pub fn state(&self) -> ItemState {
        self.flags.state()
    }

    /// The whole packed flag word.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Computed rect. Only meaningful after a solve that covered this node.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }
}

/// Arena of layout nodes.
#[derive(Debug, Default)]
pub struct LayoutTree {
    pub(crate) nodes: Vec<Node>,
    /// Parent-before-child visit order of the last solve, kept for reuse.
    pub(crate) order: Vec<NodeId>,
}

impl LayoutTree {
    /// Create an empty layout tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with preallocated storage.
    pub fn with_options(options: LayoutOptions) -> Self {
        Self {
            nodes: Vec::with_capacity(options.capacity),
            order: Vec::with_capacity(options.capacity),
        }
    }

    /// Move a node into the arena. The node starts out unlinked.
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the arena, linked or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every node but keep the allocation.
    ///
    /// Previously issued ids become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.order.clear();
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Shorthand for the computed rect of a node.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.get(id).map(Node::rect)
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<()> {
        if id.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(LayoutError::InvalidNode(id))
        }
    }

    fn check_insert(&self, target: NodeId, item: NodeId) -> Result<()> {
        self.check(target)?;
        self.check(item)?;
        if target == item {
            return Err(LayoutError::SelfInsertion(item));
        }
        if self.nodes[item.index()].is_inserted() {
            return Err(LayoutError::AlreadyInserted(item));
        }
        Ok(())
    }

    /// Link `sibling` directly after `anchor`, in front of whatever followed it.
    ///
    /// This is also the cheap way to build a long list of children: append the
    /// first one with [`append_child`](Self::append_child), then chain the rest
    /// with this, avoiding a walk over the existing children each time.
    pub fn insert_after(&mut self, anchor: NodeId, sibling: NodeId) -> Result<()> {
        self.check_insert(anchor, sibling)?;
        let next = self.nodes[anchor.index()].next_sibling;
        let node = &mut self.nodes[sibling.index()];
        node.next_sibling = next;
        node.flags.set_state(ItemState::INSERTED, true);
        self.nodes[anchor.index()].next_sibling = Some(sibling);
        Ok(())
    }

    /// End of the sibling chain starting at `first`.
    ///
    /// A chain can hold at most one link fewer than the tree has nodes; more
    /// means a node was relinked while a stale link still pointed at it.
    fn chain_end(&self, first: NodeId) -> Result<NodeId> {
        let mut last = first;
        let mut links = 0;
        while let Some(next) = self.nodes[last.index()].next_sibling {
            links += 1;
            if links >= self.nodes.len() {
                warn!(node = %first, "sibling cycle in layout tree");
                return Err(LayoutError::Cycle(first));
            }
            last = next;
        }
        Ok(last)
    }

    /// Make `child` the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_insert(parent, child)?;
        match self.nodes[parent.index()].first_child {
            Some(first) => {
                let last = self.chain_end(first)?;
                self.insert_after(last, child)
            }
            None => {
                self.nodes[child.index()].flags.set_state(ItemState::INSERTED, true);
                self.nodes[parent.index()].first_child = Some(child);
                Ok(())
            }
        }
    }

    /// Make `child` the first child of `parent`.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_insert(parent, child)?;
        let old = self.nodes[parent.index()].first_child.replace(child);
        let node = &mut self.nodes[child.index()];
        node.flags.set_state(ItemState::INSERTED, true);
        node.next_sibling = old;
        Ok(())
    }

    /// Append several children in order.
    ///
    /// The existing children are walked once; after that each item is linked
    /// behind the previous one directly. On error the items before the failing
    /// one stay linked.
    pub fn append_children<I>(&mut self, parent: NodeId, children: I) -> Result<()>
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.check(parent)?;
        let mut last = match self.nodes[parent.index()].first_child {
            Some(first) => Some(self.chain_end(first)?),
            None => None,
        };
        for child in children {
            match last {
                Some(prev) => {
                    self.check_insert(parent, child)?;
                    self.insert_after(prev, child)?;
                }
                None => self.append_child(parent, child)?,
            }
            last = Some(child);
        }
        Ok(())
    }

    /// Iterate over the children of a node.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).and_then(|n| n.first_child),
            remaining: self.nodes.len(),
        }
    }

    /// Iterate over the siblings that follow a node.
    pub fn siblings(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).and_then(|n| n.next_sibling),
            remaining: self.nodes.len(),
        }
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.first_child
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.next_sibling
    }

    /// Last child of a node. Walks the whole sibling chain.
    ///
    /// On a corrupted chain this is wherever the bounded walk stops; the
    /// insertion methods report such chains as [`LayoutError::Cycle`].
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        let first = self.first_child(id)?;
        Some(self.last_sibling(first))
    }

    /// Last node of the sibling chain starting at `id` (`id` itself if none follow).
    pub fn last_sibling(&self, id: NodeId) -> NodeId {
        self.siblings(id).last().unwrap_or(id)
    }

    /// Restore a node to its freshly created state so it can be reused.
    ///
    /// With `recursive`, every node below it is reset as well. Links pointing
    /// at the node from a parent or previous sibling are left untouched, so a
    /// node reset in place must not be inserted again elsewhere.
    pub fn reset(&mut self, id: NodeId, recursive: bool) -> Result<()> {
        self.check(id)?;
        if recursive {
            // Taking a node clears its links, so each one is expanded once
            // even if the caller managed to link a cycle.
            let mut stack = Vec::new();
            stack.extend(self.nodes[id.index()].first_child);
            while let Some(current) = stack.pop() {
                let node = std::mem::take(&mut self.nodes[current.index()]);
                stack.extend(node.next_sibling);
                stack.extend(node.first_child);
            }
        }
        self.nodes[id.index()] = Node::default();
        Ok(())
    }
}

impl Index<NodeId> for LayoutTree {
    type Output = Node;

    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    fn index(&self, id: NodeId) -> &Node {
        match self.nodes.get(id.index()) {
            Some(node) => node,
            None => panic!("node {id} does not belong to this layout tree"),
        }
    }
}

impl IndexMut<NodeId> for LayoutTree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        match self.nodes.get_mut(id.index()) {
            Some(node) => node,
            None => panic!("node {id} does not belong to this layout tree"),
        }
    }
}

/// Forward walk along a sibling chain.
///
/// Returned by [`LayoutTree::children`] and [`LayoutTree::siblings`]. Each
/// call starts over from the tree, so iterators are cheap to recreate. A walk
/// yields at most as many ids as the tree has nodes.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    tree: &'a LayoutTree,
    next: Option<NodeId>,
    remaining: usize,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        if self.remaining == 0 {
            self.next = None;
            return None;
        }
        self.remaining -= 1;
        self.next = self.tree.get(current).and_then(|n| n.next_sibling);
        Some(current)
    }
}
