//! Solve entry point.
//!
//! A solve runs four passes over the subtree below a root: size along the
//! horizontal axis, arrange along it, then the same for the vertical axis.
//! Sizing is bottom-up and arranging top-down. Both walk a single
//! parent-before-child order built up front, so nesting depth never touches
//! the call stack.

use tracing::{debug, trace, warn};

use crate::error::{LayoutError, Result};
use crate::geometry::Axis;
use crate::tree::{LayoutTree, NodeId};

/// Layout tree configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    /// Number of nodes to preallocate room for.
    pub capacity: usize,
}

impl LayoutTree {
    /// Compute the rect of every node under `root`, `root` included.
    ///
    /// `root` does not have to be the top of the tree, but its own rect must
    /// already be valid along any axis it does not size itself (for instance
    /// from an earlier solve of its ancestors). Nodes that are not linked
    /// below `root` are not touched.
    pub fn run(&mut self, root: NodeId) -> Result<()> {
        self.check(root)?;
        self.collect_order(root)?;
        debug!(root = %root, nodes = self.order.len(), "solving layout");

        let order = std::mem::take(&mut self.order);
        for axis in Axis::ALL {
            trace!(?axis, "size pass");
            for &id in order.iter().rev() {
                self.calc_size(id, axis);
            }
            trace!(?axis, "arrange pass");
            for &id in &order {
                self.arrange(id, axis);
            }
        }
        self.order = order;

        debug!(root = %root, rect = %self.nodes[root.index()].rect, "layout solved");
        Ok(())
    }

    /// Fill `self.order` with the subtree of `root` in level order.
    fn collect_order(&mut self, root: NodeId) -> Result<()> {
        self.order.clear();
        self.order.push(root);
        let mut cursor = 0;
        while let Some(&id) = self.order.get(cursor) {
            let mut child = self.nodes[id.index()].first_child;
            while let Some(c) = child {
                // A tree can never hold more links than nodes.
                if self.order.len() >= self.nodes.len() {
                    warn!(root = %root, "link cycle in layout tree, solve aborted");
                    self.order.clear();
                    return Err(LayoutError::Cycle(root));
                }
                self.order.push(c);
                child = self.nodes[c.index()].next_sibling;
            }
            cursor += 1;
        }
        Ok(())
    }
}
