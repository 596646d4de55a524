//! Size pass: bottom-up content sizes along one axis.

use crate::flags::ContainMode;
use crate::geometry::Axis;
use crate::tree::{LayoutTree, NodeId};

impl LayoutTree {
    /// Compute the size of `id` along `axis` from its explicit size or its
    /// children. Children must already have been measured along `axis`.
    ///
    /// Also resets the node's position along `axis` to its leading margin;
    /// the arrange pass offsets it from there.
    pub(crate) fn calc_size(&mut self, id: NodeId, axis: Axis) {
        let node = &self.nodes[id.index()];
        let explicit = node.size()[axis.index()];
        let leading = node.margins().leading(axis);

        let size = if explicit != 0.0 {
            explicit
        } else {
            match node.contain().mode() {
                ContainMode::Stack { axis: main, wrap } if main == axis => {
                    if wrap {
                        self.wrapped_stacked_size(id, axis)
                    } else {
                        self.stacked_size(id, axis)
                    }
                }
                // A wrapping row has just been arranged horizontally, so its
                // solver breaks are current when its height is measured.
                ContainMode::Stack { axis: main, wrap: true } => {
                    self.wrapped_overlaid_size(id, axis, main == Axis::Horizontal)
                }
                ContainMode::Stack { .. } | ContainMode::Free => self.overlaid_size(id, axis),
            }
        };

        let rect = &mut self.nodes[id.index()].rect;
        rect.set_pos(axis, leading);
        rect.set_extent(axis, size);
    }

    /// Space a measured child takes along `axis`, margins included.
    #[inline]
    pub(crate) fn outer_extent(&self, id: NodeId, axis: Axis) -> f32 {
        let node = &self.nodes[id.index()];
        node.rect.pos(axis) + node.rect.extent(axis) + node.margins().trailing(axis)
    }

    fn stacked_size(&self, id: NodeId, axis: Axis) -> f32 {
        self.children(id)
            .fold(0.0_f32, |total, child| total + self.outer_extent(child, axis))
    }

    fn overlaid_size(&self, id: NodeId, axis: Axis) -> f32 {
        self.children(id)
            .fold(0.0_f32, |widest, child| widest.max(self.outer_extent(child, axis)))
    }

    /// Whether `id` starts a line. Solver breaks left over from an earlier
    /// solve are ignored unless `current` says they were set by this one.
    fn starts_line(&self, id: NodeId, current: bool) -> bool {
        let flags = self.nodes[id.index()].flags;
        if current {
            flags.is_break()
        } else {
            flags.is_hard_break()
        }
    }

    /// Longest line of a wrapping stack, split at caller breaks only.
    fn wrapped_stacked_size(&self, id: NodeId, axis: Axis) -> f32 {
        let mut line = 0.0_f32;
        let mut longest = 0.0_f32;
        for child in self.children(id) {
            if self.starts_line(child, false) {
                longest = longest.max(line);
                line = 0.0;
            }
            line += self.outer_extent(child, axis);
        }
        longest.max(line)
    }

    /// Sum of line thicknesses across a wrapping stack.
    fn wrapped_overlaid_size(&self, id: NodeId, axis: Axis, current: bool) -> f32 {
        let mut line = 0.0_f32;
        let mut total = 0.0_f32;
        for child in self.children(id) {
            if self.starts_line(child, current) {
                total += line;
                line = 0.0;
            }
            line = line.max(self.outer_extent(child, axis));
        }
        total + line
    }
}
