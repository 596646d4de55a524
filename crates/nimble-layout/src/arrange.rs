//! Arrange pass: top-down placement of children along one axis.
//!
//! When a node is arranged its own rect along the axis is final, and its
//! children still hold the margin-relative positions and content sizes left
//! by the size pass.

use crate::flags::{Align, Anchor, ContainMode};
use crate::geometry::Axis;
use crate::tree::{LayoutTree, NodeId};

/// Membership and bookkeeping for one line of a stack.
#[derive(Debug, Default)]
struct Line {
    /// Space taken by the line's children, margins included.
    used: f32,
    /// Children stretching along the axis.
    fill: u32,
    /// Children that may shrink or grow: not filling and not fixed.
    squeezable: u32,
    /// Children in the line.
    total: u32,
    /// First child of the next line.
    end: Option<NodeId>,
    /// The line ended on a caller-requested break.
    hard_break: bool,
}

impl LayoutTree {
    /// Position the children of `id` along `axis`.
    pub(crate) fn arrange(&mut self, id: NodeId, axis: Axis) {
        match self.nodes[id.index()].contain().mode() {
            ContainMode::Stack { axis: main, wrap: true } => match (main, axis) {
                (Axis::Horizontal, Axis::Horizontal) => self.arrange_stacked(id, axis, true),
                (Axis::Horizontal, Axis::Vertical) => {
                    self.arrange_wrapped_overlay_squeezed(id, axis);
                }
                // A wrapping column only knows its lines once heights are
                // final, so both axes are placed in the vertical pass.
                (Axis::Vertical, Axis::Vertical) => {
                    self.arrange_stacked(id, Axis::Vertical, true);
                    let far = self.arrange_wrapped_overlay_squeezed(id, Axis::Horizontal);
                    let rect = &mut self.nodes[id.index()].rect;
                    rect.width = far - rect.x;
                }
                (Axis::Vertical, Axis::Horizontal) => {}
            },
            ContainMode::Stack { axis: main, wrap: false } if main == axis => {
                self.arrange_stacked(id, axis, false);
            }
            ContainMode::Stack { .. } => {
                let node = &self.nodes[id.index()];
                let first = node.first_child;
                let (offset, space) = (node.rect.pos(axis), node.rect.extent(axis));
                self.arrange_overlay_squeezed_range(axis, first, None, offset, space);
            }
            ContainMode::Free => self.arrange_overlay(id, axis),
        }
    }

    /// Lay the children of `id` end to end along `axis`, one line at a time.
    fn arrange_stacked(&mut self, id: NodeId, axis: Axis, wrap: bool) {
        let parent = &self.nodes[id.index()];
        let align = parent.align();
        let origin = parent.rect.pos(axis);
        let space = parent.rect.extent(axis);
        let far_edge = origin + space;

        let mut line_start = parent.first_child;
        while let Some(first) = line_start {
            let line = self.scan_line(first, axis, space, wrap);

            let extra = space - line.used;
            let mut filler = 0.0;
            let mut spacer = 0.0;
            let mut lead = 0.0;
            let mut eater = 0.0;

            if extra > 0.0 {
                if line.fill > 0 {
                    filler = extra / line.fill as f32;
                } else if line.total > 0 {
                    match align {
                        // The last line of a wrapping stack, and any line cut
                        // by a caller break, stays start-aligned.
                        Align::Justify => {
                            let justified = !wrap || (line.end.is_some() && !line.hard_break);
                            if justified && line.total > 1 {
                                spacer = extra / (line.total - 1) as f32;
                            }
                        }
                        Align::Start => {}
                        Align::End => lead = extra,
                        Align::Middle => lead = extra / 2.0,
                    }
                }
            } else if !wrap && line.squeezable > 0 {
                eater = extra / line.squeezable as f32;
            }

            let mut cursor = origin;
            let mut child = Some(first);
            while let Some(c) = child {
                if child == line.end {
                    break;
                }
                let node = &mut self.nodes[c.index()];
                let fill = node.flags.anchor_along(axis) == Anchor::Fill;
                let fixed = node.flags.fixed_along(axis);
                let trailing = node.margins().trailing(axis);
                let extent = node.rect.extent(axis);

                cursor += node.rect.pos(axis) + lead;
                let near = cursor;
                let far = if fill {
                    cursor + filler
                } else if fixed {
                    cursor + extent
                } else {
                    cursor + (extent + eater).max(0.0)
                };
                let clipped = if wrap { far.min(far_edge - trailing) } else { far };

                node.rect.set_pos(axis, near);
                node.rect.set_extent(axis, clipped - near);
                cursor = far + trailing;
                child = node.next_sibling;
                lead = spacer;
            }

            line_start = line.end;
        }
    }

    /// Collect the children that fit on the line starting at `first`.
    ///
    /// In a wrapping stack the child that opens the next line gets the break
    /// marker, which the cross-axis pass and later size passes read back.
    fn scan_line(&mut self, first: NodeId, axis: Axis, space: f32, wrap: bool) -> Line {
        let mut line = Line::default();
        let mut child = Some(first);
        while let Some(c) = child {
            let node = &mut self.nodes[c.index()];
            if wrap && line.total > 0 {
                node.flags.clear_auto_break();
            }

            let trailing = node.margins().trailing(axis);
            let mut extend = line.used;
            if node.flags.anchor_along(axis) == Anchor::Fill {
                line.fill += 1;
                extend += node.rect.pos(axis) + trailing;
            } else {
                if !node.flags.fixed_along(axis) {
                    line.squeezable += 1;
                }
                extend += node.rect.pos(axis) + node.rect.extent(axis) + trailing;
            }

            if wrap && line.total > 0 && (extend > space || node.is_break()) {
                line.end = Some(c);
                line.hard_break = node.flags.is_hard_break();
                node.flags.mark_auto_break();
                break;
            }
            line.used = extend;
            child = node.next_sibling;
            line.total += 1;
        }
        line
    }

    /// Place each child of a free-layout node by its own anchors.
    fn arrange_overlay(&mut self, id: NodeId, axis: Axis) {
        let parent = &self.nodes[id.index()];
        let offset = parent.rect.pos(axis);
        let space = parent.rect.extent(axis);

        let mut child = parent.first_child;
        while let Some(c) = child {
            let node = &mut self.nodes[c.index()];
            let anchor = node.flags.anchor_along(axis);
            let margins = node.margins();
            let (leading, trailing) = (margins.leading(axis), margins.trailing(axis));
            let rect = &mut node.rect;
            let (pos, extent) = (rect.pos(axis), rect.extent(axis));

            match anchor {
                Anchor::Center => rect.set_pos(axis, pos + (space - extent - trailing) / 2.0),
                Anchor::Far => rect.set_pos(axis, pos + (space - extent - leading - trailing)),
                Anchor::Fill => rect.set_extent(axis, (space - pos - trailing).max(0.0)),
                Anchor::Near => {}
            }
            rect.set_pos(axis, rect.pos(axis) + offset);
            child = node.next_sibling;
        }
    }

    /// Overlay placement of the children from `start` up to (not including)
    /// `end`, with sizes capped to `space`.
    fn arrange_overlay_squeezed_range(
        &mut self,
        axis: Axis,
        start: Option<NodeId>,
        end: Option<NodeId>,
        offset: f32,
        space: f32,
    ) {
        let mut child = start;
        while let Some(c) = child {
            if child == end {
                break;
            }
            let node = &mut self.nodes[c.index()];
            let anchor = node.flags.anchor_along(axis);
            let trailing = node.margins().trailing(axis);
            let rect = &mut node.rect;
            let (pos, extent) = (rect.pos(axis), rect.extent(axis));
            let available = (space - pos - trailing).max(0.0);

            match anchor {
                Anchor::Center => {
                    let extent = extent.min(available);
                    rect.set_extent(axis, extent);
                    rect.set_pos(axis, pos + (space - extent - trailing) / 2.0);
                }
                Anchor::Far => {
                    let extent = extent.min(available);
                    rect.set_extent(axis, extent);
                    rect.set_pos(axis, space - extent - trailing);
                }
                Anchor::Fill => rect.set_extent(axis, available),
                Anchor::Near => rect.set_extent(axis, extent.min(available)),
            }
            rect.set_pos(axis, rect.pos(axis) + offset);
            child = node.next_sibling;
        }
    }

    /// Cross-axis placement for a wrapping stack: each break-delimited line is
    /// as thick as its thickest child, and lines follow each other.
    ///
    /// Returns the far edge of the last line.
    fn arrange_wrapped_overlay_squeezed(&mut self, id: NodeId, axis: Axis) -> f32 {
        let parent = &self.nodes[id.index()];
        let mut offset = parent.rect.pos(axis);
        let mut line_start = parent.first_child;
        let mut thickness = 0.0_f32;

        let mut child = line_start;
        while let Some(c) = child {
            if self.nodes[c.index()].is_break() {
                self.arrange_overlay_squeezed_range(axis, line_start, Some(c), offset, thickness);
                offset += thickness;
                line_start = Some(c);
                thickness = 0.0;
            }
            thickness = thickness.max(self.outer_extent(c, axis));
            child = self.nodes[c.index()].next_sibling;
        }
        self.arrange_overlay_squeezed_range(axis, line_start, None, offset, thickness);
        offset + thickness
    }
}
