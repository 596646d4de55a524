//! Packed node flags.
//!
//! Every node carries a single `u32` split into four fields:
//!
//! | mask       | field      |
//! |------------|------------|
//! | `0x000007` | [`Contain`] (how children are laid out) |
//! | `0x000018` | [`Align`] (where leftover space goes in a stack) |
//! | `0x0003E0` | [`Behave`] (how this node sits in its parent) |
//! | `0x003C00` | [`ItemState`] (solver bookkeeping) |
//!
//! The behavior bits are ordered left, top, right, bottom so that shifting the
//! field right by the axis index turns the vertical anchors into the
//! horizontal ones. The solver only ever tests `LEFT`, `RIGHT` and `HFILL`
//! after such a shift; see [`Behave::along`]. The fixed-size state bits use
//! the same trick.

use bitflags::bitflags;

use crate::geometry::Axis;

bitflags! {
    /// Container model of a node: free layout, or a row/column stack that may wrap.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Contain: u32 {
        /// Stack children left to right.
        const ROW = 0x002;
        /// Stack children top to bottom.
        const COLUMN = 0x003;
        /// Flex model bit, shared by `ROW` and `COLUMN`.
        const FLEX = 0x002;
        /// Start a new line when a stack runs out of room.
        const WRAP = 0x004;
    }
}

impl Contain {
    /// Free layout: every child is placed independently by its anchors.
    pub const LAYOUT: Self = Self::empty();
    /// Single-line stack.
    pub const NO_WRAP: Self = Self::empty();

    /// Decode into the arrangement the solver applies.
    pub fn mode(self) -> ContainMode {
        match self.bits() & Flags::CONTAIN_MASK {
            0x2 => ContainMode::Stack { axis: Axis::Horizontal, wrap: false },
            0x3 => ContainMode::Stack { axis: Axis::Vertical, wrap: false },
            0x6 => ContainMode::Stack { axis: Axis::Horizontal, wrap: true },
            0x7 => ContainMode::Stack { axis: Axis::Vertical, wrap: true },
            _ => ContainMode::Free,
        }
    }
}

impl Default for Contain {
    fn default() -> Self {
        Self::LAYOUT
    }
}

/// Decoded container model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainMode {
    /// Children overlay each other and are positioned by their anchors.
    Free,
    /// Children are laid end to end along `axis`.
    Stack { axis: Axis, wrap: bool },
}

/// Placement of leftover space along the stacking axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum Align {
    /// Split leftover space evenly before and after the line.
    #[default]
    Middle = 0x000,
    /// Pack at the start of the line.
    Start = 0x008,
    /// Pack at the end of the line.
    End = 0x010,
    /// Turn leftover space into even gaps between items.
    Justify = 0x018,
}

impl Align {
    /// Decode the align field of a packed flag word.
    pub fn from_bits(bits: u32) -> Self {
        match bits & Flags::ALIGN_MASK {
            0x008 => Align::Start,
            0x010 => Align::End,
            0x018 => Align::Justify,
            _ => Align::Middle,
        }
    }

    pub fn bits(self) -> u32 {
        self as u32
    }
}

bitflags! {
    /// How a node attaches to its parent, plus the wrap-break marker.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Behave: u32 {
        /// Anchor to the left side of the parent.
        const LEFT = 0x020;
        /// Anchor to the top side of the parent.
        const TOP = 0x040;
        /// Anchor to the right side of the parent.
        const RIGHT = 0x080;
        /// Anchor to the bottom side of the parent.
        const BOTTOM = 0x100;
        /// Anchor left and right: stretch horizontally.
        const HFILL = 0x0a0;
        /// Anchor top and bottom: stretch vertically.
        const VFILL = 0x140;
        /// Anchor on all four sides.
        const FILL = 0x1e0;
        /// Start a new line at this node inside a wrapping stack.
        ///
        /// The solver adds this marker to every child that begins an
        /// automatically wrapped line, so it can be read after a solve.
        const BREAK = 0x200;
    }
}

impl Behave {
    /// Center on both axes, with the leading margins as offset.
    pub const CENTER: Self = Self::empty();
    /// Center horizontally, with the left margin as offset.
    pub const HCENTER: Self = Self::empty();
    /// Center vertically, with the top margin as offset.
    pub const VCENTER: Self = Self::empty();

    /// Shift the field so that `LEFT`/`RIGHT`/`HFILL` describe `axis`.
    ///
    /// For [`Axis::Vertical`] the top bit lands on `LEFT` and the bottom bit on
    /// `RIGHT`. Bits shifted in from neighbouring fields are retained, so only
    /// test the horizontal anchor constants on the result.
    #[inline]
    pub fn along(self, axis: Axis) -> Self {
        Self::from_bits_retain(self.bits() >> axis.index())
    }

    /// Anchor of this node along `axis`.
    #[inline]
    pub fn anchor(self, axis: Axis) -> Anchor {
        Anchor::from_along(self.along(axis))
    }
}

impl Default for Behave {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Per-axis attachment decoded from [`Behave`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// No anchor on this axis.
    Center,
    /// Left or top.
    Near,
    /// Right or bottom.
    Far,
    /// Both sides.
    Fill,
}

impl Anchor {
    /// Decode a behavior field already shifted by [`Behave::along`].
    #[inline]
    pub fn from_along(shifted: Behave) -> Self {
        let bits = (shifted & Behave::HFILL).bits();
        if bits == Behave::HFILL.bits() {
            Anchor::Fill
        } else if bits == Behave::RIGHT.bits() {
            Anchor::Far
        } else if bits == Behave::LEFT.bits() {
            Anchor::Near
        } else {
            Anchor::Center
        }
    }
}

bitflags! {
    /// Bookkeeping bits owned by the tree.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ItemState: u32 {
        /// Linked under a parent or after a sibling.
        const INSERTED = 0x0400;
        /// Explicit non-zero width.
        const HFIXED = 0x0800;
        /// Explicit non-zero height.
        const VFIXED = 0x1000;
        /// The break marker on this node was added by the solver, not the caller.
        const AUTO_BREAK = 0x2000;
    }
}

/// The packed flag word stored on every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags(u32);

impl Flags {
    pub const CONTAIN_MASK: u32 = 0x00_0007;
    pub const ALIGN_MASK: u32 = 0x00_0018;
    pub const BEHAVE_MASK: u32 = 0x00_03e0;
    pub const STATE_MASK: u32 = 0x00_3c00;
    pub const FIXED_MASK: u32 = 0x00_1800;

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    fn set_field(&mut self, mask: u32, value: u32) {
        self.0 = (self.0 & !mask) | (value & mask);
    }

    pub fn contain(self) -> Contain {
        Contain::from_bits_retain(self.0 & Self::CONTAIN_MASK)
    }

    pub fn set_contain(&mut self, contain: Contain) {
        self.set_field(Self::CONTAIN_MASK, contain.bits());
    }

    pub fn align(self) -> Align {
        Align::from_bits(self.0)
    }

    pub fn set_align(&mut self, align: Align) {
        self.set_field(Self::ALIGN_MASK, align.bits());
    }

    pub fn behave(self) -> Behave {
        Behave::from_bits_retain(self.0 & Self::BEHAVE_MASK)
    }

    /// Replace the behavior field. Any break marker in it becomes a caller break.
    pub fn set_behave(&mut self, behave: Behave) {
        self.set_field(Self::BEHAVE_MASK, behave.bits());
        self.set_state(ItemState::AUTO_BREAK, false);
    }

    pub fn state(self) -> ItemState {
        ItemState::from_bits_retain(self.0 & Self::STATE_MASK)
    }

    pub(crate) fn set_state(&mut self, state: ItemState, on: bool) {
        if on {
            self.0 |= state.bits();
        } else {
            self.0 &= !state.bits();
        }
    }

    pub fn is_inserted(self) -> bool {
        self.state().contains(ItemState::INSERTED)
    }

    pub fn is_break(self) -> bool {
        self.behave().contains(Behave::BREAK)
    }

    /// Set or clear a caller-requested break.
    pub fn set_break(&mut self, on: bool) {
        if on {
            self.0 |= Behave::BREAK.bits();
        } else {
            self.0 &= !Behave::BREAK.bits();
        }
        self.set_state(ItemState::AUTO_BREAK, false);
    }

    /// Whether the break marker was requested by the caller.
    pub fn is_hard_break(self) -> bool {
        self.is_break() && !self.state().contains(ItemState::AUTO_BREAK)
    }

    /// Mark a line start found by the solver. Caller breaks are left as they are.
    pub(crate) fn mark_auto_break(&mut self) {
        if !self.is_break() {
            self.0 |= Behave::BREAK.bits();
            self.set_state(ItemState::AUTO_BREAK, true);
        }
    }

    /// Drop a solver-added break so the line can be measured again.
    pub(crate) fn clear_auto_break(&mut self) {
        if self.state().contains(ItemState::AUTO_BREAK) {
            self.0 &= !Behave::BREAK.bits();
            self.set_state(ItemState::AUTO_BREAK, false);
        }
    }

    /// Behavior field shifted for `axis`, see [`Behave::along`].
    #[inline]
    pub fn behave_along(self, axis: Axis) -> Behave {
        self.behave().along(axis)
    }

    /// Anchor of the node along `axis`.
    #[inline]
    pub fn anchor_along(self, axis: Axis) -> Anchor {
        Anchor::from_along(self.behave_along(axis))
    }

    /// Whether the node has an explicit size along `axis`.
    #[inline]
    pub fn fixed_along(self, axis: Axis) -> bool {
        let shifted = (self.0 & Self::FIXED_MASK) >> axis.index();
        shifted & ItemState::HFIXED.bits() != 0
    }

    pub(crate) fn set_fixed(&mut self, axis: Axis, on: bool) {
        let bit = match axis {
            Axis::Horizontal => ItemState::HFIXED,
            Axis::Vertical => ItemState::VFIXED,
        };
        self.set_state(bit, on);
    }
}
