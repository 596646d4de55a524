//! Value types shared by the tree and the solver.
//!
//! Most solver routines are written once and parameterized by an [`Axis`],
//! so every type here offers per-axis accessors next to its named fields.

use std::fmt;
use std::ops::{Index, IndexMut};

use glam::Vec2;

use crate::error::LayoutError;

/// One of the two layout dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Left to right (dimension 0).
    Horizontal = 0,
    /// Top to bottom (dimension 1).
    Vertical = 1,
}

impl Axis {
    /// Both axes in solving order.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Dimension index: 0 for horizontal, 1 for vertical.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The perpendicular axis.
    #[inline]
    pub fn other(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = LayoutError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::Horizontal),
            1 => Ok(Axis::Vertical),
            _ => Err(LayoutError::InvalidAxis(index)),
        }
    }
}

/// Computed output rectangle of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rect with position and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rect from position and size vectors.
    pub fn from_vecs(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Get position as Vec2.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size as Vec2.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Position along `axis`.
    #[inline]
    pub fn pos(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Size along `axis`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    #[inline]
    pub fn set_pos(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }

    #[inline]
    pub fn set_extent(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.width = value,
            Axis::Vertical => self.height = value,
        }
    }
}

impl Index<usize> for Rect {
    type Output = f32;

    /// Fields in order x, y, width, height.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..4`.
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.width,
            3 => &self.height,
            _ => panic!("rect index out of range: {index} (expected 0..4)"),
        }
    }
}

impl IndexMut<usize> for Rect {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.width,
            3 => &mut self.height,
            _ => panic!("rect index out of range: {index} (expected 0..4)"),
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}> <{}x{}>", self.x, self.y, self.width, self.height)
    }
}

/// Space kept free around a node, outside its rect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Create uniform margins.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create symmetric margins.
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Margin before the node along `axis` (left or top).
    #[inline]
    pub fn leading(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Margin after the node along `axis` (right or bottom).
    #[inline]
    pub fn trailing(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Total horizontal margin.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical margin.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl Index<usize> for Margins {
    type Output = f32;

    /// Fields in order left, top, right, bottom.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..4`.
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.left,
            1 => &self.top,
            2 => &self.right,
            3 => &self.bottom,
            _ => panic!("margin index out of range: {index} (expected 0..4)"),
        }
    }
}

impl IndexMut<usize> for Margins {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.left,
            1 => &mut self.top,
            2 => &mut self.right,
            3 => &mut self.bottom,
            _ => panic!("margin index out of range: {index} (expected 0..4)"),
        }
    }
}

impl fmt::Display for Margins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<l:{}, t:{}, r:{}, b:{}>",
            self.left, self.top, self.right, self.bottom
        )
    }
}
