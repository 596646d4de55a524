//! Box layout for UI toolkits.
//!
//! This crate computes the rects of a tree of boxes from per-node hints:
//! an explicit size, margins, a container model and anchoring flags.
//!
//! # Architecture
//!
//! 1. **Tree**: nodes live in an arena and are linked first-child/next-sibling
//! 2. **Size pass**: bottom-up content sizes along one axis
//! 3. **Arrange pass**: top-down placement along the same axis
//!
//! A solve runs the size and arrange passes horizontally, then vertically, so
//! wrapping rows know their line breaks before their height is measured.
//!
//! # Example
//!
//! ```
//! use nimble_layout::{Behave, Contain, LayoutTree, Node, Rect};
//!
//! let mut tree = LayoutTree::new();
//! let root = tree.add(Node::new().with_size((90.0, 30.0)).with_contain(Contain::ROW));
//! let sidebar = tree.add(Node::new().with_size((30.0, 0.0)).with_behave(Behave::VFILL));
//! let content = tree.add(Node::new().with_behave(Behave::FILL));
//! tree.append_children(root, [sidebar, content])?;
//!
//! tree.run(root)?;
//! assert_eq!(tree[content].rect(), Rect::new(30.0, 0.0, 60.0, 30.0));
//! # Ok::<(), nimble_layout::LayoutError>(())
//! ```

mod arrange;
mod compute;
mod error;
mod flags;
mod geometry;
mod measure;
mod tree;

pub use compute::LayoutOptions;
pub use error::{LayoutError, Result};
pub use flags::{Align, Anchor, Behave, Contain, ContainMode, Flags, ItemState};
pub use geometry::{Axis, Margins, Rect};
pub use tree::{Children, LayoutTree, Node, NodeId};
