//! Randomized checks of solver invariants.

use nimble_layout::{Align, Behave, Contain, LayoutTree, Margins, Node, NodeId, Rect};
use proptest::prelude::*;

/// Input hints for one child.
#[derive(Debug, Clone)]
struct Hints {
    size: (f32, f32),
    margins: Margins,
    behave: Behave,
    hard_break: bool,
}

impl Hints {
    fn node(&self) -> Node {
        let mut node = Node::new()
            .with_size(self.size)
            .with_margins(self.margins)
            .with_behave(self.behave);
        node.set_break(self.hard_break);
        node
    }
}

fn dimension() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.0_f32), (1u8..40).prop_map(f32::from)]
}

fn hints() -> impl Strategy<Value = Hints> {
    let behave = prop::sample::select(vec![
        Behave::CENTER,
        Behave::LEFT | Behave::TOP,
        Behave::RIGHT | Behave::BOTTOM,
        Behave::HFILL,
        Behave::VFILL,
        Behave::FILL,
    ]);
    (
        dimension(),
        dimension(),
        (0u8..4, 0u8..4, 0u8..4, 0u8..4),
        behave,
        prop::bool::weighted(0.1),
    )
        .prop_map(|(w, h, (l, t, r, b), behave, hard_break)| Hints {
            size: (w, h),
            margins: Margins::new(l.into(), t.into(), r.into(), b.into()),
            behave,
            hard_break,
        })
}

fn contain() -> impl Strategy<Value = Contain> {
    prop::sample::select(vec![
        Contain::LAYOUT,
        Contain::ROW,
        Contain::COLUMN,
        Contain::ROW | Contain::WRAP,
        Contain::COLUMN | Contain::WRAP,
    ])
}

fn align() -> impl Strategy<Value = Align> {
    prop::sample::select(vec![Align::Middle, Align::Start, Align::End, Align::Justify])
}

fn build(
    contain: Contain,
    align: Align,
    size: (f32, f32),
    children: &[Hints],
) -> (LayoutTree, NodeId, Vec<NodeId>) {
    let mut tree = LayoutTree::new();
    let root = tree.add(
        Node::new()
            .with_size(size)
            .with_contain(contain)
            .with_align(align),
    );
    let kids: Vec<_> = children.iter().map(|h| tree.add(h.node())).collect();
    tree.append_children(root, kids.iter().copied()).unwrap();
    (tree, root, kids)
}

fn rects(tree: &LayoutTree, ids: &[NodeId]) -> Vec<Rect> {
    ids.iter().map(|&id| tree[id].rect()).collect()
}

proptest! {
    #[test]
    fn explicit_root_size_is_kept_unless_wrapping_columns(
        contain in contain(),
        align in align(),
        width in 1u8..100,
        height in 1u8..100,
        children in prop::collection::vec(hints(), 0..12),
    ) {
        let size = (f32::from(width), f32::from(height));
        let (mut tree, root, _) = build(contain, align, size, &children);
        tree.run(root).unwrap();

        let rect = tree[root].rect();
        prop_assert_eq!(rect.height, size.1);
        // A wrapping column reports the width its columns actually use.
        if contain != Contain::COLUMN | Contain::WRAP {
            prop_assert_eq!(rect.width, size.0);
        }
        prop_assert_eq!((rect.x, rect.y), (0.0, 0.0));
    }

    #[test]
    fn solving_twice_gives_the_same_rects(
        contain in contain(),
        align in align(),
        size in (dimension(), dimension()),
        children in prop::collection::vec(hints(), 0..16),
    ) {
        let (mut tree, root, kids) = build(contain, align, size, &children);
        tree.run(root).unwrap();
        let first = rects(&tree, &kids);
        let root_rect = tree[root].rect();

        tree.run(root).unwrap();
        prop_assert_eq!(rects(&tree, &kids), first);
        prop_assert_eq!(tree[root].rect(), root_rect);
    }

    #[test]
    fn reset_and_rebuild_matches_fresh_tree(
        contain in contain(),
        align in align(),
        size in (dimension(), dimension()),
        children in prop::collection::vec(hints(), 0..16),
    ) {
        let (mut tree, root, kids) = build(contain, align, size, &children);
        tree.run(root).unwrap();
        let expected = rects(&tree, &kids);

        tree.reset(root, true).unwrap();
        tree[root] = Node::new()
            .with_size(size)
            .with_contain(contain)
            .with_align(align);
        for (&kid, hints) in kids.iter().zip(&children) {
            tree[kid] = hints.node();
        }
        tree.append_children(root, kids.iter().copied()).unwrap();
        tree.run(root).unwrap();

        let rebuilt = rects(&tree, &kids);
        prop_assert_eq!(rebuilt.len(), expected.len());
        for (a, b) in rebuilt.iter().zip(&expected) {
            for i in 0..4 {
                prop_assert_eq!(a[i].to_bits(), b[i].to_bits());
            }
        }
    }

    #[test]
    fn leaf_size_reaches_root_through_auto_chain(
        depth in 1usize..300,
        width in 1u8..100,
        height in 1u8..100,
    ) {
        let mut tree = LayoutTree::new();
        let root = tree.add(Node::new());
        let mut parent = root;
        for _ in 0..depth {
            let item = tree.add(Node::new());
            tree.append_child(parent, item).unwrap();
            parent = item;
        }
        let size = (f32::from(width), f32::from(height));
        tree[parent].set_size(size);
        tree.run(root).unwrap();

        prop_assert_eq!(tree[root].rect(), Rect::new(0.0, 0.0, size.0, size.1));
    }

    #[test]
    fn fill_children_split_a_row_evenly(
        count in 1usize..8,
        slot in 1u8..20,
        height in 1u8..20,
    ) {
        let width = f32::from(slot) * count as f32;
        let mut tree = LayoutTree::new();
        let root = tree.add(
            Node::new()
                .with_size((width, f32::from(height)))
                .with_contain(Contain::ROW),
        );
        let kids: Vec<_> = (0..count)
            .map(|_| tree.add(Node::new().with_behave(Behave::FILL)))
            .collect();
        tree.append_children(root, kids.iter().copied()).unwrap();
        tree.run(root).unwrap();

        for (i, &kid) in kids.iter().enumerate() {
            let expected = Rect::new(
                f32::from(slot) * i as f32,
                0.0,
                f32::from(slot),
                f32::from(height),
            );
            prop_assert_eq!(tree[kid].rect(), expected);
        }
    }
}
