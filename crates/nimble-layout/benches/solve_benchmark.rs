//! Solver benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nimble_layout::{Behave, Contain, LayoutTree, Margins, Node, NodeId};

fn fill_row(
    tree: &mut LayoutTree,
    behave: Behave,
    cols: usize,
    col: impl Fn() -> Node,
) -> NodeId {
    let row = tree.add(Node::new().with_contain(Contain::ROW).with_behave(behave));
    let kids: Vec<_> = (0..cols).map(|_| tree.add(col())).collect();
    tree.append_children(row, kids).unwrap();
    row
}

/// A page of mixed rows, the same shape the scenario tests cover.
fn nested_boxes() -> (LayoutTree, NodeId) {
    let mut tree = LayoutTree::new();
    let root = tree.add(Node::new().with_size((70.0, 60.0)));
    let main = tree.add(
        Node::new()
            .with_margins(Margins::uniform(10.0))
            .with_contain(Contain::COLUMN)
            .with_behave(Behave::FILL),
    );
    tree.append_child(root, main).unwrap();

    let rows = [
        fill_row(&mut tree, Behave::FILL, 5, || Node::new().with_behave(Behave::FILL)),
        fill_row(&mut tree, Behave::VFILL, 5, || {
            Node::new().with_size((10.0, 0.0)).with_behave(Behave::VFILL)
        }),
        fill_row(&mut tree, Behave::HFILL, 99, Node::new),
        fill_row(&mut tree, Behave::FILL, 50, || Node::new().with_behave(Behave::FILL)),
    ];
    tree.append_children(main, rows).unwrap();
    (tree, root)
}

fn wrapped_grid(count: usize) -> (LayoutTree, NodeId) {
    let mut tree = LayoutTree::new();
    let root = tree.add(
        Node::new()
            .with_size((640.0, 0.0))
            .with_contain(Contain::ROW | Contain::WRAP),
    );
    let kids: Vec<_> = (0..count)
        .map(|i| tree.add(Node::new().with_size((8.0 + (i % 7) as f32, 12.0))))
        .collect();
    tree.append_children(root, kids).unwrap();
    (tree, root)
}

fn solve_nested(c: &mut Criterion) {
    let (mut tree, root) = nested_boxes();
    c.bench_function("solve_nested_boxes_x5", |b| {
        b.iter(|| {
            for _ in 0..5 {
                tree.run(black_box(root)).unwrap();
            }
        })
    });
}

fn solve_wrapped(c: &mut Criterion) {
    let (mut tree, root) = wrapped_grid(10_000);
    c.bench_function("solve_wrapped_grid", |b| {
        b.iter(|| tree.run(black_box(root)))
    });
}

criterion_group!(benches, solve_nested, solve_wrapped);
criterion_main!(benches);
