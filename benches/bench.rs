use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bst_nav::compare::Natural;
use bst_nav::linked::Tree;

/// Inserts the middle element first and recurses into both halves so the
/// unbalanced tree still comes out with `O(lg N)` height. Inserting in sorted
/// order instead would degrade every benchmark to a linked-list walk.
fn build_balanced(tree: &mut Tree<i32, Natural>, lower: i32, upper: i32) {
    if lower > upper {
        return;
    }
    let mid = lower + (upper - lower) / 2;
    tree.insert(mid);
    build_balanced(tree, lower, mid - 1);
    build_balanced(tree, mid + 1, upper);
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for
/// various sizes of trees before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32, Natural>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2i32.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes - 1;

        let tree = {
            let mut tree = Tree::new(Natural);
            build_balanced(&mut tree, 0, num_nodes - 1);
            tree
        };

        let id = BenchmarkId::new("linked", largest_element_in_tree);
        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _node = black_box(tree.search(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _node = black_box(tree.search(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
