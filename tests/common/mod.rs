#![allow(dead_code)]
use emst::{compute_cost, EmstError, Point, SpanningTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type EmstFn = fn(&[Point<f64>]) -> Result<SpanningTree<f64>, EmstError>;

const TOLERANCE: f64 = 1e-9;

pub fn random_points(seed: u64, n: usize) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)))
        .collect()
}

/// Small integer grid coordinates, so equal-weight arcs and coincident points are common.
pub fn random_grid_points(seed: u64, n: usize) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(0..4) as f64, rng.gen_range(0..4) as f64))
        .collect()
}

/// Asserts the arcs form a tree over exactly the input positions of `data`.
pub fn assert_spanning_tree(data: &[Point<f64>], tree: &SpanningTree<f64>) {
    let n = data.len();
    assert_eq!(n.saturating_sub(1), tree.arcs().len());

    let mut parent: Vec<usize> = (0..n).collect();
    for arc in tree.arcs() {
        assert_eq!(data[arc.source.id], arc.source.point);
        assert_eq!(data[arc.target.id], arc.target.point);
        let (a, b) = (find(&mut parent, arc.source.id), find(&mut parent, arc.target.id));
        assert_ne!(a, b, "arc {arc:?} closes a cycle");
        parent[a] = b;
    }
    // n - 1 arcs without a cycle leave a single component
    let roots = (0..n).filter(|&i| find(&mut parent, i) == i).count();
    assert_eq!(n.min(1), roots);
}

fn find(parent: &mut [usize], mut n: usize) -> usize {
    while parent[n] != n {
        parent[n] = parent[parent[n]];
        n = parent[n];
    }
    n
}

/// Minimum total length over every spanning tree of the complete graph, found by enumerating
/// arc subsets and pruning those that close a cycle.
pub fn brute_force_min_cost(data: &[Point<f64>]) -> f64 {
    let n = data.len();
    let mut arcs = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            let (dx, dy) = (data[i].x - data[j].x, data[i].y - data[j].y);
            arcs.push((i, j, (dx * dx + dy * dy).sqrt()));
        }
    }
    let parent: Vec<usize> = (0..n).collect();
    let mut best = f64::INFINITY;
    enumerate_trees(&arcs, 0, n.saturating_sub(1), parent, 0.0, &mut best);
    if n < 2 { 0.0 } else { best }
}

fn enumerate_trees(
    arcs: &[(usize, usize, f64)],
    start: usize,
    remaining: usize,
    parent: Vec<usize>,
    cost: f64,
    best: &mut f64,
) {
    if remaining == 0 {
        *best = best.min(cost);
        return;
    }
    for k in start..arcs.len() {
        if arcs.len() - k < remaining {
            break;
        }
        let (i, j, weight) = arcs[k];
        let mut next = parent.clone();
        let (a, b) = (find(&mut next, i), find(&mut next, j));
        if a == b {
            continue;
        }
        next[a] = b;
        enumerate_trees(arcs, k + 1, remaining - 1, next, cost + weight, best);
    }
}

pub fn test_empty_input(emst_fn: EmstFn) {
    let tree = emst_fn(&[]).unwrap();
    assert!(tree.arcs().is_empty());
    assert_eq!(0.0, tree.cost());
}

pub fn test_single_point(emst_fn: EmstFn) {
    let data = vec![Point::new(4.0, -2.0)];
    let tree = emst_fn(&data).unwrap();
    assert!(tree.arcs().is_empty());
    assert_eq!(0.0, tree.cost());
    assert_eq!(&data[..], tree.points());
}

pub fn test_right_triangle(emst_fn: EmstFn) {
    let data = vec![Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)];
    let tree = emst_fn(&data).unwrap();

    let arcs = tree.arcs().iter().map(|arc| arc.points()).collect::<Vec<_>>();
    assert_eq!(vec![(data[0], data[1]), (data[1], data[2])], arcs);
    assert!((tree.cost() - 7.0).abs() < TOLERANCE);
}

pub fn test_duplicate_points(emst_fn: EmstFn) {
    let data = vec![Point::new(1.0, 1.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
    let tree = emst_fn(&data).unwrap();

    assert_spanning_tree(&data, &tree);
    // The coincident pair is joined first, by a zero length arc
    assert_eq!(0.0, tree.arcs()[0].length());
    assert_eq!((0, 1), (tree.arcs()[0].source.id, tree.arcs()[0].target.id));
    assert!((tree.cost() - 2.0_f64.sqrt()).abs() < TOLERANCE);
}

pub fn test_spanning_tree(emst_fn: EmstFn) {
    for seed in 0..20 {
        for data in [random_points(seed, 25), random_grid_points(seed, 25)] {
            let tree = emst_fn(&data).unwrap();
            assert_spanning_tree(&data, &tree);
        }
    }
}

pub fn test_minimality(emst_fn: EmstFn) {
    for seed in 0..30 {
        let n = 2 + (seed as usize % 6);
        for data in [random_points(seed, n), random_grid_points(seed, n)] {
            let tree = emst_fn(&data).unwrap();
            let expected = brute_force_min_cost(&data);
            assert!(
                (tree.cost() - expected).abs() < TOLERANCE,
                "seed {seed}: got {} but the minimum is {expected}",
                tree.cost()
            );
        }
    }
    let data = random_points(99, 8);
    let tree = emst_fn(&data).unwrap();
    assert!((tree.cost() - brute_force_min_cost(&data)).abs() < TOLERANCE);
}

pub fn test_cost_consistency(emst_fn: EmstFn) {
    for seed in 0..10 {
        let data = random_points(seed, 40);
        let tree = emst_fn(&data).unwrap();
        assert_eq!(compute_cost(tree.arcs()), tree.cost());
        assert!(tree.costs_agree(TOLERANCE));
    }
}

pub fn test_determinism(emst_fn: EmstFn) {
    for seed in 0..5 {
        let data = random_grid_points(seed, 30);
        let first = emst_fn(&data).unwrap();
        let second = emst_fn(&data).unwrap();
        assert_eq!(first, second);
    }
}

pub fn test_non_finite_coordinate(emst_fn: EmstFn) {
    let data = vec![Point::new(1.0, 2.0), Point::new(f64::NAN, 0.0)];
    let result = emst_fn(&data);
    assert!(matches!(result, Err(EmstError::NonFiniteCoordinate(..))));
}
