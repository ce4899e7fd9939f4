use automata_search::{
    ComparatorConfig, Error,
    search::{self, AlphaBeta, GameNode, GameTree, Minimax, SearchStrategy},
};
use rand::{SeedableRng, rngs::StdRng};

fn leaf(value: i32) -> GameNode {
    GameNode::Leaf(value)
}

#[test]
fn two_by_two_tree_scores_three() {
    let tree = GameNode::branch([
        GameNode::branch([leaf(1), leaf(2)]),
        GameNode::branch([leaf(3), leaf(4)]),
    ]);

    let mut minimax = Minimax::new();
    let mut alpha_beta = AlphaBeta::new();

    assert_eq!(minimax.evaluate(&tree, true), 3);
    assert_eq!(alpha_beta.evaluate(&tree, true, i32::MIN, i32::MAX), 3);
    assert_eq!(minimax.nodes_visited(), 7);
    assert!(alpha_beta.nodes_visited() <= minimax.nodes_visited());
}

#[test]
fn strategies_agree_across_seeds_and_shapes() {
    let shapes = [(0, 1), (1, 1), (2, 2), (3, 4), (5, 3), (7, 2)];

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        for (depth, width) in shapes {
            let tree = GameTree::generate(depth, width, -100..100, &mut rng).unwrap();

            let mut minimax = Minimax::new();
            let mut alpha_beta = AlphaBeta::new();
            let expected = minimax.search(tree.root(), true);
            let actual = alpha_beta.search(tree.root(), true);

            assert_eq!(
                expected, actual,
                "seed={seed} depth={depth} width={width}"
            );
            assert_eq!(minimax.nodes_visited(), tree.node_count());
            assert!(alpha_beta.nodes_visited() <= tree.node_count());
            if alpha_beta.cutoffs() > 0 {
                assert!(alpha_beta.nodes_visited() < tree.node_count());
            }
        }
    }
}

#[test]
fn pruning_fires_on_default_sized_trees() {
    let mut rng = StdRng::seed_from_u64(123);
    let tree = GameTree::generate(5, 3, -100..100, &mut rng).unwrap();

    let mut alpha_beta = AlphaBeta::new();
    alpha_beta.search(tree.root(), true);

    assert!(alpha_beta.cutoffs() > 0);
    assert!(alpha_beta.nodes_visited() < tree.node_count());
}

#[test]
fn seeded_runs_are_reproducible() {
    let config = ComparatorConfig::default().with_seed(77);

    let first = search::run(&config, &mut StdRng::seed_from_u64(77)).unwrap();
    let second = search::run(&config, &mut StdRng::seed_from_u64(77)).unwrap();

    assert_eq!(first.sample, second.sample);
    assert_eq!(first.outcomes[0].value, second.outcomes[0].value);
    assert_eq!(first.outcomes[1].nodes_visited, second.outcomes[1].nodes_visited);
}

#[test]
fn sample_is_capped_at_leaf_count() {
    let config = ComparatorConfig::new(2, 2).with_sample_size(50);
    let report = search::run(&config, &mut StdRng::seed_from_u64(1)).unwrap();

    assert_eq!(report.leaf_count, 4);
    assert_eq!(report.sample.len(), 4);
}

#[test]
fn invalid_configuration_is_reported() {
    let config = ComparatorConfig::default().with_leaf_range(10, -10);
    let err = search::run(&config, &mut StdRng::seed_from_u64(1)).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
}
