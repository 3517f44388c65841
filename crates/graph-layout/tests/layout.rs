//! End-to-end layout scenarios and store properties.

use force_graph_layout::*;
use proptest::prelude::*;
use std::collections::HashSet;

/// `count` nodes of mass 10 at the origin, every pair connected with a rest
/// distance of 10
fn complete_graph(count: u32) -> InMemoryGraph<Particle<u32>> {
    let nodes = (0..count).map(|id| Particle::new(id, 10.0));
    let mut connections = Vec::new();
    for lhs in 0..count {
        for rhs in lhs + 1..count {
            connections.push(Connection::new(lhs, rhs, 10.0));
        }
    }
    InMemoryGraph::from_nodes(nodes, connections)
}

fn max_pairwise_distance<G: LayoutGraph>(graph: &G) -> f64 {
    let mut max: f64 = 0.0;
    for node in graph.nodes() {
        for other in graph.nodes_after(node.id()).unwrap() {
            max = max.max(node.distance_to(&other));
        }
    }
    max
}

#[test_log::test]
fn layout_produces_a_balanced_graph() {
    let mut graph = complete_graph(4);
    let times = graph.len() * 10;
    let stats = graph.layout(times, DEFAULT_GRAVITY_CONSTANT, DEFAULT_FORCE_CONSTANT);

    assert_eq!(stats.iterations, 40);
    assert_eq!(stats.last.repulsions, 6);
    assert!(max_pairwise_distance(&graph) < 50.0);
    // Coincident starts separate along the diagonal
    for node in graph.iter() {
        assert_eq!(node.x, node.y);
    }
}

#[test_log::test]
fn layout_engine_produces_a_balanced_graph() {
    let mut graph = complete_graph(4);
    ForceLayout::new(40).layout(&mut graph);
    assert!(max_pairwise_distance(&graph) < 50.0);
}

#[test_log::test]
fn equilibrium_does_not_diverge() {
    let mut graph = complete_graph(4);
    graph.layout(40, DEFAULT_GRAVITY_CONSTANT, DEFAULT_FORCE_CONSTANT);

    for _ in 0..50 {
        let before = graph.nodes();
        graph.simulate(DEFAULT_GRAVITY_CONSTANT, DEFAULT_FORCE_CONSTANT);
        for (old, new) in before.iter().zip(graph.nodes()) {
            assert!((old.x - new.x).abs() <= 5, "{old} moved to {new}");
            assert!((old.y - new.y).abs() <= 5, "{old} moved to {new}");
        }
        assert!(max_pairwise_distance(&graph) < 50.0);
    }
}

#[test_log::test]
fn separated_chain_settles_near_origin() {
    let nodes = (0..5).map(|id| Particle::new(id, 5.0).with_position(id as i64 * 40 - 80, 7));
    let connections = (0..4).map(|id| Connection::new(id, id + 1, 20.0)).collect();
    let mut graph = InMemoryGraph::from_nodes(nodes, connections);

    graph.layout(100, DEFAULT_GRAVITY_CONSTANT, DEFAULT_FORCE_CONSTANT);

    for node in graph.iter() {
        assert!(node.x.abs() < 1_000 && node.y.abs() < 1_000, "{node} escaped");
    }
}

#[test_log::test]
fn petgraph_import_lays_out() {
    let mut source = petgraph::graph::UnGraph::<f64, f64>::new_undirected();
    let nodes: Vec<_> = (0..4).map(|_| source.add_node(10.0)).collect();
    for (index, &lhs) in nodes.iter().enumerate() {
        for &rhs in &nodes[index + 1..] {
            source.add_edge(lhs, rhs, 10.0);
        }
    }

    let mut graph = InMemoryGraph::from(&source);
    let stats = ForceLayout::new(40).layout(&mut graph);

    assert_eq!(stats.last.skipped, 0);
    assert_eq!(stats.last.repulsions, 6);
    assert!(max_pairwise_distance(&graph) < 50.0);
}

fn arb_particles() -> impl Strategy<Value = Vec<Particle<u16>>> {
    proptest::collection::vec((any::<u16>(), 1.0..10.0f64, -100..100i64, -100..100i64), 1..24)
        .prop_map(|nodes| {
            nodes
                .into_iter()
                .map(|(id, mass, x, y)| Particle::new(id, mass).with_position(x, y))
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every unordered pair is pushed exactly once per step
    #[test]
    fn repulsion_visits_each_pair_once(particles in arb_particles()) {
        let mut graph = InMemoryGraph::from_nodes(particles, Vec::new());
        let count = graph.len();
        let stats = graph.simulate(DEFAULT_GRAVITY_CONSTANT, DEFAULT_FORCE_CONSTANT);
        prop_assert_eq!(stats.repulsions, count * (count - 1) / 2);
        prop_assert_eq!(graph.len(), count);
    }

    /// `nodes_after` walks the fixed order, and together with each node it
    /// covers the whole graph
    #[test]
    fn nodes_after_follows_order(particles in arb_particles()) {
        let graph = InMemoryGraph::from_nodes(particles, Vec::new());
        let ids = graph.ids();
        let mut seen = HashSet::new();
        for (index, id) in ids.iter().enumerate() {
            let after: Vec<u16> = graph
                .nodes_after(id)
                .unwrap()
                .into_iter()
                .map(|node| node.id)
                .collect();
            prop_assert_eq!(&after[..], &ids[index + 1..]);
            seen.insert(*id);
            seen.extend(after);
        }
        prop_assert_eq!(seen.len(), ids.len());
        prop_assert_eq!(graph.nodes_after(ids.last().unwrap()), Some(Vec::new()));
    }

    /// Replacing a node only changes that node
    #[test]
    fn replace_touches_one_slot(particles in arb_particles(), pick in any::<prop::sample::Index>(), x in any::<i64>()) {
        let mut graph = InMemoryGraph::from_nodes(particles, Vec::new());
        let before = graph.nodes();
        let target = pick.index(before.len());
        let id = before[target].id;

        let mut node = graph.node(&id).unwrap();
        node.x = x;
        graph.replace(&id, node.clone());

        let after = graph.nodes();
        prop_assert_eq!(after.len(), before.len());
        for (index, (old, new)) in before.iter().zip(&after).enumerate() {
            if index == target {
                prop_assert_eq!(new, &node);
            } else {
                prop_assert_eq!(new, old);
            }
        }
    }

    /// Stepping keeps node identities and order intact
    #[test]
    fn simulate_preserves_order(particles in arb_particles()) {
        let mut graph = InMemoryGraph::from_nodes(particles, Vec::new());
        let ids = graph.ids();
        graph.layout(3, DEFAULT_GRAVITY_CONSTANT, DEFAULT_FORCE_CONSTANT);
        prop_assert_eq!(graph.ids(), ids.clone());
        let node_ids: Vec<u16> = graph.nodes().into_iter().map(|node| node.id).collect();
        prop_assert_eq!(node_ids, ids);
    }
}
