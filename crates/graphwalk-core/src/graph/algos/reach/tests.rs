use super::*;
use crate::graph::AdjacencyList;

fn two_components() -> AdjacencyList {
    AdjacencyList::from_edges(5, [(0, 1), (1, 2), (3, 4)], false).unwrap()
}

fn set(ids: &[NodeId]) -> BTreeSet<NodeId> {
    ids.iter().copied().collect()
}

#[test]
fn test_flood_fill_component() {
    let graph = two_components();

    let result = flood_fill(&graph, 0).unwrap();
    assert_eq!(result.visited, set(&[0, 1, 2]));
    assert_eq!(result.source, 0);
    assert_eq!(result.stats.expanded, 3);

    let other = flood_fill(&graph, 4).unwrap();
    assert_eq!(other.visited, set(&[3, 4]));
}

#[test]
fn test_flood_fill_isolated_node() {
    let graph = AdjacencyList::new(vec![vec![], vec![0]]).unwrap();
    let result = flood_fill(&graph, 0).unwrap();
    assert_eq!(result.visited, set(&[0]));
}

#[test]
fn test_flood_fill_follows_direction() {
    let graph = AdjacencyList::from_edges(3, [(0, 1), (2, 1)], true).unwrap();
    assert_eq!(flood_fill(&graph, 0).unwrap().visited, set(&[0, 1]));
    assert_eq!(flood_fill(&graph, 1).unwrap().visited, set(&[1]));
}

#[test]
fn test_flood_fill_is_repeatable() {
    let graph = AdjacencyList::cycle(6).unwrap();
    let first = flood_fill(&graph, 2).unwrap();
    let second = flood_fill(&graph, 2).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
}

#[test]
fn test_masked_flood_fill_stops_at_barrier() {
    // 0-1-2-3-4 path, node 2 blocked
    let graph = AdjacencyList::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)], false).unwrap();
    let mask = Mask::from_blocked(5, [2]).unwrap();

    let result = flood_fill_masked(&graph, 0, &mask).unwrap();
    assert_eq!(result.visited, set(&[0, 1]));
    assert!(!result.contains(2));
}

#[test]
fn test_masked_flood_fill_excludes_reachable_masked_nodes() {
    let graph = AdjacencyList::cycle(5).unwrap();
    let mask = Mask::from_blocked(5, [3]).unwrap();

    let result = flood_fill_masked(&graph, 0, &mask).unwrap();
    assert_eq!(result.visited, set(&[0, 1, 2, 4]));
}

#[test]
fn test_masked_source_is_still_visited() {
    let graph = AdjacencyList::cycle(4).unwrap();
    let mask = Mask::from_blocked(4, [0]).unwrap();

    let result = flood_fill_masked(&graph, 0, &mask).unwrap();
    assert_eq!(result.visited, set(&[0, 1, 2, 3]));
}

#[test]
fn test_reach_into_requires_empty_output() {
    let graph = AdjacencyList::cycle(3).unwrap();
    let mut visited = set(&[7]);

    let err = reach_into(&graph, 0, None, &SearchOptions::default(), &mut visited).unwrap_err();
    assert!(matches!(err, GraphError::EmptyOutputViolation { .. }));
    assert_eq!(visited, set(&[7]));
}

#[test]
fn test_reach_into_fills_output() {
    let graph = AdjacencyList::cycle(3).unwrap();
    let mut visited = BTreeSet::new();

    let stats = reach_into(&graph, 1, None, &SearchOptions::default(), &mut visited).unwrap();
    assert_eq!(visited, set(&[0, 1, 2]));
    assert_eq!(stats.expanded, 3);
}

#[test]
fn test_invalid_source() {
    let graph = AdjacencyList::cycle(3).unwrap();
    let err = flood_fill(&graph, 3).unwrap_err();
    assert!(matches!(
        err,
        GraphError::InvalidIndex {
            index: 3,
            bound: 3,
            ..
        }
    ));
}

#[test]
fn test_mask_size_mismatch() {
    let graph = AdjacencyList::cycle(3).unwrap();
    let mut visited = BTreeSet::new();
    let err = reach_into(
        &graph,
        0,
        Some(&Mask::open(2)),
        &SearchOptions::default(),
        &mut visited,
    )
    .unwrap_err();
    assert!(matches!(err, GraphError::InvalidIndex { .. }));
    assert!(visited.is_empty());
}

#[test]
fn test_expansion_limit() {
    let graph = AdjacencyList::cycle(10).unwrap();
    let err = reach(&graph, 0, None, &SearchOptions::with_max_expansions(4)).unwrap_err();
    assert!(matches!(err, GraphError::ExpansionLimit { limit: 4 }));

    let ok = reach(&graph, 0, None, &SearchOptions::with_max_expansions(10)).unwrap();
    assert_eq!(ok.len(), 10);
}

struct Broken;

impl Graph for Broken {
    fn neighbors(&self, _node: NodeId) -> Vec<NodeId> {
        vec![42]
    }

    fn node_count(&self) -> usize {
        2
    }
}

#[test]
fn test_out_of_range_neighbor() {
    let err = flood_fill(&Broken, 0).unwrap_err();
    assert!(matches!(
        err,
        GraphError::InvalidIndex {
            index: 42,
            bound: 2,
            ..
        }
    ));
}
