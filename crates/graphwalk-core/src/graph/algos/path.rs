//! Path reconstruction from predecessor links

use crate::graph::types::NodeId;

/// Walk predecessors from `reached` until a node with no predecessor (the
/// source). The returned sequence starts at `reached` and ends at the source.
pub fn reconstruct_path(reached: NodeId, predecessors: &[Option<NodeId>]) -> Vec<NodeId> {
    let mut nodes = vec![reached];
    let mut current = reached;
    while let Some(pred) = predecessors.get(current).copied().flatten() {
        nodes.push(pred);
        current = pred;
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_chain() {
        // 0 <- 1 <- 2 <- 3
        let preds = vec![None, Some(0), Some(1), Some(2)];
        assert_eq!(reconstruct_path(3, &preds), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_reconstruct_source_only() {
        let preds = vec![None, Some(0)];
        assert_eq!(reconstruct_path(0, &preds), vec![0]);
    }

    #[test]
    fn test_reconstruct_branching_tree() {
        let preds = vec![None, Some(0), Some(0), Some(2), Some(1)];
        assert_eq!(reconstruct_path(4, &preds), vec![4, 1, 0]);
        assert_eq!(reconstruct_path(3, &preds), vec![3, 2, 0]);
    }
}
