use std::collections::VecDeque;

use crate::graph::matrix::AdjacencyMatrix;

/// Breadth-first search from dense index 0 along outgoing edges.
///
/// Returns the visited marker for every dense index. An empty matrix yields
/// an empty vector.
pub fn reachable_from_root(matrix: &AdjacencyMatrix) -> Vec<bool> {
    let n = matrix.side();
    let mut visited = vec![false; n];
    if n == 0 {
        return visited;
    }

    let mut queue = VecDeque::with_capacity(n);

    visited[0] = true;
    queue.push_back(0);

    while let Some(current) = queue.pop_front() {
        for (next, _) in matrix.outgoing(current) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    visited
}

/// Lowest dense index the root cannot reach, or `None` when every vertex
/// was reached
pub fn first_unreached(matrix: &AdjacencyMatrix) -> Option<usize> {
    reachable_from_root(matrix).iter().position(|seen| !seen)
}
