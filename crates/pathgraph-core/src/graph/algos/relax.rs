use crate::edge::Weight;
use crate::graph::algos::RelaxationMode;
use crate::graph::matrix::AdjacencyMatrix;

/// Distance sentinel for vertices no relaxation has reached
pub const UNREACHED: Weight = Weight::MAX;

/// Distances and predecessors after relaxing from one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relaxation {
    source: usize,
    distances: Vec<Weight>,
    predecessors: Vec<Option<usize>>,
}

impl Relaxation {
    fn new(side: usize, source: usize) -> Self {
        let mut distances = vec![UNREACHED; side];
        distances[source] = 0;
        Self {
            source,
            distances,
            predecessors: vec![None; side],
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Best known distance, `None` while still at the sentinel
    pub fn distance(&self, index: usize) -> Option<Weight> {
        match self.distances[index] {
            UNREACHED => None,
            d => Some(d),
        }
    }

    pub fn predecessor(&self, index: usize) -> Option<usize> {
        self.predecessors[index]
    }

    /// Try `dist[from] + weight` as the distance of `to`.
    ///
    /// A sum that overflows, or that is not positive, never counts as an
    /// improvement.
    fn relax_edge(&mut self, from: usize, to: usize, weight: Weight) -> bool {
        let Some(candidate) = self.distances[from].checked_add(weight) else {
            return false;
        };
        if candidate < self.distances[to] && candidate > 0 {
            self.distances[to] = candidate;
            self.predecessors[to] = Some(from);
            true
        } else {
            false
        }
    }

    /// One ascending sweep over every non-source row
    fn global_pass(&mut self, matrix: &AdjacencyMatrix) -> bool {
        let source = self.source;
        let mut changed = false;
        for i in (0..matrix.side()).filter(|&i| i != source) {
            for (j, weight) in matrix.outgoing(i) {
                changed |= self.relax_edge(i, j, weight);
            }
        }
        changed
    }

    /// Dense indices from `destination` back to the source, destination first.
    ///
    /// The source alone is its own path. Any other destination still at the
    /// sentinel (or at a non-positive distance) has no path.
    pub fn path_to(&self, destination: usize) -> Option<Vec<usize>> {
        if destination == self.source {
            return Some(vec![self.source]);
        }

        let distance = self.distances[destination];
        if distance <= 0 || distance == UNREACHED {
            return None;
        }

        let mut walk = vec![destination];
        let mut current = destination;
        while current != self.source {
            // Predecessor distances strictly decrease, so this ends at the source
            current = self.predecessors[current]?;
            walk.push(current);
        }

        Some(walk)
    }
}

/// Relax distances from `source` over the matrix.
///
/// Phase 1 relaxes the source's direct neighbours. Phase 2 sweeps every
/// `(i, j)` with `i != source` in ascending order, once for
/// [`RelaxationMode::TwoPhase`] or until nothing improves for
/// [`RelaxationMode::Converged`].
#[tracing::instrument(skip(matrix), fields(side = matrix.side()))]
pub fn relax(matrix: &AdjacencyMatrix, source: usize, mode: RelaxationMode) -> Relaxation {
    let mut state = Relaxation::new(matrix.side(), source);

    for (i, weight) in matrix.outgoing(source) {
        state.relax_edge(source, i, weight);
    }

    match mode {
        RelaxationMode::TwoPhase => {
            state.global_pass(matrix);
        }
        RelaxationMode::Converged => {
            let mut passes = 1;
            while state.global_pass(matrix) && passes < matrix.side() {
                passes += 1;
            }
            tracing::trace!(passes, "relaxation_converged");
        }
    }

    state
}
