//! Square adjacency matrix over dense vertex indices

use serde::Serialize;

use crate::edge::Weight;

/// `n x n` weight grid; a zero cell means "no edge"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix {
    side: usize,
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Zero-filled matrix with `side` rows and columns
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![0; side * side],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Raw cell value, zero when there is no edge
    pub fn get(&self, row: usize, col: usize) -> Weight {
        self.cells[row * self.side + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, weight: Weight) {
        self.cells[row * self.side + col] = weight;
    }

    /// Edge weight if the cell holds one
    pub fn edge(&self, row: usize, col: usize) -> Option<Weight> {
        match self.get(row, col) {
            0 => None,
            weight => Some(weight),
        }
    }

    /// Outgoing edges of `row` as `(col, weight)` in ascending column order
    pub fn outgoing(&self, row: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.row(row)
            .iter()
            .enumerate()
            .filter(|(_, weight)| **weight != 0)
            .map(|(col, weight)| (col, *weight))
    }

    pub fn row(&self, row: usize) -> &[Weight] {
        &self.cells[row * self.side..(row + 1) * self.side]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        // chunks_exact panics on a zero chunk size
        let side = self.side.max(1);
        self.cells.chunks_exact(side)
    }
}
