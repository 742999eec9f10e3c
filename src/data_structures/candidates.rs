use std::collections::{BTreeMap, HashSet};
use std::fmt::Debug;
use num_traits::Float;

use crate::graph::VertexId;
use crate::path::Path;

/// Pool of candidate paths not yet accepted into the K-shortest result.
///
/// Candidates are ordered by total cost, and equal costs are ordered by the
/// lexicographic vertex sequence of the path. A fingerprint set (the vertex
/// sequence) rejects a path that is already pooled.
#[derive(Debug)]
pub struct CandidateSet<W>
where
    W: Float + Debug + Copy + Ord,
{
    ordered: BTreeMap<(W, Vec<VertexId>), Path<W>>,
    fingerprints: HashSet<Vec<VertexId>>,
}

impl<W> Default for CandidateSet<W>
where
    W: Float + Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> CandidateSet<W>
where
    W: Float + Debug + Copy + Ord,
{
    pub fn new() -> Self {
        CandidateSet {
            ordered: BTreeMap::new(),
            fingerprints: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn contains(&self, path: &Path<W>) -> bool {
        self.fingerprints.contains(&path.vertices())
    }

    /// Inserts a candidate, returning false if an equal path is already pooled
    pub fn insert(&mut self, path: Path<W>) -> bool {
        let fingerprint = path.vertices();
        if !self.fingerprints.insert(fingerprint.clone()) {
            return false;
        }
        self.ordered.insert((path.total_cost(), fingerprint), path);
        true
    }

    /// Removes and returns the cheapest candidate
    pub fn pop_min(&mut self) -> Option<Path<W>> {
        let ((_, fingerprint), path) = self.ordered.pop_first()?;
        self.fingerprints.remove(&fingerprint);
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use ordered_float::OrderedFloat;

    fn path(vertices: &[VertexId], w: f64) -> Path<OrderedFloat<f64>> {
        let edges = vertices
            .windows(2)
            .map(|pair| Edge::new(pair[0], pair[1], OrderedFloat(w)))
            .collect();
        Path::from_edges(edges).unwrap()
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut set = CandidateSet::new();
        assert!(set.insert(path(&[0, 1, 3], 1.0)));
        assert!(!set.insert(path(&[0, 1, 3], 1.0)));
        assert!(set.contains(&path(&[0, 1, 3], 5.0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_pops_by_cost_then_vertex_sequence() {
        let mut set = CandidateSet::new();
        set.insert(path(&[0, 2, 3], 1.5)); // cost 3
        set.insert(path(&[0, 1, 2, 3], 1.0)); // cost 3
        set.insert(path(&[0, 3], 1.0)); // cost 1

        assert_eq!(set.pop_min().unwrap().vertices(), vec![0, 3]);
        assert_eq!(set.pop_min().unwrap().vertices(), vec![0, 1, 2, 3]);
        let last = set.pop_min().unwrap();
        assert_eq!(last.vertices(), vec![0, 2, 3]);
        assert!(set.pop_min().is_none());
        // A popped path may be pooled again
        assert!(set.insert(last));
    }
}
