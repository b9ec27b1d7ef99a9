//! In-memory GDP instance.
//!
//! An [`Instance`] is built once from already-parsed data and is read-only
//! afterwards, so it can be shared freely across evaluation threads.

use crate::error::InstanceError;

/// Nodes with pairwise distances, costs and capacities, plus the cost
/// budget `K` and the capacity floor `B`.
///
/// Distances are stored row-major in one flat buffer. The diagonal is
/// never read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    n: usize,
    distances: Vec<f64>,
    costs: Vec<u64>,
    capacities: Vec<u64>,
    budget: u64,
    capacity_floor: u64,
}

impl Instance {
    /// Builds an instance from a full distance matrix.
    ///
    /// The matrix must be square and symmetric with finite, non-negative
    /// off-diagonal entries; `costs` and `capacities` must have one entry
    /// per node.
    pub fn new(
        distances: Vec<Vec<f64>>,
        costs: Vec<u64>,
        capacities: Vec<u64>,
        budget: u64,
        capacity_floor: u64,
    ) -> Result<Self, InstanceError> {
        let n = distances.len();
        if n == 0 {
            return Err(InstanceError::Empty);
        }
        for (row, values) in distances.iter().enumerate() {
            if values.len() != n {
                return Err(InstanceError::DistanceShape {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                let (forward, backward) = (distances[i][j], distances[j][i]);
                if !forward.is_finite() || forward < 0.0 {
                    return Err(InstanceError::InvalidDistance { i, j, value: forward });
                }
                if forward != backward {
                    return Err(InstanceError::Asymmetric {
                        i,
                        j,
                        forward,
                        backward,
                    });
                }
            }
        }
        check_len("costs", costs.len(), n)?;
        check_len("capacities", capacities.len(), n)?;

        Ok(Self {
            n,
            distances: distances.into_iter().flatten().collect(),
            costs,
            capacities,
            budget,
            capacity_floor,
        })
    }

    /// Builds an instance from 1-based `(u, v, d)` edge triples.
    ///
    /// Each unordered pair needs to appear once; pairs that never appear
    /// get distance 0. A later triple for the same pair overwrites an
    /// earlier one.
    ///
    /// ```
    /// use gdp_nsga2::gdp::Instance;
    ///
    /// let inst = Instance::from_edges(3, &[(1, 2, 4.0), (2, 3, 1.5)], vec![1; 3], vec![2; 3], 5, 2)
    ///     .unwrap();
    /// assert_eq!(inst.distance(1, 0), 4.0);
    /// assert_eq!(inst.distance(0, 2), 0.0);
    /// ```
    pub fn from_edges(
        n: usize,
        edges: &[(usize, usize, f64)],
        costs: Vec<u64>,
        capacities: Vec<u64>,
        budget: u64,
        capacity_floor: u64,
    ) -> Result<Self, InstanceError> {
        if n == 0 {
            return Err(InstanceError::Empty);
        }
        let mut matrix = vec![vec![0.0; n]; n];
        for &(u, v, d) in edges {
            for node in [u, v] {
                if node == 0 || node > n {
                    return Err(InstanceError::NodeOutOfRange { node, n });
                }
            }
            matrix[u - 1][v - 1] = d;
            matrix[v - 1][u - 1] = d;
        }
        Self::new(matrix, costs, capacities, budget, capacity_floor)
    }

    /// Number of nodes.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Distance between 0-based nodes `i` and `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.n + j]
    }

    pub fn cost(&self, i: usize) -> u64 {
        self.costs[i]
    }

    pub fn capacity(&self, i: usize) -> u64 {
        self.capacities[i]
    }

    pub fn costs(&self) -> &[u64] {
        &self.costs
    }

    pub fn capacities(&self) -> &[u64] {
        &self.capacities
    }

    /// Maximum total cost `K`.
    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Minimum total capacity `B`.
    pub fn capacity_floor(&self) -> u64 {
        self.capacity_floor
    }
}

fn check_len(field: &'static str, len: usize, expected: usize) -> Result<(), InstanceError> {
    if len == expected {
        Ok(())
    } else {
        Err(InstanceError::LengthMismatch {
            field,
            len,
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(n: usize, d: f64) -> Vec<Vec<f64>> {
        (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { d }).collect())
            .collect()
    }

    #[test]
    fn test_new_accepts_valid_instance() {
        let inst = Instance::new(square(3, 2.5), vec![1, 2, 3], vec![4, 5, 6], 4, 9).unwrap();
        assert_eq!(inst.n(), 3);
        assert_eq!(inst.distance(0, 2), 2.5);
        assert_eq!(inst.cost(1), 2);
        assert_eq!(inst.capacity(2), 6);
        assert_eq!(inst.budget(), 4);
        assert_eq!(inst.capacity_floor(), 9);
    }

    #[test]
    fn test_single_node_instance() {
        let inst = Instance::new(vec![vec![0.0]], vec![1], vec![1], 1, 0).unwrap();
        assert_eq!(inst.n(), 1);
    }

    #[test]
    fn test_diagonal_is_ignored() {
        let mut m = square(2, 1.0);
        m[0][0] = f64::NAN;
        m[1][1] = -4.0;
        assert!(Instance::new(m, vec![0, 0], vec![0, 0], 0, 0).is_ok());
    }

    // ---- Rejections ----

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            Instance::new(vec![], vec![], vec![], 0, 0),
            Err(InstanceError::Empty)
        );
    }

    #[test]
    fn test_ragged_matrix_rejected() {
        let mut m = square(3, 1.0);
        m[1].pop();
        assert_eq!(
            Instance::new(m, vec![1; 3], vec![1; 3], 1, 1),
            Err(InstanceError::DistanceShape {
                row: 1,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn test_asymmetric_rejected() {
        let mut m = square(3, 1.0);
        m[2][0] = 7.0;
        let err = Instance::new(m, vec![1; 3], vec![1; 3], 1, 1).unwrap_err();
        assert!(matches!(err, InstanceError::Asymmetric { i: 0, j: 2, .. }));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let mut m = square(2, 1.0);
        m[0][1] = -1.0;
        m[1][0] = -1.0;
        let err = Instance::new(m, vec![1; 2], vec![1; 2], 1, 1).unwrap_err();
        assert!(matches!(err, InstanceError::InvalidDistance { i: 0, j: 1, .. }));
    }

    #[test]
    fn test_vector_length_mismatch_rejected() {
        assert_eq!(
            Instance::new(square(3, 1.0), vec![1; 2], vec![1; 3], 1, 1),
            Err(InstanceError::LengthMismatch {
                field: "costs",
                len: 2,
                expected: 3
            })
        );
        assert_eq!(
            Instance::new(square(3, 1.0), vec![1; 3], vec![1; 4], 1, 1),
            Err(InstanceError::LengthMismatch {
                field: "capacities",
                len: 4,
                expected: 3
            })
        );
    }

    // ---- Edge list ----

    #[test]
    fn test_from_edges_is_symmetric() {
        let inst =
            Instance::from_edges(3, &[(1, 3, 2.0), (3, 2, 5.0)], vec![1; 3], vec![1; 3], 2, 1)
                .unwrap();
        assert_eq!(inst.distance(0, 2), 2.0);
        assert_eq!(inst.distance(2, 0), 2.0);
        assert_eq!(inst.distance(1, 2), 5.0);
        assert_eq!(inst.distance(0, 1), 0.0);
    }

    #[test]
    fn test_from_edges_node_out_of_range() {
        assert_eq!(
            Instance::from_edges(2, &[(1, 3, 1.0)], vec![1; 2], vec![1; 2], 1, 1),
            Err(InstanceError::NodeOutOfRange { node: 3, n: 2 })
        );
        assert_eq!(
            Instance::from_edges(2, &[(0, 1, 1.0)], vec![1; 2], vec![1; 2], 1, 1),
            Err(InstanceError::NodeOutOfRange { node: 0, n: 2 })
        );
    }
}
