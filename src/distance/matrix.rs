//! Dense distance matrix.

use crate::models::{GeoPoint, Stop};

/// A dense n×n distance matrix stored in row-major order, in kilometers.
///
/// Index 0 is the start point; indices `1..=n` are the stops in input order.
/// Built once per optimization run and read-only afterwards.
///
/// # Examples
///
/// ```
/// use u_delivery::models::GeoPoint;
/// use u_delivery::distance::DistanceMatrix;
///
/// let start = GeoPoint::new(0.0, 0.0).unwrap();
/// let stops = [
///     GeoPoint::new(0.0, 1.0).unwrap(),
///     GeoPoint::new(1.0, 1.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_points(&start, &stops);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 0), 0.0);
/// assert_eq!(dm.get(0, 1), dm.get(1, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a great-circle distance matrix over `start` followed by `points`.
    pub fn from_points(start: &GeoPoint, points: &[GeoPoint]) -> Self {
        let locations: Vec<&GeoPoint> = std::iter::once(start).chain(points).collect();
        Self::from_locations(&locations)
    }

    /// Computes a great-circle distance matrix over `start` followed by the
    /// locations of `stops`.
    pub fn from_stops<T>(start: &GeoPoint, stops: &[Stop<T>]) -> Self {
        let locations: Vec<&GeoPoint> = std::iter::once(start)
            .chain(stops.iter().map(Stop::location))
            .collect();
        Self::from_locations(&locations)
    }

    fn from_locations(locations: &[&GeoPoint]) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix (stops + 1).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }

    /// Length of the open path `0 → path[0] → … → path[k-1]` (no return leg).
    ///
    /// `path` holds matrix indices; an empty path has length zero.
    pub fn path_distance(&self, path: &[usize]) -> f64 {
        let mut prev = 0;
        let mut dist = 0.0;
        for &next in path {
            dist += self.get(prev, next);
            prev = next;
        }
        dist
    }
}
