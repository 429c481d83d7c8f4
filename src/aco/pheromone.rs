//! Pheromone matrix.

/// A dense, symmetric pheromone matrix in row-major order.
///
/// Sized like the distance matrix (`stops + 1`). Entries start at `1/n`
/// where `n` is the number of stops, and stay non-negative: evaporation
/// scales by a factor in `(0, 1]` and deposits only add.
///
/// # Examples
///
/// ```
/// use u_delivery::aco::PheromoneMatrix;
///
/// let mut tau = PheromoneMatrix::new(4);
/// assert_eq!(tau.size(), 4);
/// assert!((tau.get(1, 2) - 1.0 / 3.0).abs() < 1e-12);
///
/// tau.evaporate(0.5);
/// tau.deposit_path(&[2, 1], 0.25);
/// assert_eq!(tau.get(0, 2), tau.get(2, 0));
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates a matrix of the given size (stops + 1), initialized to `1/(size-1)`.
    pub fn new(size: usize) -> Self {
        let stops = size.saturating_sub(1).max(1);
        Self {
            data: vec![1.0 / stops as f64; size * size],
            size,
        }
    }

    /// Pheromone on edge `(from, to)`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for v in &mut self.data {
            *v *= keep;
        }
    }

    /// Adds `amount` to edge `(a, b)` and `(b, a)`.
    pub fn deposit(&mut self, a: usize, b: usize, amount: f64) {
        self.data[a * self.size + b] += amount;
        if a != b {
            self.data[b * self.size + a] += amount;
        }
    }

    /// Deposits `amount` on every edge of the open path `0 → path[0] → …`.
    pub fn deposit_path(&mut self, path: &[usize], amount: f64) {
        let mut prev = 0;
        for &next in path {
            self.deposit(prev, next, amount);
            prev = next;
        }
    }
}
