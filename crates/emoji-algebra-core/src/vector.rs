//! Fixed-dimension embedding vector with in-place arithmetic.
//!
//! All binary operations require operands of equal dimension. A mismatch is a
//! programming error and panics; it is never reported through `Result`.
//!
//! `distance` (Euclidean) is the canonical metric for matching and display.
//! `distance_manhattan` is kept for diagnostics only and must not be mixed
//! into nearest-neighbour comparisons.

/// Default embedding dimension of the emoji dataset.
pub const DEFAULT_DIMENSION: usize = 300;

/// A dense `f32` embedding vector.
///
/// `Clone` produces an independent copy of the component storage, so
/// mutating a clone never affects the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    components: Vec<f32>,
}

impl Vector {
    /// Wrap raw components.
    #[inline]
    pub fn new(components: Vec<f32>) -> Self {
        Self { components }
    }

    /// A zero vector of the given dimension.
    #[inline]
    pub fn zeros(dimension: usize) -> Self {
        Self {
            components: vec![0.0; dimension],
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.components
    }

    /// Consume the vector and return its components.
    #[inline]
    pub fn into_inner(self) -> Vec<f32> {
        self.components
    }

    /// Multiply every component by `factor`.
    pub fn scale_in_place(&mut self, factor: f32) {
        for val in &mut self.components {
            *val *= factor;
        }
    }

    /// Multiply-accumulate: `self[i] += other[i] * factor`.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn add_scaled_in_place(&mut self, other: &Vector, factor: f32) {
        self.assert_same_dimension(other);
        for (val, o) in self.components.iter_mut().zip(&other.components) {
            *val += o * factor;
        }
    }

    /// Equivalent to `add_scaled_in_place(other, 1.0)`.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn add_in_place(&mut self, other: &Vector) {
        self.assert_same_dimension(other);
        for (val, o) in self.components.iter_mut().zip(&other.components) {
            *val += o;
        }
    }

    /// Sum of absolute component differences (L1).
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn distance_manhattan(&self, other: &Vector) -> f32 {
        self.assert_same_dimension(other);
        self.components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| (a - b).abs())
            .sum()
    }

    /// Sum of squared component differences.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn distance_squared_euclidean(&self, other: &Vector) -> f32 {
        self.assert_same_dimension(other);
        self.components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }

    /// Euclidean distance. The comparison metric for nearest-neighbour search.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    #[inline]
    pub fn distance(&self, other: &Vector) -> f32 {
        self.distance_squared_euclidean(other).sqrt()
    }

    /// Euclidean norm, `sqrt(sum(c^2))`.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.components.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    #[inline]
    fn assert_same_dimension(&self, other: &Vector) {
        assert_eq!(
            self.components.len(),
            other.components.len(),
            "vector dimension mismatch: {} vs {}",
            self.components.len(),
            other.components.len()
        );
    }
}

impl From<Vec<f32>> for Vector {
    fn from(components: Vec<f32>) -> Self {
        Self::new(components)
    }
}
