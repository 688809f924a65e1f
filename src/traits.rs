use crate::GridError;

/// Game engine for Game of Life on a bounded grid.
///
/// The grid does not wrap: cells on a border simply have fewer neighbours.
pub trait Engine {
    /// Create a blank `width x height` field with all cells dead.
    ///
    /// Fails with [`GridError::InvalidDimension`] when either dimension is zero.
    fn blank(width: usize, height: usize) -> Result<Self, GridError>
    where
        Self: Sized;

    /// Create a field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    ///
    /// `fill_rate` - probability of each cell starting alive, within `0.0..=1.0`
    fn random(
        width: usize,
        height: usize,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Result<Self, GridError>
    where
        Self: Sized,
    {
        use rand::{Rng, SeedableRng};
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let mut cells = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if rng.gen_bool(fill_rate) {
                    cells.push((x, y));
                }
            }
        }
        let mut result = Self::blank(width, height)?;
        result.set_cells_alive(&cells);
        Ok(result)
    }

    /// Set the given cells alive.
    ///
    /// Coordinates are zero-based `(column, row)` pairs. Out-of-bounds pairs
    /// are skipped, duplicates are harmless.
    fn set_cells_alive(&mut self, cells: &[(usize, usize)]);

    /// Advance the field by one generation.
    ///
    /// Every cell is recomputed from the pre-evolution state. Returns `true`
    /// if any cell changed; an unchanged field keeps its generation number.
    fn evolve(&mut self) -> bool;

    /// Advance up to `steps` generations, stopping once the field stabilizes.
    ///
    /// Returns the number of generations actually applied.
    fn evolve_many(&mut self, steps: u64) -> u64 {
        let mut applied = 0;
        for _ in 0..steps {
            if !self.evolve() {
                break;
            }
            applied += 1;
        }
        applied
    }

    /// Number of state-changing evolutions so far.
    fn generation(&self) -> u64;

    /// Get `(width, height)` of the field.
    fn size(&self) -> (usize, usize);

    /// Get cell state at `(x, y)`.
    fn get_cell(&self, x: usize, y: usize) -> bool;

    /// Get a snapshot of the field as column-major nested vectors, so that
    /// `get_cells()[x][y]` is the cell at column `x`, row `y`.
    fn get_cells(&self) -> Vec<Vec<bool>>;

    /// Total number of alive cells in the field.
    fn population(&self) -> usize;
}
