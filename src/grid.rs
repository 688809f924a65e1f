use tracing::{debug, trace};

use crate::{Engine, GridError};

/// Full-scan double-buffered field.
///
/// The next generation is built into a scratch buffer and swapped in on
/// commit, so neighbour counts always read the pre-evolution state.
#[derive(Debug)]
pub struct GridEngine {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
    generation: u64,
}

impl GridEngine {
    fn get(&self, x: usize, y: usize) -> bool {
        self.cells_curr[x + y * self.width]
    }

    fn count_neibs(&self, x: usize, y: usize) -> usize {
        // A border cell has no neighbours past the border; a diagonal
        // neighbour exists only when both of its orthogonal directions do.
        let has_n = y > 0;
        let has_e = x + 1 < self.width;
        let has_s = y + 1 < self.height;
        let has_w = x > 0;
        (has_n && self.get(x, y - 1)) as usize
            + (has_n && has_e && self.get(x + 1, y - 1)) as usize
            + (has_e && self.get(x + 1, y)) as usize
            + (has_s && has_e && self.get(x + 1, y + 1)) as usize
            + (has_s && self.get(x, y + 1)) as usize
            + (has_s && has_w && self.get(x - 1, y + 1)) as usize
            + (has_w && self.get(x - 1, y)) as usize
            + (has_n && has_w && self.get(x - 1, y - 1)) as usize
    }
}

impl Engine for GridEngine {
    fn blank(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        debug!(width, height, "created blank field");
        let size = width * height;
        Ok(Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            width,
            height,
            generation: 0,
        })
    }

    fn set_cells_alive(&mut self, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            if x < self.width && y < self.height {
                self.cells_curr[x + y * self.width] = true;
            }
        }
    }

    fn evolve(&mut self) -> bool {
        let mut changed = false;
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.cells_curr[x + y * self.width];
                let neibs = self.count_neibs(x, y);
                let next = if alive {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                changed |= next != alive;
                self.cells_next[x + y * self.width] = next;
            }
        }
        if changed {
            std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
            self.generation += 1;
            trace!(generation = self.generation, "committed evolution");
        }
        changed
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn get_cell(&self, x: usize, y: usize) -> bool {
        self.get(x, y)
    }

    fn get_cells(&self) -> Vec<Vec<bool>> {
        (0..self.width)
            .map(|x| (0..self.height).map(|y| self.get(x, y)).collect())
            .collect()
    }

    fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&cell| cell).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(width: usize, height: usize) -> GridEngine {
        let mut field = GridEngine::blank(width, height).unwrap();
        let cells: Vec<_> = (0..width)
            .flat_map(|x| (0..height).map(move |y| (x, y)))
            .collect();
        field.set_cells_alive(&cells);
        field
    }

    #[test]
    fn neib_counts_on_full_3x3() {
        let field = full(3, 3);
        assert_eq!(field.count_neibs(0, 0), 3);
        assert_eq!(field.count_neibs(2, 0), 3);
        assert_eq!(field.count_neibs(1, 0), 5);
        assert_eq!(field.count_neibs(0, 1), 5);
        assert_eq!(field.count_neibs(1, 1), 8);
    }

    #[test]
    fn neib_counts_on_degenerate_strips() {
        let column = full(1, 3);
        assert_eq!(column.count_neibs(0, 0), 1);
        assert_eq!(column.count_neibs(0, 1), 2);

        let row = full(3, 1);
        assert_eq!(row.count_neibs(1, 0), 2);
        assert_eq!(row.count_neibs(2, 0), 1);

        let single = full(1, 1);
        assert_eq!(single.count_neibs(0, 0), 0);
    }
}
