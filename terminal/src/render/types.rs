#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub chars_per_cell: CharDimensions,
}

impl RenderConfig {
    pub fn new(chars_per_cell: CharDimensions) -> Self {
        Self { chars_per_cell }
    }
}

/// How many terminal characters one grid cell takes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CharDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self {
            horizontal: horizontal.max(1),
            vertical: vertical.max(1),
        }
    }
}

impl Default for CharDimensions {
    fn default() -> Self {
        // Terminal cells are roughly twice as tall as wide
        Self::new(2, 1)
    }
}

/// Character canvas addressed in grid cells
pub struct CharGrid {
    grid: Vec<Vec<char>>,
    cells_wide: usize,
    cells_high: usize,
    char_dims: CharDimensions,
}

impl CharGrid {
    pub fn new(cells_wide: usize, cells_high: usize, char_dims: CharDimensions) -> Self {
        let grid = vec![vec![' '; cells_wide * char_dims.horizontal]; cells_high * char_dims.vertical];
        Self {
            grid,
            cells_wide,
            cells_high,
            char_dims,
        }
    }

    pub fn set_cell(&mut self, x: usize, y: usize, pattern: &CharPattern) {
        if x >= self.cells_wide || y >= self.cells_high {
            return;
        }
        let start_x = x * self.char_dims.horizontal;
        let start_y = y * self.char_dims.vertical;

        for (dy, row) in pattern.chars.iter().enumerate() {
            for (dx, &ch) in row.iter().enumerate() {
                if let Some(cell) = self.grid.get_mut(start_y + dy).and_then(|r| r.get_mut(start_x + dx)) {
                    *cell = ch;
                }
            }
        }
    }

    /// Write a single character at physical (character) coordinates.
    pub fn set_char(&mut self, col: usize, row: usize, ch: char) {
        if let Some(cell) = self.grid.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = ch;
        }
    }

    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    pub fn physical_width(&self) -> usize {
        self.cells_wide * self.char_dims.horizontal
    }

    pub fn physical_height(&self) -> usize {
        self.cells_high * self.char_dims.vertical
    }

    pub fn into_lines(self) -> Vec<String> {
        self.grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharPattern {
    pub chars: Vec<Vec<char>>,
}

impl CharPattern {
    pub fn new(chars: Vec<Vec<char>>) -> Self {
        Self { chars }
    }

    pub fn single(ch: char, dims: CharDimensions) -> Self {
        Self {
            chars: vec![vec![ch; dims.horizontal]; dims.vertical],
        }
    }

    pub fn empty(dims: CharDimensions) -> Self {
        Self::single(' ', dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_size_scales_with_dimensions() {
        let grid = CharGrid::new(10, 4, CharDimensions::new(2, 1));
        assert_eq!(grid.physical_width(), 20);
        assert_eq!(grid.physical_height(), 4);
    }

    #[test]
    fn out_of_range_cells_are_ignored() {
        let mut grid = CharGrid::new(2, 2, CharDimensions::new(1, 1));
        grid.set_cell(5, 0, &CharPattern::single('#', CharDimensions::new(1, 1)));
        grid.set_char(9, 9, '#');
        assert!(grid.into_lines().iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn zero_dimensions_are_clamped() {
        assert_eq!(CharDimensions::new(0, 0), CharDimensions::new(1, 1));
    }
}
