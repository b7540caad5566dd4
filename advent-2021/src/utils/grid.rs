//! Dense row-major 2D grid

use std::ops::{Index, IndexMut};

use advent_solver::ParseError;

/// (row, column)
pub type Pos = (usize, usize);

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const SURROUNDING: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Parse one row per non-empty line, mapping each character with `cell`.
    ///
    /// Rows must all have the same width.
    pub fn parse_with<F>(input: &str, mut cell: F) -> Result<Self, ParseError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (index, line) in input.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                continue;
            }
            let before = cells.len();
            for c in line.chars() {
                let value = cell(c)
                    .ok_or_else(|| ParseError::at_line(index, format!("unexpected cell {:?}", c)))?;
                cells.push(value);
            }
            let row_width = cells.len() - before;
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    return Err(ParseError::at_line(
                        index,
                        format!("row has {} cells, expected {}", row_width, w),
                    ));
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or_else(|| ParseError::MissingData("empty grid".into()))?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn from_fn<F>(width: usize, height: usize, mut cell: F) -> Self
    where
        F: FnMut(Pos) -> T,
    {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .map(&mut cell)
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, (row, col): Pos) -> Option<&T> {
        (row < self.height && col < self.width).then(|| &self.cells[row * self.width + col])
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    /// Up/down/left/right neighbours that lie inside the grid
    pub fn neighbors4(&self, pos: Pos) -> impl Iterator<Item = Pos> + use<T> {
        self.offsets(pos, &ORTHOGONAL)
    }

    /// All eight surrounding neighbours that lie inside the grid
    pub fn neighbors8(&self, pos: Pos) -> impl Iterator<Item = Pos> + use<T> {
        self.offsets(pos, &SURROUNDING)
    }

    fn offsets(
        &self,
        (row, col): Pos,
        deltas: &'static [(isize, isize)],
    ) -> impl Iterator<Item = Pos> + use<T> {
        let (width, height) = (self.width, self.height);
        deltas.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < height && c < width).then_some((r, c))
        })
    }
}

impl Grid<u8> {
    /// Parse a grid of decimal digits such as a height or risk map
    pub fn parse_digits(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, |c| c.to_digit(10).map(|d| d as u8))
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): Pos) -> &T {
        assert!(col < self.width, "column {} out of bounds", col);
        &self.cells[row * self.width + col]
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, (row, col): Pos) -> &mut T {
        assert!(col < self.width, "column {} out of bounds", col);
        &mut self.cells[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digits_row_major() {
        let grid = Grid::parse_digits("123\n456\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid[(1, 0)], 4);
        assert_eq!(grid.get((0, 2)), Some(&3));
        assert_eq!(grid.get((2, 0)), None);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Grid::parse_digits("123\n45\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));
    }

    #[test]
    fn rejects_non_digit() {
        assert!(Grid::parse_digits("12a\n").is_err());
    }

    #[test]
    fn corner_has_two_orthogonal_and_three_surrounding_neighbours() {
        let grid = Grid::parse_digits("000\n000\n000").unwrap();
        let mut four: Vec<_> = grid.neighbors4((0, 0)).collect();
        four.sort();
        assert_eq!(four, vec![(0, 1), (1, 0)]);
        assert_eq!(grid.neighbors8((0, 0)).count(), 3);
        assert_eq!(grid.neighbors8((1, 1)).count(), 8);
    }

    #[test]
    fn from_fn_visits_every_position() {
        let grid = Grid::from_fn(3, 2, |(r, c)| r * 10 + c);
        assert_eq!(grid.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(grid.positions().count(), 6);
    }
}
