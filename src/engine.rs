use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Canonical enumeration order. The greedy search walks candidate moves
    /// in exactly this order and breaks ties toward the earliest entry, so
    /// the order is observable behavior.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];
}

pub type Tile = u64;
pub type Score = u64;

/// A square board of tile values. A value of 0 marks an empty cell; any
/// positive value is a tile. Squareness is enforced at construction, so
/// every `Grid` handed to [`shift`] is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    /// Builds a grid from its rows. Rejects empty input and any row whose
    /// length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, String> {
        if rows.is_empty() {
            return Err(String::from("grid must have at least one row"));
        }
        let size = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(format!(
                "grid must be square: {} rows but found a row of length {}",
                size,
                row.len()
            ));
        }
        Ok(Grid { rows })
    }

    /// An all-zero grid of the given side length.
    pub fn empty(size: usize) -> Result<Self, String> {
        Grid::from_rows(vec![vec![0; size]; size])
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.rows[row][col]
    }

    pub fn count_empty(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&tile| tile == 0)
            .count()
    }

    pub fn max_tile(&self) -> Tile {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn transpose(&self) -> Grid {
        let size = self.size();
        let rows = (0..size)
            .map(|col| (0..size).map(|row| self.rows[row][col]).collect())
            .collect();
        Grid { rows }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|tile| format!("{:>6}", tile)).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

/// Slides every line of `grid` toward `direction`, merging adjacent equal
/// tiles. The input is left untouched; the result is a freshly allocated
/// grid of the same dimension.
pub fn shift(grid: &Grid, direction: Move) -> Grid {
    match direction {
        Move::Left | Move::Right => shift_rows(grid, direction),
        Move::Up | Move::Down => shift_cols(grid, direction),
    }
}

fn shift_rows(grid: &Grid, direction: Move) -> Grid {
    let rows = grid
        .rows
        .iter()
        .map(|row| shift_line(row, direction))
        .collect();
    Grid { rows }
}

fn shift_cols(grid: &Grid, direction: Move) -> Grid {
    // A column slid up is a transposed row slid left.
    let row_direction = match direction {
        Move::Up => Move::Left,
        Move::Down => Move::Right,
        _ => panic!("Trying to move left or right in shift_cols"),
    };
    shift_rows(&grid.transpose(), row_direction).transpose()
}

fn shift_line(line: &[Tile], direction: Move) -> Vec<Tile> {
    match direction {
        Move::Left | Move::Up => shift_line_forward(line),
        Move::Right | Move::Down => {
            let reversed: Vec<Tile> = line.iter().rev().copied().collect();
            let mut shifted = shift_line_forward(&reversed);
            shifted.reverse();
            shifted
        }
    }
}

/// Packs non-zero tiles against the start of the line, merges adjacent equal
/// pairs, then packs again and zero-fills the tail.
fn shift_line_forward(line: &[Tile]) -> Vec<Tile> {
    let mut packed: Vec<Tile> = line.iter().copied().filter(|&tile| tile != 0).collect();

    let mut idx = 0;
    while idx + 1 < packed.len() {
        if packed[idx] == packed[idx + 1] {
            packed[idx] *= 2;
            packed[idx + 1] = 0;
            // a merged tile never merges again within the same slide
            idx += 2;
        } else {
            idx += 1;
        }
    }

    packed.retain(|&tile| tile != 0);
    packed.resize(line.len(), 0);
    packed
}
