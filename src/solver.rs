// N-Queens solution counter
// Backtracking search over row, column and diagonal bitmasks

use log::debug;

use crate::error::{Error, Result};

/// Largest board the 64-bit masks can encode.
///
/// Both diagonal families use bit indices up to `2 * size - 2`, so that index
/// has to stay below 64.
pub const MAX_SIZE: u32 = 32;

/// Counts the ways to finish a placement from `row` down to `size - 1`.
///
/// `cols` marks occupied columns. `diags` is indexed by `row + column` and
/// `anti_diags` by `size - 1 - row + column`, so queens sharing a diagonal
/// land on the same bit. Rows before `row` are assumed to already hold
/// non-attacking queens consistent with the masks.
///
/// The caller must keep `size <= MAX_SIZE`; larger boards overflow the shifts.
/// Use [`Placement::empty`] or [`count_solutions`] for a checked entry point.
pub fn queens(size: u32, row: u32, cols: u64, diags: u64, anti_diags: u64) -> u64 {
    debug_assert!(size <= MAX_SIZE, "board size {size} exceeds {MAX_SIZE}");
    if row == size {
        return 1;
    }
    let mut count = 0u64;
    for i in 0..size {
        let col = 1u64 << i;
        let diag = 1u64 << (row + i);
        let anti_diag = 1u64 << (size - 1 - row + i);
        if col & cols == 0 && diag & diags == 0 && anti_diag & anti_diags == 0 {
            count += queens(size, row + 1, cols | col, diags | diag, anti_diags | anti_diag);
        }
    }
    count
}

/// A partial, non-attacking placement: queens sit in rows `0..row`.
///
/// Values are `Copy`; extending a placement returns a new one and leaves the
/// original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    size: u32,
    row: u32,
    cols: u64,
    diags: u64,
    anti_diags: u64,
}

impl Placement {
    /// An empty board of the given size.
    pub fn empty(size: u32) -> Result<Self> {
        if size > MAX_SIZE {
            return Err(Error::SizeTooLarge {
                size,
                max: MAX_SIZE,
            });
        }
        Ok(Self {
            size,
            row: 0,
            cols: 0,
            diags: 0,
            anti_diags: 0,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of queens placed so far, which is also the next row to fill.
    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn is_complete(&self) -> bool {
        self.row == self.size
    }

    fn bits(&self, column: u32) -> (u64, u64, u64) {
        (
            1u64 << column,
            1u64 << (self.row + column),
            1u64 << (self.size - 1 - self.row + column),
        )
    }

    /// Whether a queen could go in `column` of the next row.
    pub fn is_free(&self, column: u32) -> bool {
        if self.is_complete() || column >= self.size {
            return false;
        }
        let (col, diag, anti_diag) = self.bits(column);
        self.cols & col == 0 && self.diags & diag == 0 && self.anti_diags & anti_diag == 0
    }

    /// Puts a queen in `column` of the next row, or `None` if that square is
    /// attacked, off the board, or the board is already full.
    pub fn place(&self, column: u32) -> Option<Self> {
        if !self.is_free(column) {
            return None;
        }
        let (col, diag, anti_diag) = self.bits(column);
        Some(Self {
            row: self.row + 1,
            cols: self.cols | col,
            diags: self.diags | diag,
            anti_diags: self.anti_diags | anti_diag,
            ..*self
        })
    }

    /// Every legal extension by one queen, in column order.
    pub fn children(&self) -> impl Iterator<Item = Placement> {
        let parent = *self;
        (0..self.size).filter_map(move |column| parent.place(column))
    }

    /// Number of complete placements reachable from this one.
    pub fn count(&self) -> u64 {
        queens(self.size, self.row, self.cols, self.diags, self.anti_diags)
    }
}

/// Counts all solutions for a `size` x `size` board.
pub fn count_solutions(size: u32) -> Result<u64> {
    let board = Placement::empty(size)?;
    debug!("searching {size}x{size} board");
    let count = board.count();
    debug!("{size}x{size} board has {count} solutions");
    Ok(count)
}

/// Solution counts for each first-row column that leads anywhere.
///
/// The counts sum to [`count_solutions`] for every `size >= 1`. A 0x0 board
/// has no first row, so the list is empty.
pub fn branch_counts(size: u32) -> Result<Vec<(u32, u64)>> {
    let board = Placement::empty(size)?;
    let branches = (0..size)
        .filter_map(|column| board.place(column).map(|child| (column, child.count())))
        .collect::<Vec<_>>();
    for (column, count) in &branches {
        debug!("column {column}: {count} solutions");
    }
    Ok(branches)
}
