//! Row/column/page cursor over a paged grid of items.
//!
//! The visible grid is a `rows x columns` window onto a longer list; the
//! window is addressed by `page_start`, which always moves in whole rows.
//! Every movement takes the live list length so a selection can never
//! address a slot past the end of the list, even right after the list was
//! re-sorted to a different length.

/// Cursor state. `page_start + row * columns + column` is the selected index.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
    pub page_start: usize,
}

impl GridPosition {
    pub const ORIGIN: Self = Self {
        row: 0,
        column: 0,
        page_start: 0,
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridCursor {
    position: GridPosition,
    rows: usize,
    columns: usize,
}

impl GridCursor {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            position: GridPosition::ORIGIN,
            rows: rows.max(1),
            columns: columns.max(1),
        }
    }

    pub const fn position(&self) -> GridPosition {
        self.position
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    pub const fn selected_index(&self) -> usize {
        self.position.page_start + self.position.row * self.columns + self.position.column
    }

    pub fn reset(&mut self) {
        self.position = GridPosition::ORIGIN;
    }

    /// Back to the origin if the list shrank under the cursor.
    /// Returns `true` when the cursor had to move.
    pub fn revalidate(&mut self, len: usize) -> bool {
        if len > 0 && self.selected_index() >= len {
            self.reset();
            return true;
        }
        false
    }

    /// Move up `amount` rows, scrolling the page once the top row is reached.
    pub fn move_up(&mut self, amount: usize, len: usize) {
        if len == 0 {
            return;
        }
        for _ in 0..amount {
            self.row_up();
        }
    }

    /// Move down `amount` rows, scrolling the page once the bottom row is
    /// reached and pulling the column back when the slot below is empty.
    pub fn move_down(&mut self, amount: usize, len: usize) {
        if len == 0 {
            return;
        }
        for _ in 0..amount {
            self.row_down(len);
        }
    }

    pub fn move_left(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        let position = &mut self.position;
        if position.column > 0 {
            position.column -= 1;
        } else if position.row == 0 && position.page_start == 0 {
            // Index 0 already; nothing to the left.
        } else {
            position.column = self.columns - 1;
            self.row_up();
        }
    }

    pub fn move_right(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        self.position.column += 1;
        if self.selected_index() >= len {
            self.position.column -= 1;
        }
        if self.position.column >= self.columns {
            self.position.column = 0;
            self.row_down(len);
        }
    }

    fn row_up(&mut self) {
        let position = &mut self.position;
        if position.row > 0 {
            position.row -= 1;
        } else {
            position.page_start = position.page_start.saturating_sub(self.columns);
        }
    }

    /// Two-phase: the page advance is reverted only on a strict overshoot
    /// (`selected > len`); an index equal to `len` is then corrected by the
    /// column pull-back, which picks the last item on the previous row.
    fn row_down(&mut self, len: usize) {
        self.position.row += 1;
        if self.position.row >= self.rows {
            self.position.row = self.rows - 1;
            self.position.page_start += self.columns;
            if self.selected_index() > len {
                self.position.page_start -= self.columns;
            }
        }

        // Each pass lowers the selected index by exactly one: a column step
        // is -1, and a wrap to the last column plus a row-up is
        // `+(columns - 1) - columns`. Index 0 is always valid for a
        // non-empty list, so this runs at most `selected_index` times.
        while self.selected_index() >= len && self.selected_index() > 0 {
            if self.position.column > 0 {
                self.position.column -= 1;
            } else {
                self.position.column = self.columns - 1;
                self.row_up();
            }
        }
    }
}
