use serde::Serialize;

/// A periodic assignment of shape indices to tile copies.
///
/// `rows[r][c]` lists the indices, into `shapes ++ external_shapes`, that a
/// renderer fills for tiles at `(c, r)` modulo the grid size. The shift is
/// in tile advances and is meant for the tessellation offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillPattern {
    pub rows: Vec<Vec<Vec<usize>>>,
    pub shift_x: f64,
    pub shift_y: f64,
}

impl FillPattern {
    #[must_use]
    pub fn new(rows: Vec<Vec<Vec<usize>>>) -> Self {
        Self {
            rows,
            shift_x: 0.0,
            shift_y: 0.0,
        }
    }

    #[must_use]
    pub fn with_shift(mut self, shift_x: f64, shift_y: f64) -> Self {
        self.shift_x = shift_x;
        self.shift_y = shift_y;
        self
    }

    /// Shape indices to fill for the tile at grid position `(col, row)`.
    ///
    /// Negative positions wrap like positive ones.
    #[must_use]
    pub fn shapes_at(&self, col: i64, row: i64) -> &[usize] {
        let Some(height) = i64::try_from(self.rows.len()).ok().filter(|h| *h > 0) else {
            return &[];
        };
        let r = usize::try_from(row.rem_euclid(height)).unwrap_or(0);
        let cells = &self.rows[r];
        let Some(width) = i64::try_from(cells.len()).ok().filter(|w| *w > 0) else {
            return &[];
        };
        let c = usize::try_from(col.rem_euclid(width)).unwrap_or(0);
        &cells[c]
    }

    /// Largest shape index referenced anywhere in the grid.
    #[must_use]
    pub fn max_index(&self) -> Option<usize> {
        self.rows.iter().flatten().flatten().copied().max()
    }
}

/// Shorthand for fill grid literals. Rows may differ in width.
pub(crate) fn grid(rows: &[&[&[usize]]]) -> Vec<Vec<Vec<usize>>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_vec()).collect())
        .collect()
}
