//! Row/column grids generated from a cell builder.

#![allow(non_snake_case)]

use std::fmt;
use std::rc::Rc;

use super::stack::DEFAULT_STACK_SPACING;
use crate::node::DisplayNode;

/// Rectangular arrangement of generated cells.
///
/// Cells are not built until [`GridSpec::cells`] is iterated, which layout
/// does once per pass. Zero rows or columns yield an empty grid.
#[derive(Clone)]
pub struct GridSpec {
    rows: usize,
    columns: usize,
    spacing: f32,
    cell: Rc<dyn Fn(usize, usize) -> DisplayNode>,
}

impl GridSpec {
    pub fn new(
        rows: usize,
        columns: usize,
        cell: impl Fn(usize, usize) -> DisplayNode + 'static,
    ) -> Self {
        Self {
            rows,
            columns,
            spacing: DEFAULT_STACK_SPACING,
            cell: Rc::new(cell),
        }
    }

    /// Accepts signed dimensions; negative counts become zero.
    pub fn from_signed(
        rows: i64,
        columns: i64,
        cell: impl Fn(usize, usize) -> DisplayNode + 'static,
    ) -> Self {
        let rows = usize::try_from(rows).unwrap_or(0);
        let columns = usize::try_from(columns).unwrap_or(0);
        Self::new(rows, columns, cell)
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn gap(&self) -> f32 {
        self.spacing
    }

    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Builds cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = DisplayNode> + '_ {
        let columns = self.columns;
        // Rows without columns build nothing; skip them instead of counting.
        let rows = if columns == 0 { 0 } else { self.rows };
        (0..rows).flat_map(move |row| (0..columns).map(move |column| (self.cell)(row, column)))
    }
}

impl PartialEq for GridSpec {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.spacing == other.spacing
            && Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl fmt::Debug for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridSpec")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("spacing", &self.spacing)
            .finish_non_exhaustive()
    }
}

pub fn Grid(spec: GridSpec) -> DisplayNode {
    DisplayNode::Grid(spec)
}
