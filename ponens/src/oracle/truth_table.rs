use std::sync::Arc;

use crate::structures::valuation::Assignment;

/// The value of a formula on each assignment to its variables.
///
/// Rows are in binary counting order over the variables, with the variable which appears first in the formula varying slowest.
/// So, for `p implies q`:
///
/// | p | q | value |
/// |---|---|-------|
/// | 0 | 0 | 1     |
/// | 0 | 1 | 1     |
/// | 1 | 0 | 0     |
/// | 1 | 1 | 1     |
///
/// A formula with no variables would have a single row, with the empty assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    atoms: Arc<[String]>,
    rows: Vec<(Assignment, bool)>,
}

impl TruthTable {
    pub(super) fn new(atoms: Arc<[String]>, rows: Vec<(Assignment, bool)>) -> Self {
        TruthTable { atoms, rows }
    }

    /// The variables of the table, in the order of first appearance in the formula.
    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    /// The rows of the table, in canonical order.
    pub fn rows(&self) -> &[(Assignment, bool)] {
        &self.rows
    }

    /// Just the values of the table, in canonical order.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|(_, value)| *value)
    }

    /// A count of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
