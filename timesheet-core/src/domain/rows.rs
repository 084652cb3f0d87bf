use super::models::{RowId, TimesheetRow};
use super::FormError;

/// Ordered, never-empty sequence of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSequence {
    rows: Vec<TimesheetRow>,
    next_id: u64,
}

impl Default for RowSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSequence {
    /// A sequence holding a single empty row.
    pub fn new() -> Self {
        Self {
            rows: vec![TimesheetRow::empty(RowId::new(1))],
            next_id: 2,
        }
    }

    /// Append an empty row and return its id.
    pub fn add_row(&mut self) -> RowId {
        let id = RowId::new(self.next_id);
        self.next_id += 1;
        self.rows.push(TimesheetRow::empty(id));
        id
    }

    /// Remove the final row. Returns `None` and leaves the sequence untouched
    /// when only one row remains.
    pub fn remove_last_row(&mut self) -> Option<TimesheetRow> {
        if self.rows.len() <= 1 {
            return None;
        }
        self.rows.pop()
    }

    pub fn get(&self, id: RowId) -> Result<&TimesheetRow, FormError> {
        self.rows
            .iter()
            .find(|row| row.id == id)
            .ok_or(FormError::RowNotFound(id))
    }

    pub fn get_mut(&mut self, id: RowId) -> Result<&mut TimesheetRow, FormError> {
        self.rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(FormError::RowNotFound(id))
    }

    /// 0-based position of a row in display order.
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimesheetRow> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[TimesheetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
