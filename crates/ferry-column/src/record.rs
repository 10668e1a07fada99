//! Record: the ordered row that owns its columns.

use ferry_core::ColumnKind;

use crate::column::Column;

/// An ordered row of columns. Columns have no identity outside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    columns: Vec<Column>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
        }
    }

    pub fn add_column(&mut self, column: impl Into<Column>) {
        self.columns.push(column.into());
    }

    /// Place `column` at `index`, padding any gap with null integer columns.
    /// Returns the column it replaced, if any.
    pub fn set_column(&mut self, index: usize, column: impl Into<Column>) -> Option<Column> {
        let column = column.into();
        if index >= self.columns.len() {
            self.columns
                .resize_with(index, || Column::null(ColumnKind::Integer));
            self.columns.push(column);
            return None;
        }
        Some(std::mem::replace(&mut self.columns[index], column))
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index)
    }

    pub fn column_number(&self) -> usize {
        self.columns.len()
    }

    /// Sum of the byte sizes of every column.
    pub fn byte_size(&self) -> usize {
        self.columns.iter().map(Column::byte_size).sum()
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}

impl From<Vec<Column>> for Record {
    fn from(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

impl FromIterator<Column> for Record {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = Column;
    type IntoIter = std::vec::IntoIter<Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}
