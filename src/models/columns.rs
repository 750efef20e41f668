//! 列配置：排序列、升降序以及每列的比较函数

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::tree::Entry;

pub type Comparator<T> = fn(&Entry<T>, &Entry<T>) -> Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

pub struct Column<T> {
    pub name: String,
    pub align: Align,
    pub sort: Comparator<T>,
}

impl<T> Column<T> {
    pub fn new(name: impl Into<String>, align: Align, sort: Comparator<T>) -> Self {
        Self {
            name: name.into(),
            align,
            sort,
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            align: self.align,
            sort: self.sort,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

pub struct ColumnsConfig<T> {
    pub sort_column: String,
    pub sort_descending: bool,
    pub columns: Vec<Column<T>>,
}

impl<T> ColumnsConfig<T> {
    pub fn new(columns: Vec<Column<T>>, sort_column: impl Into<String>) -> Self {
        Self {
            sort_column: sort_column.into(),
            sort_descending: false,
            columns,
        }
    }

    pub fn active_column(&self) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.name == self.sort_column)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Header click: the active column flips direction, any other column
    /// becomes active in ascending order. Unknown names are ignored.
    pub fn click_column(&mut self, name: &str) -> bool {
        if !self.has_column(name) {
            return false;
        }
        if self.sort_column == name {
            self.sort_descending = !self.sort_descending;
        } else {
            self.sort_column = name.to_string();
            self.sort_descending = false;
        }
        true
    }
}

impl<T> Clone for ColumnsConfig<T> {
    fn clone(&self) -> Self {
        Self {
            sort_column: self.sort_column.clone(),
            sort_descending: self.sort_descending,
            columns: self.columns.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnsConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnsConfig")
            .field("sort_column", &self.sort_column)
            .field("sort_descending", &self.sort_descending)
            .field("columns", &self.columns)
            .finish()
    }
}

/// Stable sort by the active column; without a matching column the input
/// order is kept. Descending reverses the result either way.
pub fn sort_entries<T>(entries: &mut [&Entry<T>], config: &ColumnsConfig<T>) {
    if let Some(column) = config.active_column() {
        let sort = column.sort;
        entries.sort_by(|a, b| sort(a, b));
    }
    if config.sort_descending {
        entries.reverse();
    }
}

/// Case-insensitive comparison with a case-sensitive tie break.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
#[path = "../../tests/unit/models/columns.rs"]
mod tests;
