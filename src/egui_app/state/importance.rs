use crate::importance::{ImportanceRow, ImportanceTable};
use std::cmp::Ordering;

/// Column of the importance table that can drive its ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImportanceColumn {
    Feature,
    #[default]
    Score,
    Kind,
}

impl ImportanceColumn {
    pub fn label(self) -> &'static str {
        match self {
            ImportanceColumn::Feature => "Variabel",
            ImportanceColumn::Score => "Importance",
            ImportanceColumn::Kind => "Tipe",
        }
    }

    fn compare(self, a: &ImportanceRow, b: &ImportanceRow) -> Ordering {
        match self {
            ImportanceColumn::Feature => a.feature.cmp(&b.feature),
            ImportanceColumn::Score => a.score.total_cmp(&b.score),
            ImportanceColumn::Kind => a.kind.cmp(b.kind),
        }
    }
}

/// Display ordering of the table; never changes the ranking itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSort {
    pub column: ImportanceColumn,
    pub descending: bool,
}

impl Default for TableSort {
    fn default() -> Self {
        Self {
            column: ImportanceColumn::Score,
            descending: true,
        }
    }
}

impl TableSort {
    /// Clicking the active column flips direction; another column starts ascending.
    pub fn toggled(self, column: ImportanceColumn) -> Self {
        if self.column == column {
            Self {
                column,
                descending: !self.descending,
            }
        } else {
            Self {
                column,
                descending: false,
            }
        }
    }
}

/// Importance report for the active model plus its table view settings.
#[derive(Clone, Debug, Default)]
pub struct ImportanceState {
    pub table: ImportanceTable,
    pub sort: TableSort,
}

impl ImportanceState {
    /// Rows in display order. Stable, so ties keep the ranking order.
    pub fn sorted_rows(&self) -> Vec<&ImportanceRow> {
        let mut rows: Vec<&ImportanceRow> = self.table.rows().iter().collect();
        let TableSort { column, descending } = self.sort;
        rows.sort_by(|a, b| {
            let ordering = column.compare(a, b);
            if descending { ordering.reverse() } else { ordering }
        });
        rows
    }
}
