//! Sort state types and the toggle rule for header activation.

use serde::{Deserialize, Serialize};

/// Direction of an active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Accessible label for the directional sort indicator.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Sorted ascending",
            Self::Descending => "Sorted descending",
        }
    }
}

/// The table-wide sort state: which column is sorted, and how.
///
/// At most one column is sorted at a time. This value is owned by the host
/// application (typically in a [`State`](crate::state::State)); header cells
/// receive a copy each render and propose replacements through their
/// callback, never mutating it themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStatus {
    /// Accessor of the sorted column
    pub column_accessor: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortStatus {
    /// Create an ascending sort status for a column.
    pub fn ascending(accessor: impl Into<String>) -> Self {
        Self {
            column_accessor: accessor.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Create a descending sort status for a column.
    pub fn descending(accessor: impl Into<String>) -> Self {
        Self {
            column_accessor: accessor.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Check whether this status applies to the given column.
    pub fn is_column(&self, accessor: &str) -> bool {
        self.column_accessor == accessor
    }
}

/// Compute the sort status a column activation should propose.
///
/// If the column is already sorted, the direction flips. Activating a
/// different column always starts ascending, regardless of the current
/// direction. Non-sortable columns propose nothing.
pub fn next_sort_status(
    accessor: &str,
    sortable: bool,
    current: Option<&SortStatus>,
) -> Option<SortStatus> {
    if !sortable {
        return None;
    }
    let direction = match current {
        Some(status) if status.is_column(accessor) => status.direction.toggled(),
        _ => SortDirection::Ascending, // New column defaults to ascending
    };
    Some(SortStatus {
        column_accessor: accessor.to_string(),
        direction,
    })
}
