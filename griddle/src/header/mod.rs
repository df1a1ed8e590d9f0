//! Interactive table header cell.
//!
//! `HeaderCell` is a stateless projector: it owns nothing but the column
//! definition and a per-render snapshot of the table's sort state. Activating
//! a sortable cell (click or Enter) does not mutate anything locally; the
//! cell computes the next sort status and hands it to the host through
//! `on_sort_status_change`. The host commits it (typically into a
//! [`State`](crate::state::State)) and the change flows back in on the next
//! render.

mod events;
mod render;

use std::fmt;
use std::sync::Arc;

use crate::column::Column;
use crate::node::Node;
use crate::sort::{SortDirection, SortStatus};
use crate::utils::text::humanize;

/// Host callback receiving proposed sort changes.
pub type SortHandler = Arc<dyn Fn(SortStatus) + Send + Sync>;

/// A single column header cell.
///
/// # Example
///
/// ```ignore
/// let sort = State::new(None::<SortStatus>);
///
/// let cell = HeaderCell::new(Column::new("created_at").sortable())
///     .sort_status(sort.get())
///     .on_sort_status_change({
///         let sort = sort.clone();
///         move |status| sort.set(Some(status))
///     });
///
/// if let Some(node) = cell.render(&theme, viewport) {
///     // draw `node` into the header row
/// }
/// ```
#[derive(Clone)]
pub struct HeaderCell {
    pub(crate) column: Column,
    pub(crate) sort_status: Option<SortStatus>,
    pub(crate) on_sort_status_change: Option<SortHandler>,
}

impl HeaderCell {
    /// Create a header cell for a column.
    pub fn new(column: Column) -> Self {
        Self {
            column,
            sort_status: None,
            on_sort_status_change: None,
        }
    }

    /// Provide the current table-wide sort state for this render.
    pub fn sort_status(mut self, status: Option<SortStatus>) -> Self {
        self.sort_status = status;
        self
    }

    /// Register the host callback for sort proposals.
    ///
    /// Without a callback a sortable column renders its indicators but
    /// activation goes nowhere: clicks and Enter are ignored.
    pub fn on_sort_status_change(
        mut self,
        handler: impl Fn(SortStatus) + Send + Sync + 'static,
    ) -> Self {
        self.on_sort_status_change = Some(Arc::new(handler));
        self
    }

    /// The column's accessor.
    pub fn accessor(&self) -> &str {
        &self.column.accessor
    }

    /// The column this cell renders.
    pub fn column(&self) -> &Column {
        &self.column
    }

    /// Sort direction if this cell's column is the sorted one.
    pub fn active_direction(&self) -> Option<SortDirection> {
        self.sort_status
            .as_ref()
            .filter(|status| status.is_column(&self.column.accessor))
            .map(|status| status.direction)
    }

    /// The plain-text label, if the title resolves to one.
    ///
    /// An absent title humanizes the accessor; a text title yields its
    /// content; any other title node has no plain-text form.
    pub fn label_text(&self) -> Option<String> {
        match &self.column.title {
            None => Some(humanize(&self.column.accessor)),
            Some(Node::Text { content, .. }) => Some(content.clone()),
            Some(_) => None,
        }
    }

    /// Tooltip for the cell: exactly the plain-text label, when one exists.
    pub fn tooltip(&self) -> Option<String> {
        self.label_text()
    }
}

impl fmt::Debug for HeaderCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderCell")
            .field("column", &self.column)
            .field("sort_status", &self.sort_status)
            .field(
                "on_sort_status_change",
                &self.on_sort_status_change.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}
