//! Column configuration for table header cells.

use serde::{Deserialize, Serialize};

use crate::media::Visibility;
use crate::node::Node;
use crate::style::Style;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// A column is identified by its `accessor`, a dot-path key into the row
/// data (`"user.profile.displayName"`). Everything else is presentation:
/// an optional title node (defaults to a humanized accessor), alignment,
/// width, sortability, and a responsive visibility predicate.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("id").width(8),
///     Column::new("name").sortable(),
///     Column::new("created_at")
///         .sortable()
///         .align(Alignment::Right)
///         .visible("(min-width: 100)"),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Dot-path key into the row data, unique within a table
    pub accessor: String,
    /// Header content; derived from the accessor when absent
    pub title: Option<Node>,
    /// Whether this column is sortable
    pub sortable: bool,
    /// Horizontal alignment
    pub text_align: Alignment,
    /// Column width in terminal columns; flexes when absent
    pub width: Option<u16>,
    /// Responsive visibility predicate; always visible when absent
    pub visible: Option<Visibility>,
    /// Style override for the header cell
    pub style: Option<Style>,
}

impl Column {
    /// Create a new column for the given accessor.
    pub fn new(accessor: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
            title: None,
            sortable: false,
            text_align: Alignment::Left,
            width: None,
            visible: None,
            style: None,
        }
    }

    /// Set an explicit title node.
    ///
    /// Overrides the humanized accessor. Any node is accepted; only plain
    /// text titles contribute a tooltip.
    pub fn title(mut self, title: Node) -> Self {
        self.title = Some(title);
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show sort indicators in the header and propose
    /// sort changes through the header cell's callback when activated.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.text_align = align;
        self
    }

    /// Set a fixed width in terminal columns.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set a responsive visibility predicate.
    ///
    /// Accepts a media query expression (`"(min-width: 80)"`) or a
    /// [`Visibility::Themed`] function of the theme.
    pub fn visible(mut self, visibility: impl Into<Visibility>) -> Self {
        self.visible = Some(visibility.into());
        self
    }

    /// Override the header cell style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}
