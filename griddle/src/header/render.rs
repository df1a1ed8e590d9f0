//! Header cell rendering.

use crate::column::Alignment;
use crate::node::{Layout, Node, Role, Size};
use crate::sort::SortDirection;
use crate::style::Style;
use crate::theme::Theme;
use crate::utils::text::humanize;
use crate::viewport::Viewport;

use super::HeaderCell;

/// Sort indicators.
const ARROW_ASC: &str = "▲";
const ARROW_DESC: &str = "▼";
const ARROW_NEUTRAL: &str = "⇅";

impl HeaderCell {
    /// Project this cell into a view node.
    ///
    /// Returns `None` when the column's visibility predicate evaluates
    /// hidden for the current theme and viewport. Visibility is re-evaluated
    /// on every call; nothing is cached between renders.
    pub fn render(&self, theme: &dyn Theme, viewport: Viewport) -> Option<Node> {
        if let Some(visibility) = &self.column.visible
            && !visibility.eval(theme, viewport)
        {
            return None;
        }

        let label = match &self.column.title {
            Some(title) => title.clone(),
            None => Node::text(humanize(&self.column.accessor)),
        };

        // Directional indicator whenever this column is the sorted one,
        // neutral indicator for sortable-but-inactive, nothing otherwise.
        let icon = match self.active_direction() {
            Some(SortDirection::Ascending) => Some(Node::icon_labeled(
                ARROW_ASC,
                Style::new().fg("primary"),
                SortDirection::Ascending.label(),
            )),
            Some(SortDirection::Descending) => Some(Node::icon_labeled(
                ARROW_DESC,
                Style::new().fg("primary"),
                SortDirection::Descending.label(),
            )),
            None if self.column.sortable => Some(Node::icon(
                ARROW_NEUTRAL,
                Style::new().fg("icon_muted").dim(),
            )),
            None => None,
        };

        let child = match icon {
            Some(icon) => {
                // Indicator goes on the side away from the label's anchor
                // so the text keeps its position across sort changes.
                let children = match self.column.text_align {
                    Alignment::Right => vec![icon, label],
                    Alignment::Left | Alignment::Center => vec![label, icon],
                };
                Node::row_styled(
                    children,
                    Style::new(),
                    Layout {
                        gap: 1,
                        ..Layout::default()
                    },
                )
            }
            None => label,
        };

        let style = self
            .column
            .style
            .clone()
            .unwrap_or_else(|| Style::new().fg("text").bg("surface").bold());

        let layout = Layout {
            width: self.column.width.map(Size::Fixed).unwrap_or(Size::Flex(1)),
            align: self.column.text_align,
            ..Layout::default()
        };

        let (role, focusable) = if self.column.sortable {
            (Role::Button, true)
        } else {
            (Role::ColumnHeader, false)
        };

        Some(Node::HeaderCell {
            child: Box::new(child),
            style,
            layout,
            role: Some(role),
            focusable,
            tooltip: self.tooltip(),
        })
    }
}
