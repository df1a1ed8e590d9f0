//! Node types for the view tree.

use unicode_width::UnicodeWidthStr;

use crate::column::Alignment;
use crate::style::Style;

/// Accessibility role attached to a node.
///
/// Roles describe what a node *is* to assistive consumers of the tree,
/// independent of how it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A column header cell.
    ColumnHeader,
    /// An activatable push-button surface.
    Button,
}

/// Size specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Fixed size in cells
    Fixed(u16),
    /// Flex grow factor
    Flex(u16),
    /// Auto size based on content
    #[default]
    Auto,
}

/// Layout properties for a node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Width
    pub width: Size,
    /// Gap between children
    pub gap: u16,
    /// Horizontal alignment of content within the node's area
    pub align: Alignment,
}

impl Layout {
    /// Resolve this layout's width against the space the host makes available.
    pub fn resolve_width(&self, available: u16) -> u16 {
        match self.width {
            Size::Fixed(cells) => cells.min(available),
            Size::Flex(_) | Size::Auto => available,
        }
    }
}

/// A node in the view tree
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text { content: String, style: Style },

    /// A glyph with an optional accessible label
    Icon {
        glyph: String,
        style: Style,
        /// Accessible description (e.g. "Sorted ascending")
        label: Option<String>,
    },

    /// Container with horizontal layout
    Row {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// A table header cell
    HeaderCell {
        child: Box<Node>,
        style: Style,
        layout: Layout,
        role: Option<Role>,
        /// Whether the cell participates in the tab order
        focusable: bool,
        /// Hover tooltip text
        tooltip: Option<String>,
    },
}

impl Node {
    /// Create an empty node
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: Style::new(),
        }
    }

    /// Create a text node with style
    pub fn text_styled(content: impl Into<String>, style: Style) -> Self {
        Self::Text {
            content: content.into(),
            style,
        }
    }

    /// Create an unlabeled icon node
    pub fn icon(glyph: impl Into<String>, style: Style) -> Self {
        Self::Icon {
            glyph: glyph.into(),
            style,
            label: None,
        }
    }

    /// Create an icon node with an accessible label
    pub fn icon_labeled(
        glyph: impl Into<String>,
        style: Style,
        label: impl Into<String>,
    ) -> Self {
        Self::Icon {
            glyph: glyph.into(),
            style,
            label: Some(label.into()),
        }
    }

    /// Create a row node
    pub fn row(children: Vec<Node>) -> Self {
        Self::Row {
            children,
            style: Style::new(),
            layout: Layout::default(),
        }
    }

    /// Create a row node with style and layout
    pub fn row_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Row {
            children,
            style,
            layout,
        }
    }

    /// Check if node is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Check if this node is focusable
    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::HeaderCell { focusable: true, .. })
    }

    /// Get the accessibility role, if any
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::HeaderCell { role, .. } => *role,
            _ => None,
        }
    }

    /// Get the tooltip text, if any
    pub fn tooltip(&self) -> Option<&str> {
        match self {
            Self::HeaderCell { tooltip, .. } => tooltip.as_deref(),
            _ => None,
        }
    }

    /// Collect the visible text content of this node and its children.
    ///
    /// Icons contribute their glyph; accessible labels are not part of
    /// the visible text.
    pub fn flat_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text { content, .. } => content.clone(),
            Self::Icon { glyph, .. } => glyph.clone(),
            Self::Row { children, .. } => children.iter().map(Node::flat_text).collect(),
            Self::HeaderCell { child, .. } => child.flat_text(),
        }
    }

    /// Calculate intrinsic width of this node
    pub fn intrinsic_width(&self) -> u16 {
        match self {
            Self::Empty => 0,
            Self::Text { content, .. } => content.width() as u16,
            Self::Icon { glyph, .. } => glyph.width() as u16,
            Self::Row {
                children, layout, ..
            } => {
                let child_sum: u16 = children.iter().map(|c| c.intrinsic_width()).sum();
                let gaps = if children.len() > 1 {
                    layout.gap * (children.len() as u16 - 1)
                } else {
                    0
                };
                child_sum + gaps
            }
            Self::HeaderCell { child, .. } => child.intrinsic_width(),
        }
    }

    /// Calculate intrinsic height of this node
    pub fn intrinsic_height(&self) -> u16 {
        match self {
            Self::Empty => 0,
            _ => 1,
        }
    }
}
