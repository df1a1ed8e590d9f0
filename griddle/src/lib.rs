pub mod color;
pub mod column;
pub mod events;
pub mod header;
pub mod media;
pub mod node;
pub mod render;
pub mod sort;
pub mod state;
pub mod style;
pub mod theme;
pub mod utils;
pub mod viewport;

pub mod prelude {
    pub use crate::color::{Color, StyleColor};
    pub use crate::column::{Alignment, Column};
    pub use crate::events::{ComponentEvents, EventResult, Key, KeyCombo, Modifiers};
    pub use crate::header::{HeaderCell, SortHandler};
    pub use crate::media::{MediaQuery, MediaQueryError, Visibility};
    pub use crate::node::{Layout, Node, Role, Size};
    pub use crate::render::{draw_node, style_to_ratatui};
    pub use crate::sort::{SortDirection, SortStatus, next_sort_status};
    pub use crate::state::State;
    pub use crate::style::Style;
    pub use crate::theme::{DefaultTheme, Theme, ThemeRef, resolve_color};
    pub use crate::viewport::Viewport;
}
