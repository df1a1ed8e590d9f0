//! Drawing view-tree nodes into a terminal buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style as RatatuiStyle;
use ratatui::text::Span;

use crate::column::Alignment;
use crate::node::Node;
use crate::style::Style;
use crate::theme::{Theme, resolve_color};
use crate::utils::text::truncate_text;

/// Convert a style to ratatui form, resolving named colors via the theme.
pub fn style_to_ratatui(style: &Style, theme: &dyn Theme) -> RatatuiStyle {
    let mut out = style.to_ratatui_modifiers();
    if let Some(fg) = &style.fg {
        out = out.fg(resolve_color(fg, theme).to_ratatui());
    }
    if let Some(bg) = &style.bg {
        out = out.bg(resolve_color(bg, theme).to_ratatui());
    }
    out
}

/// Draw a node into a buffer region.
///
/// Content wider than the area is truncated with an ellipsis. Child styles
/// are patched over their parent's, so a header cell's background carries
/// through its label and icon.
pub fn draw_node(buf: &mut Buffer, node: &Node, area: Rect, theme: &dyn Theme) {
    draw_node_styled(buf, node, area, theme, RatatuiStyle::default());
}

fn draw_node_styled(
    buf: &mut Buffer,
    node: &Node,
    area: Rect,
    theme: &dyn Theme,
    base: RatatuiStyle,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    match node {
        Node::Empty => {}

        Node::Text { content, style } => {
            draw_span(buf, content, style, area, theme, base);
        }

        Node::Icon { glyph, style, .. } => {
            draw_span(buf, glyph, style, area, theme, base);
        }

        Node::Row {
            children,
            style,
            layout,
        } => {
            let row_base = base.patch(style_to_ratatui(style, theme));
            let right_edge = area.x + area.width;
            let mut x = area.x;
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    x += layout.gap;
                }
                if x >= right_edge {
                    break;
                }
                let width = child.intrinsic_width().min(right_edge - x);
                let child_area = Rect {
                    x,
                    y: area.y,
                    width,
                    height: 1,
                };
                draw_node_styled(buf, child, child_area, theme, row_base);
                x += width;
            }
        }

        Node::HeaderCell {
            child,
            style,
            layout,
            ..
        } => {
            let cell_style = base.patch(style_to_ratatui(style, theme));

            // Fill the whole cell so the background covers the padding
            let fill = " ".repeat(area.width as usize);
            buf.set_span(area.x, area.y, &Span::styled(fill, cell_style), area.width);

            let content_width = child.intrinsic_width().min(area.width);
            let x = match layout.align {
                Alignment::Left => area.x,
                Alignment::Center => area.x + (area.width - content_width) / 2,
                Alignment::Right => area.x + area.width - content_width,
            };
            let child_area = Rect {
                x,
                y: area.y,
                width: content_width,
                height: 1,
            };
            draw_node_styled(buf, child, child_area, theme, cell_style);
        }
    }
}

fn draw_span(
    buf: &mut Buffer,
    text: &str,
    style: &Style,
    area: Rect,
    theme: &dyn Theme,
    base: RatatuiStyle,
) {
    let resolved = base.patch(style_to_ratatui(style, theme));
    let truncated = truncate_text(text, area.width as usize);
    buf.set_span(area.x, area.y, &Span::styled(truncated, resolved), area.width);
}
