//! Sortable header row demo.
//!
//! Tab/arrow keys move focus between header cells, Enter toggles sorting,
//! and headers respond to mouse clicks. Resize the terminal below 60
//! columns to watch the email column drop out. Press 'q' to quit.

use std::fs::File;
use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use simplelog::{Config, LevelFilter, WriteLogger};

use griddle::prelude::*;
use griddle::render::draw_node;

fn columns() -> Vec<Column> {
    vec![
        Column::new("name").sortable(),
        Column::new("email").sortable().visible("(min-width: 60)"),
        Column::new("createdAt")
            .sortable()
            .align(Alignment::Right)
            .width(16),
        Column::new("status"),
    ]
}

fn cells(sort: &State<Option<SortStatus>>) -> Vec<HeaderCell> {
    columns()
        .into_iter()
        .map(|column| {
            let handle = sort.clone();
            HeaderCell::new(column)
                .sort_status(sort.get())
                .on_sort_status_change(move |status| handle.set(Some(status)))
        })
        .collect()
}

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("headers.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

/// Move focus to the adjacent cell in the rendered set, wrapping around.
///
/// Hidden columns are not part of `visible`, so focus never lands on a
/// cell the visibility predicate dropped this frame.
fn cycle_focus(visible: &[usize], current: usize, forward: bool) -> usize {
    if visible.is_empty() {
        return current;
    }
    let pos = visible.iter().position(|&i| i == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % visible.len()
    } else {
        (pos + visible.len() - 1) % visible.len()
    };
    visible[next]
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let theme = DefaultTheme::dark();
    let sort: State<Option<SortStatus>> = State::new(None);
    let mut focus = 0usize;

    'frame: loop {
        let cells = cells(&sort);
        // (cell index, screen area) for every cell that rendered this pass
        let mut areas: Vec<(usize, Rect)> = Vec::new();

        terminal.draw(|frame| {
            let size = frame.area();
            let viewport = Viewport::new(size.width, size.height);

            let rendered: Vec<(usize, Node)> = cells
                .iter()
                .enumerate()
                .filter_map(|(i, cell)| cell.render(&theme, viewport).map(|node| (i, node)))
                .collect();

            // Fixed widths first, remaining space split evenly across flex cells
            let gap = 1u16;
            let gaps = gap * rendered.len().saturating_sub(1) as u16;
            let mut fixed = 0u16;
            let mut flex_count = 0u16;
            for (_, node) in &rendered {
                if let Node::HeaderCell { layout, .. } = node {
                    match layout.width {
                        Size::Fixed(cells) => fixed += cells,
                        Size::Flex(_) | Size::Auto => flex_count += 1,
                    }
                }
            }
            let flex_width = size
                .width
                .saturating_sub(fixed + gaps)
                .checked_div(flex_count.max(1))
                .unwrap_or(0);

            let mut x = 0u16;
            for (i, node) in &rendered {
                let width = match node {
                    Node::HeaderCell { layout, .. } => layout.resolve_width(flex_width),
                    _ => flex_width,
                };
                let area = Rect::new(x, 0, width.min(size.width.saturating_sub(x)), 1);
                draw_node(frame.buffer_mut(), node, area, &theme);
                areas.push((*i, area));
                x += width + gap;
            }

            // Status line below the header
            let status = match sort.get() {
                Some(status) => {
                    let direction = match status.direction {
                        SortDirection::Ascending => "ascending",
                        SortDirection::Descending => "descending",
                    };
                    format!("sorted by {} ({})", status.column_accessor, direction)
                }
                None => "unsorted".to_string(),
            };
            let line = Node::text_styled(status, Style::new().fg("text_muted"));
            if size.height > 2 {
                draw_node(
                    frame.buffer_mut(),
                    &line,
                    Rect::new(0, 2, size.width, 1),
                    &theme,
                );
            }
        })?;
        sort.clear_dirty();
        let visible: Vec<usize> = areas.iter().map(|(i, _)| *i).collect();
        // A resize may have hidden the focused column
        if !visible.contains(&focus) {
            focus = visible.first().copied().unwrap_or(0);
        }

        // Consume events until something changed worth redrawing
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let combo = KeyCombo::from(key);
                    match combo.key {
                        Key::Char('q') | Key::Escape => return Ok(()),
                        Key::Tab | Key::Right => {
                            focus = cycle_focus(&visible, focus, true);
                            continue 'frame;
                        }
                        Key::Left => {
                            focus = cycle_focus(&visible, focus, false);
                            continue 'frame;
                        }
                        _ => {
                            cells[focus].on_key(&combo);
                        }
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if mouse.row == 0 {
                        for (i, area) in &areas {
                            if mouse.column >= area.x && mouse.column < area.x + area.width {
                                cells[*i].on_click(mouse.column - area.x, 0);
                                break;
                            }
                        }
                    }
                }
                Event::Resize(_, _) => continue 'frame,
                _ => {}
            }
            if sort.is_dirty() {
                continue 'frame;
            }
        }
    }
}
