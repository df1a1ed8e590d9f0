use std::sync::{Arc, Mutex};

use griddle::column::{Alignment, Column};
use griddle::events::{ComponentEvents, EventResult, Key, KeyCombo};
use griddle::header::HeaderCell;
use griddle::node::{Node, Role};
use griddle::sort::{SortDirection, SortStatus};
use griddle::state::State;
use griddle::theme::DefaultTheme;
use griddle::viewport::Viewport;

fn render(cell: &HeaderCell) -> Option<Node> {
    cell.render(&DefaultTheme::dark(), Viewport::new(120, 40))
}

/// Find the icon label inside a rendered header cell, if any icon is present.
fn icon_label(node: &Node) -> Option<Option<String>> {
    match node {
        Node::Icon { label, .. } => Some(label.clone()),
        Node::Row { children, .. } => children.iter().find_map(icon_label),
        Node::HeaderCell { child, .. } => icon_label(child),
        _ => None,
    }
}

fn recording_cell(column: Column, status: Option<SortStatus>) -> (HeaderCell, Arc<Mutex<Vec<SortStatus>>>) {
    let proposals: Arc<Mutex<Vec<SortStatus>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&proposals);
    let cell = HeaderCell::new(column)
        .sort_status(status)
        .on_sort_status_change(move |status| sink.lock().unwrap().push(status));
    (cell, proposals)
}

// =============================================================================
// Labels and tooltips
// =============================================================================

#[test]
fn test_default_label_humanizes_accessor() {
    let cell = HeaderCell::new(Column::new("createdAt"));
    let node = render(&cell).unwrap();
    assert_eq!(node.flat_text(), "Created At");
}

#[test]
fn test_explicit_title_wins() {
    let cell = HeaderCell::new(Column::new("createdAt").title(Node::text("Joined")));
    let node = render(&cell).unwrap();
    assert_eq!(node.flat_text(), "Joined");
    assert_eq!(node.tooltip(), Some("Joined"));
}

#[test]
fn test_tooltip_matches_plain_label() {
    let cell = HeaderCell::new(Column::new("email"));
    let node = render(&cell).unwrap();
    assert_eq!(node.tooltip(), Some("Email"));
}

#[test]
fn test_no_tooltip_for_non_text_title() {
    let title = Node::row(vec![Node::text("Status"), Node::icon("●", Default::default())]);
    let cell = HeaderCell::new(Column::new("status").title(title));
    let node = render(&cell).unwrap();
    assert_eq!(node.tooltip(), None);
}

// =============================================================================
// Affordances per sort state
// =============================================================================

#[test]
fn test_non_sortable_inactive_has_no_icon() {
    let cell = HeaderCell::new(Column::new("name"));
    let node = render(&cell).unwrap();

    assert_eq!(node.flat_text(), "Name");
    assert!(!node.is_focusable());
    assert_eq!(node.role(), Some(Role::ColumnHeader));
    assert_eq!(icon_label(&node), None);
}

#[test]
fn test_sortable_inactive_shows_neutral_icon() {
    let cell = HeaderCell::new(Column::new("name").sortable());
    let node = render(&cell).unwrap();

    assert!(node.flat_text().contains('⇅'));
    assert!(node.is_focusable());
    assert_eq!(node.role(), Some(Role::Button));
    // Neutral indicator carries no accessible label
    assert_eq!(icon_label(&node), Some(None));
}

#[test]
fn test_sortable_active_shows_direction() {
    let cell = HeaderCell::new(Column::new("name").sortable())
        .sort_status(Some(SortStatus::ascending("name")));
    let node = render(&cell).unwrap();

    assert!(node.flat_text().contains('▲'));
    assert_eq!(icon_label(&node), Some(Some("Sorted ascending".to_string())));

    let cell = HeaderCell::new(Column::new("name").sortable())
        .sort_status(Some(SortStatus::descending("name")));
    let node = render(&cell).unwrap();

    assert!(node.flat_text().contains('▼'));
    assert_eq!(icon_label(&node), Some(Some("Sorted descending".to_string())));
}

#[test]
fn test_non_sortable_active_shows_direction_but_not_focusable() {
    // Sort state can point at a column that is not user-sortable
    let cell = HeaderCell::new(Column::new("name"))
        .sort_status(Some(SortStatus::descending("name")));
    let node = render(&cell).unwrap();

    assert!(node.flat_text().contains('▼'));
    assert!(!node.is_focusable());
    assert_eq!(node.role(), Some(Role::ColumnHeader));
}

#[test]
fn test_other_column_sort_state_is_ignored() {
    let cell = HeaderCell::new(Column::new("name").sortable())
        .sort_status(Some(SortStatus::ascending("email")));
    let node = render(&cell).unwrap();

    assert!(node.flat_text().contains('⇅'));
    assert!(!node.flat_text().contains('▲'));
}

// =============================================================================
// Responsive visibility
// =============================================================================

#[test]
fn test_hidden_when_viewport_too_narrow() {
    let theme = DefaultTheme::dark();
    let cell = HeaderCell::new(Column::new("email").visible("(min-width: 100)"));

    assert!(cell.render(&theme, Viewport::new(80, 24)).is_none());
    assert!(cell.render(&theme, Viewport::new(100, 24)).is_some());
}

#[test]
fn test_malformed_visibility_stays_visible() {
    let theme = DefaultTheme::dark();
    let cell = HeaderCell::new(Column::new("email").visible("(min-width:)"));

    assert!(cell.render(&theme, Viewport::new(10, 10)).is_some());
}

// =============================================================================
// Activation
// =============================================================================

#[test]
fn test_click_proposes_ascending_for_inactive_column() {
    let (cell, proposals) = recording_cell(Column::new("name").sortable(), None);

    assert_eq!(cell.on_click(0, 0), EventResult::Consumed);
    assert_eq!(proposals.lock().unwrap().as_slice(), &[SortStatus::ascending("name")]);
}

#[test]
fn test_click_proposes_ascending_when_another_column_is_active() {
    let (cell, proposals) = recording_cell(
        Column::new("name").sortable(),
        Some(SortStatus::descending("email")),
    );

    assert_eq!(cell.on_click(0, 0), EventResult::Consumed);
    assert_eq!(proposals.lock().unwrap().as_slice(), &[SortStatus::ascending("name")]);
}

#[test]
fn test_click_flips_active_column() {
    let (cell, proposals) = recording_cell(
        Column::new("name").sortable(),
        Some(SortStatus::ascending("name")),
    );

    assert_eq!(cell.on_click(0, 0), EventResult::Consumed);
    assert_eq!(
        proposals.lock().unwrap().as_slice(),
        &[SortStatus::descending("name")]
    );
}

#[test]
fn test_enter_activates() {
    let (cell, proposals) = recording_cell(Column::new("name").sortable(), None);

    assert_eq!(cell.on_key(&KeyCombo::key(Key::Enter)), EventResult::Consumed);
    assert_eq!(proposals.lock().unwrap().len(), 1);
}

#[test]
fn test_space_does_not_activate() {
    let (cell, proposals) = recording_cell(Column::new("name").sortable(), None);

    assert_eq!(cell.on_key(&KeyCombo::key(Key::Space)), EventResult::Ignored);
    assert_eq!(cell.on_key(&KeyCombo::key(Key::Char('a'))), EventResult::Ignored);
    assert!(proposals.lock().unwrap().is_empty());
}

#[test]
fn test_modified_enter_still_activates() {
    let (cell, proposals) = recording_cell(Column::new("name").sortable(), None);

    let combo = KeyCombo::key(Key::Enter).ctrl();
    assert!(combo.modifiers.any());
    assert_eq!(cell.on_key(&combo), EventResult::Consumed);
    assert_eq!(proposals.lock().unwrap().len(), 1);
}

#[test]
fn test_non_sortable_never_proposes() {
    // Even when the column happens to be the actively sorted one
    let (cell, proposals) = recording_cell(
        Column::new("name"),
        Some(SortStatus::ascending("name")),
    );

    assert_eq!(cell.on_click(0, 0), EventResult::Ignored);
    assert_eq!(cell.on_key(&KeyCombo::key(Key::Enter)), EventResult::Ignored);
    assert!(proposals.lock().unwrap().is_empty());
}

#[test]
fn test_missing_callback_ignores_activation() {
    let cell = HeaderCell::new(Column::new("name").sortable());

    assert_eq!(cell.on_click(0, 0), EventResult::Ignored);
    assert_eq!(cell.on_key(&KeyCombo::key(Key::Enter)), EventResult::Ignored);
}

// =============================================================================
// Host round-trip
// =============================================================================

#[test]
fn test_sort_cycle_through_host_state() {
    let sort: State<Option<SortStatus>> = State::new(None);

    let cell = |status: Option<SortStatus>| {
        let sort = sort.clone();
        HeaderCell::new(Column::new("createdAt").sortable())
            .sort_status(status)
            .on_sort_status_change(move |status| sort.set(Some(status)))
    };

    // First activation: ascending
    cell(sort.get()).on_click(0, 0);
    assert_eq!(sort.get(), Some(SortStatus::ascending("createdAt")));

    // Second activation (rebuilt with the committed state): flips to descending
    cell(sort.get()).on_click(0, 0);
    assert_eq!(sort.get(), Some(SortStatus::descending("createdAt")));

    // Third: back to ascending
    cell(sort.get()).on_click(0, 0);
    assert_eq!(sort.get(), Some(SortStatus::ascending("createdAt")));
}

#[test]
fn test_committed_proposal_marks_state_dirty() {
    let sort: State<Option<SortStatus>> = State::new(None);
    assert!(!sort.is_dirty());

    let cell = HeaderCell::new(Column::new("name").sortable())
        .sort_status(sort.get())
        .on_sort_status_change({
            let sort = sort.clone();
            move |status| sort.set(Some(status))
        });

    cell.on_click(0, 0);
    assert!(sort.is_dirty());

    sort.clear_dirty();
    assert!(!sort.is_dirty());
    // The committed value survives the flag reset
    assert_eq!(sort.get(), Some(SortStatus::ascending("name")));
}

#[test]
fn test_end_to_end_created_at() {
    let (cell, proposals) = recording_cell(Column::new("createdAt").sortable(), None);
    let node = render(&cell).unwrap();

    assert_eq!(node.tooltip(), Some("Created At"));
    assert!(node.flat_text().starts_with("Created At"));
    assert!(node.flat_text().contains('⇅'));
    assert_eq!(node.role(), Some(Role::Button));
    assert!(node.is_focusable());

    cell.on_key(&KeyCombo::key(Key::Enter));
    let recorded = proposals.lock().unwrap();
    assert_eq!(recorded.as_slice(), &[SortStatus {
        column_accessor: "createdAt".to_string(),
        direction: SortDirection::Ascending,
    }]);
}

#[test]
fn test_alignment_flows_into_layout() {
    let cell = HeaderCell::new(Column::new("amount").align(Alignment::Right).width(12));
    let node = render(&cell).unwrap();

    match node {
        Node::HeaderCell { layout, .. } => {
            assert_eq!(layout.align, Alignment::Right);
            assert_eq!(layout.resolve_width(80), 12);
        }
        other => panic!("expected header cell node, got {other:?}"),
    }
}
