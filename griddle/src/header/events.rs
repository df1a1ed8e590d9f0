//! Event handling for the header cell.

use crate::events::{ComponentEvents, EventResult, Key, KeyCombo};
use crate::sort::next_sort_status;

use super::HeaderCell;

impl HeaderCell {
    /// Compute the next sort status and emit it through the host callback.
    ///
    /// Each activation proposes exactly one status. Non-sortable columns
    /// and cells without a callback ignore activation entirely.
    fn activate(&self) -> EventResult {
        let Some(handler) = &self.on_sort_status_change else {
            return EventResult::Ignored;
        };
        let Some(next) = next_sort_status(
            &self.column.accessor,
            self.column.sortable,
            self.sort_status.as_ref(),
        ) else {
            return EventResult::Ignored;
        };
        handler(next);
        EventResult::Consumed
    }
}

impl ComponentEvents for HeaderCell {
    fn on_click(&self, _x: u16, _y: u16) -> EventResult {
        self.activate()
    }

    fn on_key(&self, key: &KeyCombo) -> EventResult {
        // Enter activates sorting regardless of modifiers. Space does not.
        if key.key == Key::Enter {
            self.activate()
        } else {
            EventResult::Ignored
        }
    }
}
