//! Selection store: set membership for picked slots plus the drag-fill
//! lifecycle (begin on pointer down, box-fill while held, end on release).

use std::collections::HashSet;

use super::slot::{IntervalType, SelectedSlot};

/// In-memory set of selected slots with an optional active drag.
///
/// Session-only; nothing here is ever persisted.
#[derive(Debug, Default, Clone)]
pub struct SelectionStore {
    slots: HashSet<SelectedSlot>,
    drag_anchor: Option<SelectedSlot>,
    /// Set once the drag has visited a cell other than the anchor.
    drag_moved: bool,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, slot: SelectedSlot) -> bool {
        self.slots.contains(&slot)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedSlot> {
        self.slots.iter()
    }

    /// Flip membership of the exact triple.
    pub fn toggle(&mut self, slot: SelectedSlot) {
        if !self.slots.remove(&slot) {
            self.slots.insert(slot);
        }
    }

    /// Pointer down on a cell: toggle it and make it the drag anchor.
    pub fn begin_drag(&mut self, slot: SelectedSlot) {
        self.toggle(slot);
        self.drag_anchor = Some(slot);
        self.drag_moved = false;
    }

    /// Pointer held over `current`: replace the entire selection with the
    /// box between the anchor and `current`.
    ///
    /// Hovering the anchor cell itself does nothing until the drag has
    /// left it once, so a plain click stays a toggle.
    pub fn update_drag(&mut self, current: SelectedSlot, interval: IntervalType) {
        let Some(anchor) = self.drag_anchor else {
            return;
        };
        if current != anchor {
            self.drag_moved = true;
        }
        if self.drag_moved {
            self.slots = drag_box(anchor, current, interval);
        }
    }

    /// Pointer released anywhere: the drag gesture is over.
    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
        self.drag_moved = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }
}

/// Axis-aligned box fill between the drag anchor and the hovered cell.
///
/// Day and hour are true min/max ranges. For minutes, with `lo`/`hi` the
/// min/max of the two endpoint minutes, a minute step is included at the
/// lowest hour when >= `lo`, at the highest hour when <= `hi`, and always
/// at hours strictly in between. When the drag stays within a single hour
/// the two boundary clauses overlap and the whole hour row fills.
pub fn drag_box(
    anchor: SelectedSlot,
    current: SelectedSlot,
    interval: IntervalType,
) -> HashSet<SelectedSlot> {
    let min_day = anchor.day.min(current.day);
    let max_day = anchor.day.max(current.day);
    let min_hour = anchor.hour.min(current.hour);
    let max_hour = anchor.hour.max(current.hour);
    let lo = anchor.minute.min(current.minute);
    let hi = anchor.minute.max(current.minute);

    let mut slots = HashSet::new();
    for day in min_day..=max_day {
        for hour in min_hour..=max_hour {
            for &minute in interval.minutes() {
                let at_min = hour == min_hour && minute >= lo;
                let at_max = hour == max_hour && minute <= hi;
                let between = hour > min_hour && hour < max_hour;
                if at_min || at_max || between {
                    slots.insert(SelectedSlot::new(day, hour, minute));
                }
            }
        }
    }
    slots
}
