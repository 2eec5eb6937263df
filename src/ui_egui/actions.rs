//! User intents raised by the grid and the dialog, and what applying them did.

use egui::Pos2;

use crate::models::assignment::{AssignmentError, ColorTag, ServiceDuration};
use crate::services::schedule::SlotAddress;

#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerAction {
    /// Empty cell clicked
    OpenSlot(SlotAddress),
    EditService(String),
    SelectColor(ColorTag),
    SelectDuration(ServiceDuration),
    SaveAssignment,
    CancelAssignment,
    /// Occupied cell picked up
    BeginDrag(SlotAddress),
    /// Slot under the pointer while dragging, `None` outside the grid
    HoverDrag {
        slot: Option<SlotAddress>,
        pointer: Option<Pos2>,
    },
    /// Pointer released over a slot
    DropOn(SlotAddress),
    CancelDrag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Not applicable in the current state
    Ignored,
    /// Transient dialog or drag state changed; the schedule did not
    Updated,
    /// Save refused; the dialog stays open
    Rejected(AssignmentError),
    Saved {
        target: SlotAddress,
        service: String,
        replaced: bool,
    },
    Moved {
        from: SlotAddress,
        to: SlotAddress,
        replaced: bool,
    },
    /// The dragged assignment no longer existed at drop time
    DropIgnored,
    DragCancelled,
}

impl ActionOutcome {
    /// Whether the schedule itself changed
    pub fn changed_schedule(&self) -> bool {
        matches!(self, ActionOutcome::Saved { .. } | ActionOutcome::Moved { .. })
    }
}
