// Test fixtures - reusable test data
// Provides consistent slots and assignments across all test files

#![allow(dead_code)]

use staff_scheduler::models::assignment::{Assignment, ColorTag, ServiceDuration};
use staff_scheduler::services::schedule::SlotAddress;
use staff_scheduler::ui_egui::actions::SchedulerAction;
use staff_scheduler::ui_egui::SchedulerState;

/// Sample slots for testing
pub mod slots {
    use super::*;

    /// Alena Geidt at 9:00
    pub fn alena_nine() -> SlotAddress {
        SlotAddress::new("Alena Geidt", "9:00")
    }

    /// James Herwitz at 14:00
    pub fn james_two_pm() -> SlotAddress {
        SlotAddress::new("James Herwitz", "14:00")
    }

    /// Amy Jones at 8:00
    pub fn amy_eight() -> SlotAddress {
        SlotAddress::new("Amy Jones", "8:00")
    }

    /// Brenda Massey at the last slot of the day
    pub fn brenda_last() -> SlotAddress {
        SlotAddress::new("Brenda Massey", "23:45")
    }
}

/// Sample assignments for testing
pub mod assignments {
    use super::*;

    pub fn haircut() -> Assignment {
        Assignment::new("Haircut", ColorTag::Blue, ServiceDuration::Thirty)
    }

    pub fn consult() -> Assignment {
        Assignment::new("Consult", ColorTag::Red, ServiceDuration::FortyFive)
    }
}

/// Drive the dialog through a complete booking of `service` at `target`
pub fn book(
    state: &mut SchedulerState,
    target: SlotAddress,
    service: &str,
    color: ColorTag,
    duration: ServiceDuration,
) {
    state.apply(SchedulerAction::OpenSlot(target));
    state.apply(SchedulerAction::EditService(service.to_string()));
    state.apply(SchedulerAction::SelectColor(color));
    state.apply(SchedulerAction::SelectDuration(duration));
    state.apply(SchedulerAction::SaveAssignment);
}

/// Drag the assignment at `from` and release it over `to`
pub fn drag(state: &mut SchedulerState, from: SlotAddress, to: SlotAddress) {
    state.apply(SchedulerAction::BeginDrag(from));
    state.apply(SchedulerAction::HoverDrag {
        slot: Some(to.clone()),
        pointer: None,
    });
    state.apply(SchedulerAction::DropOn(to));
}
