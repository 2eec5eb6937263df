// Integration tests for the booking and drag flows
// Drives SchedulerState the way the grid and dialog do

mod fixtures;

use fixtures::{assignments, book, drag, slots};
use pretty_assertions::assert_eq;
use staff_scheduler::models::assignment::{AssignmentError, ColorTag, ServiceDuration};
use staff_scheduler::services::schedule::SlotAddress;
use staff_scheduler::ui_egui::actions::{ActionOutcome, SchedulerAction};
use staff_scheduler::ui_egui::views::layout::GridLayout;
use staff_scheduler::ui_egui::SchedulerState;
use test_case::test_case;

#[test]
fn test_book_haircut_for_alena() {
    let mut state = SchedulerState::new();
    book(
        &mut state,
        slots::alena_nine(),
        "Haircut",
        ColorTag::Blue,
        ServiceDuration::Thirty,
    );

    assert_eq!(
        state.schedule().get("Alena Geidt", "9:00"),
        Some(&assignments::haircut())
    );
    assert_eq!(state.schedule().len(), 1);
    assert!(!state.dialog().is_open());

    let layout = GridLayout::build(state.schedule());
    let occupied: Vec<_> = layout.occupied_cells().map(|cell| cell.address()).collect();
    assert_eq!(occupied, vec![slots::alena_nine()]);
}

#[test]
fn test_book_then_move_consult() {
    let mut state = SchedulerState::new();
    book(
        &mut state,
        slots::james_two_pm(),
        "Consult",
        ColorTag::Red,
        ServiceDuration::FortyFive,
    );
    assert!(state.schedule().is_occupied("James Herwitz", "14:00"));

    drag(&mut state, slots::james_two_pm(), slots::amy_eight());

    assert_eq!(state.schedule().get("James Herwitz", "14:00"), None);
    assert_eq!(
        state.schedule().get("Amy Jones", "8:00"),
        Some(&assignments::consult())
    );
    assert!(state.schedule().assignments_for("James Herwitz").is_empty());
    assert!(!state.drag().is_active());
}

#[test_case("" ; "empty")]
#[test_case("   " ; "spaces")]
#[test_case("\t\n" ; "tabs and newlines")]
fn test_blank_service_is_rejected(service: &str) {
    let mut state = SchedulerState::new();
    state.apply(SchedulerAction::OpenSlot(slots::alena_nine()));
    state.apply(SchedulerAction::EditService(service.to_string()));

    let outcome = state.apply(SchedulerAction::SaveAssignment);

    assert_eq!(outcome, ActionOutcome::Rejected(AssignmentError::EmptyServiceName));
    assert!(state.schedule().is_empty());
    assert!(state.dialog().is_open());
    assert!(state.dialog().form().map(|form| form.has_error()).unwrap_or(false));
}

#[test]
fn test_error_clears_on_edit_and_save_succeeds() {
    let mut state = SchedulerState::new();
    state.apply(SchedulerAction::OpenSlot(slots::alena_nine()));
    state.apply(SchedulerAction::SaveAssignment);
    assert!(state.dialog().form().map(|form| form.has_error()).unwrap_or(false));

    state.apply(SchedulerAction::EditService("Color".to_string()));
    assert!(!state.dialog().form().map(|form| form.has_error()).unwrap_or(true));

    let outcome = state.apply(SchedulerAction::SaveAssignment);
    assert!(outcome.changed_schedule());
}

#[test]
fn test_service_text_stored_untrimmed() {
    let mut state = SchedulerState::new();
    book(
        &mut state,
        slots::alena_nine(),
        "  Trim  ",
        ColorTag::Green,
        ServiceDuration::Fifteen,
    );

    let stored = state.schedule().get("Alena Geidt", "9:00").map(|a| a.service.as_str());
    assert_eq!(stored, Some("  Trim  "));
}

#[test]
fn test_reopening_dialog_starts_fresh() {
    let mut state = SchedulerState::new();
    state.apply(SchedulerAction::OpenSlot(slots::alena_nine()));
    state.apply(SchedulerAction::EditService("Half typed".to_string()));
    state.apply(SchedulerAction::SelectColor(ColorTag::Purple));
    state.apply(SchedulerAction::CancelAssignment);

    state.apply(SchedulerAction::OpenSlot(slots::brenda_last()));
    let form = state.dialog().form().cloned();

    let form = form.expect("dialog should be open");
    assert_eq!(form.service, "");
    assert_eq!(form.color, ColorTag::Green);
    assert_eq!(form.duration, ServiceDuration::Fifteen);
    assert_eq!(state.dialog().target(), Some(&slots::brenda_last()));
    assert!(state.schedule().is_empty());
}

#[test]
fn test_drop_over_occupied_slot_overwrites() {
    let mut state = SchedulerState::new();
    book(&mut state, slots::alena_nine(), "Haircut", ColorTag::Blue, ServiceDuration::Thirty);
    book(&mut state, slots::amy_eight(), "Color", ColorTag::Yellow, ServiceDuration::Sixty);

    state.apply(SchedulerAction::BeginDrag(slots::alena_nine()));
    let outcome = state.apply(SchedulerAction::DropOn(slots::amy_eight()));

    assert_eq!(
        outcome,
        ActionOutcome::Moved {
            from: slots::alena_nine(),
            to: slots::amy_eight(),
            replaced: true,
        }
    );
    assert_eq!(state.schedule().len(), 1);
    assert_eq!(
        state.schedule().get("Amy Jones", "8:00"),
        Some(&assignments::haircut())
    );
}

#[test]
fn test_drop_on_own_slot_keeps_assignment() {
    let mut state = SchedulerState::new();
    book(&mut state, slots::alena_nine(), "Haircut", ColorTag::Blue, ServiceDuration::Thirty);

    drag(&mut state, slots::alena_nine(), slots::alena_nine());

    assert_eq!(
        state.schedule().get("Alena Geidt", "9:00"),
        Some(&assignments::haircut())
    );
    assert_eq!(state.schedule().len(), 1);
}

#[test]
fn test_cancelled_drag_leaves_schedule_alone() {
    let mut state = SchedulerState::new();
    book(&mut state, slots::alena_nine(), "Haircut", ColorTag::Blue, ServiceDuration::Thirty);
    let before = state.schedule().clone();

    state.apply(SchedulerAction::BeginDrag(slots::alena_nine()));
    state.apply(SchedulerAction::HoverDrag {
        slot: None,
        pointer: None,
    });
    let outcome = state.apply(SchedulerAction::CancelDrag);

    assert_eq!(outcome, ActionOutcome::DragCancelled);
    assert_eq!(state.schedule(), &before);
    assert!(!state.drag().is_active());
}

#[test]
fn test_overlapping_long_services_are_kept() {
    let mut state = SchedulerState::new();
    book(&mut state, slots::alena_nine(), "Color", ColorTag::Purple, ServiceDuration::Sixty);
    book(
        &mut state,
        SlotAddress::new("Alena Geidt", "9:15"),
        "Trim",
        ColorTag::Green,
        ServiceDuration::Fifteen,
    );

    let booked: Vec<&str> = state
        .schedule()
        .assignments_for("Alena Geidt")
        .into_iter()
        .map(|(time, _)| time)
        .collect();
    assert_eq!(booked, vec!["9:00", "9:15"]);
}

#[test]
fn test_occupied_slot_does_not_open_dialog() {
    let mut state = SchedulerState::new();
    book(&mut state, slots::alena_nine(), "Haircut", ColorTag::Blue, ServiceDuration::Thirty);

    let outcome = state.apply(SchedulerAction::OpenSlot(slots::alena_nine()));

    assert_eq!(outcome, ActionOutcome::Ignored);
    assert!(!state.dialog().is_open());
}
