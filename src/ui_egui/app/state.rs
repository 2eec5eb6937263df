use crate::services::schedule::{ScheduleStore, SlotAddress};
use crate::ui_egui::actions::{ActionOutcome, SchedulerAction};
use crate::ui_egui::assignment_dialog::{AssignmentDialogState, DialogSubmit};
use crate::ui_egui::drag::DragManager;

/// Everything the scheduler window owns.
///
/// The schedule is the only domain data; the dialog and drag state are
/// transient. Every change goes through [`SchedulerState::apply`].
#[derive(Debug, Clone, Default)]
pub struct SchedulerState {
    schedule: ScheduleStore,
    dialog: AssignmentDialogState,
    drag: DragManager,
}

impl SchedulerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self) -> &ScheduleStore {
        &self.schedule
    }

    pub fn dialog(&self) -> &AssignmentDialogState {
        &self.dialog
    }

    pub fn drag(&self) -> &DragManager {
        &self.drag
    }

    pub fn apply(&mut self, action: SchedulerAction) -> ActionOutcome {
        match action {
            SchedulerAction::OpenSlot(target) => self.open_slot(target),
            SchedulerAction::EditService(text) => self.edit_form(|dialog| dialog.edit_service(text)),
            SchedulerAction::SelectColor(color) => self.edit_form(|dialog| dialog.select_color(color)),
            SchedulerAction::SelectDuration(duration) => {
                self.edit_form(|dialog| dialog.select_duration(duration))
            }
            SchedulerAction::SaveAssignment => self.save_assignment(),
            SchedulerAction::CancelAssignment => {
                if !self.dialog.is_open() {
                    return ActionOutcome::Ignored;
                }
                self.dialog.cancel();
                ActionOutcome::Updated
            }
            SchedulerAction::BeginDrag(source) => self.begin_drag(source),
            SchedulerAction::HoverDrag { slot, pointer } => {
                if !self.drag.is_active() {
                    return ActionOutcome::Ignored;
                }
                self.drag.update_hover(slot, pointer);
                ActionOutcome::Updated
            }
            SchedulerAction::DropOn(target) => self.drop_on(target),
            SchedulerAction::CancelDrag => {
                let Some(source) = self.drag.source() else {
                    return ActionOutcome::Ignored;
                };
                log::debug!("Drag from {} cancelled", source);
                self.drag.cancel();
                ActionOutcome::DragCancelled
            }
        }
    }

    fn open_slot(&mut self, target: SlotAddress) -> ActionOutcome {
        if self.dialog.is_open() || self.drag.is_active() {
            return ActionOutcome::Ignored;
        }
        if self.schedule.is_occupied(&target.employee, &target.time) {
            return ActionOutcome::Ignored;
        }

        log::debug!("Opening assignment dialog for {}", target);
        self.dialog.open(target);
        ActionOutcome::Updated
    }

    fn edit_form(&mut self, edit: impl FnOnce(&mut AssignmentDialogState)) -> ActionOutcome {
        if !self.dialog.is_open() {
            return ActionOutcome::Ignored;
        }
        edit(&mut self.dialog);
        ActionOutcome::Updated
    }

    fn save_assignment(&mut self) -> ActionOutcome {
        match self.dialog.submit() {
            DialogSubmit::NotOpen => ActionOutcome::Ignored,
            DialogSubmit::Invalid(err) => {
                log::debug!("Assignment rejected: {}", err);
                ActionOutcome::Rejected(err)
            }
            DialogSubmit::Commit { target, assignment } => {
                let service = assignment.service.clone();
                let (color, duration) = (assignment.color, assignment.duration);
                let replaced = self
                    .schedule
                    .set(&target.employee, &target.time, assignment)
                    .is_some();
                log::info!(
                    "Assigned '{}' ({}, {}) to {} ({} slots booked)",
                    service,
                    color,
                    duration.label(),
                    target,
                    self.schedule.len()
                );
                ActionOutcome::Saved {
                    target,
                    service,
                    replaced,
                }
            }
        }
    }

    fn begin_drag(&mut self, source: SlotAddress) -> ActionOutcome {
        if self.dialog.is_open() {
            return ActionOutcome::Ignored;
        }
        if !self.schedule.is_occupied(&source.employee, &source.time) {
            return ActionOutcome::Ignored;
        }

        log::debug!("Dragging {}", source);
        self.drag.begin(source);
        ActionOutcome::Updated
    }

    fn drop_on(&mut self, target: SlotAddress) -> ActionOutcome {
        let Some(context) = self.drag.finish() else {
            return ActionOutcome::Ignored;
        };
        let from = context.source;

        let replaced = from != target && self.schedule.is_occupied(&target.employee, &target.time);
        let moved = self.schedule.move_assignment(
            &from.employee,
            &from.time,
            &target.employee,
            &target.time,
        );

        if !moved {
            log::debug!("Nothing left at {} to drop onto {}", from, target);
            return ActionOutcome::DropIgnored;
        }

        log::info!("Moved assignment from {} to {}", from, target);
        ActionOutcome::Moved {
            from,
            to: target,
            replaced,
        }
    }
}
