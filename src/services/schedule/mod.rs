//! In-memory schedule store.
//!
//! Maps an employee name to that employee's occupied slots, keyed by slot
//! label. A missing key means the slot is free. Nothing here validates names
//! or labels against the static grid; any string is a valid key.

use std::collections::HashMap;
use std::fmt;

use crate::models::assignment::Assignment;
use crate::models::time_slot::TimeSlot;

/// Address of a single slot: one employee at one time label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotAddress {
    pub employee: String,
    pub time: String,
}

impl SlotAddress {
    pub fn new(employee: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            employee: employee.into(),
            time: time.into(),
        }
    }
}

impl fmt::Display for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.employee, self.time)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleStore {
    slots: HashMap<String, HashMap<String, Assignment>>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, employee: &str, time: &str) -> Option<&Assignment> {
        self.slots.get(employee)?.get(time)
    }

    pub fn is_occupied(&self, employee: &str, time: &str) -> bool {
        self.get(employee, time).is_some()
    }

    /// Store `assignment` at the slot, returning whatever it replaced.
    pub fn set(&mut self, employee: &str, time: &str, assignment: Assignment) -> Option<Assignment> {
        self.slots
            .entry(employee.to_string())
            .or_default()
            .insert(time.to_string(), assignment)
    }

    /// Move the assignment at the source slot onto the destination slot.
    ///
    /// Returns `false` and leaves the store untouched when the source is free.
    /// Anything already at the destination is discarded. Moving a slot onto
    /// itself keeps its assignment.
    pub fn move_assignment(
        &mut self,
        from_employee: &str,
        from_time: &str,
        to_employee: &str,
        to_time: &str,
    ) -> bool {
        let Some(assignment) = self.take(from_employee, from_time) else {
            return false;
        };

        if let Some(replaced) = self.set(to_employee, to_time, assignment) {
            log::debug!(
                "Moving onto {} at {} discarded '{}'",
                to_employee,
                to_time,
                replaced.service
            );
        }

        true
    }

    /// Remove and return the assignment at a slot
    pub fn take(&mut self, employee: &str, time: &str) -> Option<Assignment> {
        let employee_slots = self.slots.get_mut(employee)?;
        let assignment = employee_slots.remove(time);
        if employee_slots.is_empty() {
            self.slots.remove(employee);
        }
        assignment
    }

    /// Number of occupied slots across all employees
    pub fn len(&self) -> usize {
        self.slots.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Occupied slots of one employee in time-of-day order.
    /// Labels outside the generated grid sort after it, alphabetically.
    pub fn assignments_for(&self, employee: &str) -> Vec<(&str, &Assignment)> {
        let mut entries: Vec<(&str, &Assignment)> = self
            .slots
            .get(employee)
            .map(|slots| {
                slots
                    .iter()
                    .map(|(time, assignment)| (time.as_str(), assignment))
                    .collect()
            })
            .unwrap_or_default();

        entries.sort_by(|(a, _), (b, _)| slot_order(a).cmp(&slot_order(b)));
        entries
    }
}

fn slot_order(label: &str) -> (usize, &str) {
    let index = TimeSlot::parse(label)
        .map(|slot| slot.index())
        .unwrap_or(usize::MAX);
    (index, label)
}
