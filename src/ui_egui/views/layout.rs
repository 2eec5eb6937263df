//! Grid layout derived from the schedule.
//!
//! One row per quarter-hour, one cell per employee. The layout is rebuilt
//! every frame and holds only borrowed assignments.

use crate::models::assignment::{Assignment, ServiceDuration};
use crate::models::employee::EMPLOYEES;
use crate::models::time_slot::TimeSlot;
use crate::services::schedule::{ScheduleStore, SlotAddress};

/// Height of one quarter-hour row in points
pub const SLOT_HEIGHT: f32 = 24.0;

/// Height of the block drawn for an assignment.
///
/// Scales linearly with duration. The block reaches over the following rows
/// without reserving them; they stay free for clicks and drops.
pub fn block_height(duration: ServiceDuration, slot_height: f32) -> f32 {
    duration.quarter_span() as f32 * slot_height
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridCell<'a> {
    pub employee: &'static str,
    pub slot: TimeSlot,
    pub time: String,
    pub assignment: Option<&'a Assignment>,
}

impl GridCell<'_> {
    pub fn address(&self) -> SlotAddress {
        SlotAddress::new(self.employee, self.time.clone())
    }

    pub fn is_occupied(&self) -> bool {
        self.assignment.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRow<'a> {
    pub slot: TimeSlot,
    pub label: String,
    pub cells: Vec<GridCell<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout<'a> {
    pub rows: Vec<GridRow<'a>>,
}

impl<'a> GridLayout<'a> {
    pub fn build(schedule: &'a ScheduleStore) -> Self {
        let rows = TimeSlot::all()
            .map(|slot| {
                let label = slot.label();
                let cells = EMPLOYEES
                    .iter()
                    .map(|&employee| GridCell {
                        employee,
                        slot,
                        time: label.clone(),
                        assignment: schedule.get(employee, &label),
                    })
                    .collect();
                GridRow { slot, label, cells }
            })
            .collect();

        Self { rows }
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = &GridCell<'a>> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.is_occupied())
    }
}
