//! Schedule grid rendering.
//!
//! Contains the header row, the outer loop over quarter-hour rows × employee
//! columns, the current time indicator, and drag bookkeeping. Cell rendering
//! is delegated to `slot_cell`.

use chrono::{Local, NaiveTime, Timelike};
use egui::{Align2, FontId, Id, LayerId, Order, Pos2, Rect, Stroke, Vec2};

use super::layout::{GridLayout, GridRow, SLOT_HEIGHT};
use super::palette::GridPalette;
use super::slot_cell::{paint_slot_block, render_slot_cell, SlotBlock};
use crate::models::assignment::QUARTER_MINUTES;
use crate::models::employee::EMPLOYEES;
use crate::models::time_slot::TimeSlot;
use crate::services::schedule::SlotAddress;
use crate::ui_egui::actions::SchedulerAction;
use crate::ui_egui::app::state::SchedulerState;

pub const TIME_LABEL_WIDTH: f32 = 64.0;
pub const HEADER_HEIGHT: f32 = 32.0;
pub const MIN_COLUMN_WIDTH: f32 = 120.0;

pub struct GridOptions {
    pub show_current_time: bool,
}

/// Column width that splits the available space between employees
pub fn column_width(available_width: f32) -> f32 {
    ((available_width - TIME_LABEL_WIDTH) / EMPLOYEES.len() as f32).max(MIN_COLUMN_WIDTH)
}

/// Render the header and the scrollable grid. Returns what the user did.
pub fn render_schedule_grid(
    ui: &mut egui::Ui,
    state: &SchedulerState,
    palette: &GridPalette,
    options: &GridOptions,
) -> Vec<SchedulerAction> {
    let mut actions = Vec::new();
    let col_width = column_width(ui.available_width());
    let layout = GridLayout::build(state.schedule());
    let drag = state.drag().active();

    ui.spacing_mut().item_spacing = Vec2::ZERO;
    render_header_row(ui, col_width, palette);

    let mut hovered_slot: Option<SlotAddress> = None;

    egui::ScrollArea::vertical()
        .id_source("schedule_grid_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing = Vec2::ZERO;
            let mut blocks: Vec<SlotBlock> = Vec::new();

            for row in &layout.rows {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::ZERO;
                    render_time_label(ui, row, palette);

                    for cell in &row.cells {
                        let output = render_slot_cell(ui, col_width, cell, drag, palette);
                        if output.pointer_inside {
                            hovered_slot = Some(cell.address());
                        }
                        actions.extend(output.action);
                        blocks.extend(output.block);
                    }
                });
            }

            // Blocks go on top of every row so long services cover the rows below
            let painter = ui.painter();
            for block in &blocks {
                paint_slot_block(painter, block, palette);
            }

            if options.show_current_time {
                draw_current_time_indicator(ui, col_width, palette);
            }
        });

    if let Some(context) = drag {
        let pointer = ui.ctx().pointer_interact_pos();
        if context.hovered != hovered_slot || context.pointer_pos != pointer {
            actions.push(SchedulerAction::HoverDrag {
                slot: hovered_slot.clone(),
                pointer,
            });
        }

        if let (Some(assignment), Some(pos)) = (
            state
                .schedule()
                .get(&context.source.employee, &context.source.time),
            pointer,
        ) {
            let anchor = Rect::from_min_size(
                pos - Vec2::new(col_width / 2.0, SLOT_HEIGHT / 2.0),
                Vec2::new(col_width, SLOT_HEIGHT),
            );
            let preview = SlotBlock::for_assignment(anchor, assignment);
            let painter = ui
                .ctx()
                .layer_painter(LayerId::new(Order::Tooltip, Id::new("slot_drag_preview")));
            paint_slot_block(&painter, &preview, palette);
        }

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            actions.push(SchedulerAction::CancelDrag);
        } else if ui.input(|i| i.pointer.primary_released()) {
            // Releasing outside the grid abandons the drag
            actions.push(match hovered_slot {
                Some(target) => SchedulerAction::DropOn(target),
                None => SchedulerAction::CancelDrag,
            });
        }

        ui.ctx().request_repaint();
    }

    actions
}

fn render_header_row(ui: &mut egui::Ui, col_width: f32, palette: &GridPalette) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = Vec2::ZERO;
        header_cell(ui, TIME_LABEL_WIDTH, "Time", Align2::LEFT_CENTER, palette);
        for employee in EMPLOYEES {
            header_cell(ui, col_width, employee, Align2::CENTER_CENTER, palette);
        }
    });
}

fn header_cell(ui: &mut egui::Ui, width: f32, text: &str, align: Align2, palette: &GridPalette) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, HEADER_HEIGHT), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.header_bg);
    painter.line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        Stroke::new(1.0, palette.hour_line),
    );

    let anchor = if align == Align2::LEFT_CENTER {
        Pos2::new(rect.left() + 6.0, rect.center().y)
    } else {
        rect.center()
    };
    painter.with_clip_rect(rect).text(
        anchor,
        align,
        text,
        FontId::proportional(14.0),
        palette.header_text,
    );
}

fn render_time_label(ui: &mut egui::Ui, row: &GridRow<'_>, palette: &GridPalette) {
    let (rect, _) =
        ui.allocate_exact_size(Vec2::new(TIME_LABEL_WIDTH, SLOT_HEIGHT), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.time_bg);
    painter.line_segment(
        [rect.right_top(), rect.right_bottom()],
        Stroke::new(1.0, palette.divider),
    );

    if row.slot.is_hour_start() {
        painter.line_segment(
            [rect.left_top(), rect.right_top()],
            Stroke::new(1.0, palette.hour_line),
        );
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &row.label,
            FontId::proportional(12.0),
            palette.time_text,
        );
    }
}

/// Vertical offset of `time` from the top of the grid body
pub fn current_time_offset(time: NaiveTime) -> f32 {
    let slot = TimeSlot::containing(time);
    let minute_in_slot = time.minute() - slot.minute();
    let fraction = minute_in_slot as f32 / QUARTER_MINUTES as f32;
    (slot.index() as f32 + fraction) * SLOT_HEIGHT
}

/// Draw the current time indicator line across the employee columns.
fn draw_current_time_indicator(ui: &egui::Ui, col_width: f32, palette: &GridPalette) {
    let y = ui.min_rect().top() + current_time_offset(Local::now().time());
    let x_start = ui.min_rect().left() + TIME_LABEL_WIDTH;
    let x_end = x_start + col_width * EMPLOYEES.len() as f32;

    let painter = ui.painter();
    painter.circle_filled(Pos2::new(x_start - 4.0, y), 3.0, palette.now_line);
    painter.line_segment(
        [Pos2::new(x_start, y), Pos2::new(x_end, y)],
        Stroke::new(2.0, palette.now_line),
    );

    ui.ctx()
        .request_repaint_after(std::time::Duration::from_secs(30));
}
