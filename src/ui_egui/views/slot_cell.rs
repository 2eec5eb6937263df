//! Single slot cell of the schedule grid.
//!
//! Paints the cell background and grid lines, reports clicks on free slots
//! and drag starts on occupied ones, and measures the block an assignment
//! occupies. Blocks are painted later by the grid so they sit above the rows
//! they reach over.

use egui::{Color32, CursorIcon, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::layout::{block_height, GridCell, SLOT_HEIGHT};
use super::palette::{resolve_color_tag, with_alpha, GridPalette};
use crate::models::assignment::Assignment;
use crate::ui_egui::actions::SchedulerAction;
use crate::ui_egui::drag::DragContext;

/// Painted block of an occupied slot
#[derive(Debug, Clone)]
pub struct SlotBlock {
    pub rect: Rect,
    pub service: String,
    pub color: Color32,
    /// The block is being dragged
    pub dimmed: bool,
}

impl SlotBlock {
    pub fn for_assignment(cell_rect: Rect, assignment: &Assignment) -> Self {
        Self {
            rect: block_rect(cell_rect.min, cell_rect.width(), assignment),
            service: assignment.service.clone(),
            color: resolve_color_tag(assignment.color),
            dimmed: false,
        }
    }
}

pub struct SlotCellOutput {
    pub action: Option<SchedulerAction>,
    pub block: Option<SlotBlock>,
    /// Pointer is inside the visible part of this cell
    pub pointer_inside: bool,
}

/// Block rectangle anchored at the top-left of its cell
pub fn block_rect(cell_min: Pos2, cell_width: f32, assignment: &Assignment) -> Rect {
    Rect::from_min_size(
        cell_min + Vec2::new(2.0, 1.0),
        Vec2::new(
            cell_width - 4.0,
            block_height(assignment.duration, SLOT_HEIGHT) - 2.0,
        ),
    )
}

pub fn render_slot_cell(
    ui: &mut egui::Ui,
    width: f32,
    cell: &GridCell<'_>,
    drag: Option<&DragContext>,
    palette: &GridPalette,
) -> SlotCellOutput {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(width, SLOT_HEIGHT), Sense::click_and_drag());
    let address = cell.address();
    let dragging = drag.is_some();

    let pointer_inside = ui
        .ctx()
        .pointer_interact_pos()
        .or_else(|| ui.input(|i| i.pointer.hover_pos()))
        .map(|pos| rect.contains(pos) && ui.clip_rect().contains(pos))
        .unwrap_or(false);

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.cell_bg);

    let enabled = ui.is_enabled();
    if invites_click(cell, pointer_inside, enabled, dragging) {
        painter.rect_filled(rect, 0.0, palette.hover_overlay);
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }

    let line_color = if cell.slot.is_hour_start() {
        palette.hour_line
    } else {
        palette.slot_line
    };
    painter.line_segment(
        [rect.left_top(), rect.right_top()],
        Stroke::new(1.0, line_color),
    );
    painter.line_segment(
        [rect.right_top(), rect.right_bottom()],
        Stroke::new(1.0, palette.divider),
    );

    // Drop target highlight
    if drag.map(|ctx| ctx.is_hovering(&address)).unwrap_or(false) {
        let highlight = rect.shrink2(Vec2::new(3.0, 2.0));
        painter.rect_filled(highlight, 2.0, palette.drop_fill);
        painter.rect_stroke(highlight, 2.0, Stroke::new(1.5, palette.drop_stroke));
    }

    let Some(assignment) = cell.assignment else {
        let action = (response.clicked() && !dragging).then_some(SchedulerAction::OpenSlot(address));
        return SlotCellOutput {
            action,
            block: None,
            pointer_inside,
        };
    };

    let mut block = SlotBlock::for_assignment(rect, assignment);
    block.dimmed = drag.map(|ctx| ctx.source == address).unwrap_or(false);

    let action = response
        .drag_started()
        .then_some(SchedulerAction::BeginDrag(address));

    if dragging {
        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
    } else if pointer_inside && enabled {
        ui.ctx().set_cursor_icon(CursorIcon::Grab);
        response.on_hover_text(format!(
            "{}\n{} · {}",
            assignment.service,
            cell.time,
            assignment.duration.label()
        ));
    }

    SlotCellOutput {
        action,
        block: Some(block),
        pointer_inside,
    }
}

/// A free cell under the pointer of an enabled, idle grid reacts to clicks
fn invites_click(cell: &GridCell<'_>, pointer_inside: bool, enabled: bool, dragging: bool) -> bool {
    pointer_inside && enabled && !dragging && !cell.is_occupied()
}

/// Paint an assignment block with its service name centered
pub fn paint_slot_block(painter: &Painter, block: &SlotBlock, palette: &GridPalette) {
    let (fill, text) = if block.dimmed {
        (with_alpha(block.color, 90), with_alpha(palette.block_text, 140))
    } else {
        (block.color, palette.block_text)
    };

    painter.rect_filled(block.rect, 4.0, fill);
    painter.with_clip_rect(block.rect).text(
        block.rect.center(),
        egui::Align2::CENTER_CENTER,
        &block.service,
        FontId::proportional(13.0),
        text,
    );
}
