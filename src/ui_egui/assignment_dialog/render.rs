use egui::{Color32, Key, RichText, Sense, Stroke, Vec2};

use crate::models::assignment::{ColorTag, ServiceDuration};
use crate::ui_egui::actions::SchedulerAction;
use crate::ui_egui::theme::SchedulerTheme;
use crate::ui_egui::views::palette::resolve_color_tag;

use super::state::{AssignmentDialogState, AssignmentForm};

const FORM_LABEL_WIDTH: f32 = 90.0;
const SWATCH_SIZE: f32 = 24.0;
const ERROR_COLOR: Color32 = Color32::from_rgb(239, 68, 68);

/// Draw the dialog when it is open and report what the user did.
///
/// The state is only read here; edits come back as actions for the reducer.
pub fn render_assignment_dialog(
    ctx: &egui::Context,
    state: &AssignmentDialogState,
    theme: &SchedulerTheme,
) -> Vec<SchedulerAction> {
    let mut actions = Vec::new();
    let (Some(target), Some(form)) = (state.target(), state.form()) else {
        return actions;
    };

    let mut window_open = true;
    egui::Window::new("Assign service")
        .open(&mut window_open)
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format!(
                    "Assign service for {} at {}",
                    target.employee, target.time
                ))
                .strong()
                .size(16.0),
            );
            ui.add_space(8.0);

            render_service_field(ui, form, &mut actions);
            render_duration_row(ui, form, &mut actions);
            render_color_row(ui, form, theme, &mut actions);

            ui.add_space(8.0);
            render_action_buttons(ui, &mut actions);
        });

    if !window_open || ctx.input(|i| i.key_pressed(Key::Escape)) {
        actions.push(SchedulerAction::CancelAssignment);
    }

    actions
}

fn render_service_field(ui: &mut egui::Ui, form: &AssignmentForm, actions: &mut Vec<SchedulerAction>) {
    let mut service = form.service.clone();
    let stroke = if form.has_error() {
        Stroke::new(1.5, ERROR_COLOR)
    } else {
        Stroke::NONE
    };

    let response = egui::Frame::none()
        .stroke(stroke)
        .rounding(4.0)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut service)
                    .hint_text("Enter service name")
                    .desired_width(f32::INFINITY),
            )
        })
        .inner;

    if response.changed() {
        actions.push(SchedulerAction::EditService(service));
    }
    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
        actions.push(SchedulerAction::SaveAssignment);
    }

    if let Some(error) = &form.error {
        ui.label(RichText::new(error.to_string()).small().color(ERROR_COLOR));
    }
    ui.add_space(6.0);
}

fn render_duration_row(ui: &mut egui::Ui, form: &AssignmentForm, actions: &mut Vec<SchedulerAction>) {
    labeled_row(ui, RichText::new("Duration:").strong(), |ui| {
        egui::ComboBox::from_id_source("assignment_duration_combo")
            .selected_text(form.duration.label())
            .show_ui(ui, |ui| {
                for duration in ServiceDuration::ALL {
                    if ui
                        .selectable_label(form.duration == duration, duration.label())
                        .clicked()
                    {
                        actions.push(SchedulerAction::SelectDuration(duration));
                    }
                }
            });
    });
}

fn render_color_row(
    ui: &mut egui::Ui,
    form: &AssignmentForm,
    theme: &SchedulerTheme,
    actions: &mut Vec<SchedulerAction>,
) {
    labeled_row(ui, RichText::new("Choose color:").strong(), |ui| {
        for tag in ColorTag::ALL {
            let (rect, response) = ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::click());
            let radius = SWATCH_SIZE / 2.0 - 3.0;
            ui.painter()
                .circle_filled(rect.center(), radius, resolve_color_tag(tag));

            // Ring marks the current selection
            if form.color == tag {
                ui.painter()
                    .circle_stroke(rect.center(), radius + 2.5, Stroke::new(2.0, theme.text_primary));
            }

            if response.on_hover_text(tag.name()).clicked() {
                actions.push(SchedulerAction::SelectColor(tag));
            }
        }
    });
}

fn render_action_buttons(ui: &mut egui::Ui, actions: &mut Vec<SchedulerAction>) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.button("Cancel").clicked() {
            actions.push(SchedulerAction::CancelAssignment);
        }

        let save_button = egui::Button::new(RichText::new("Save").color(Color32::WHITE))
            .fill(Color32::from_rgb(59, 130, 246))
            .rounding(12.0);
        if ui.add(save_button).clicked() {
            actions.push(SchedulerAction::SaveAssignment);
        }
    });
}

fn labeled_row<F>(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        let text = label.into();
        ui.allocate_ui_with_layout(
            Vec2::new(FORM_LABEL_WIDTH, SWATCH_SIZE),
            egui::Layout::left_to_right(egui::Align::Center),
            move |ui| {
                ui.label(text);
            },
        );
        add_contents(ui);
    });
    ui.add_space(4.0);
}
