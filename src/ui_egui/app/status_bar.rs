//! Status bar at the bottom of the window.
//!
//! Shows how many services are booked and a hint for the current interaction.

use super::SchedulerApp;
use egui::RichText;

/// Height of the bottom panel; toasts stack above it
pub(super) const STATUS_BAR_HEIGHT: f32 = 24.0;

impl SchedulerApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let secondary = self.active_theme.text_secondary;

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(RichText::new(self.booking_summary()).small());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(self.interaction_hint())
                                .small()
                                .color(secondary),
                        );
                    });
                });
            });
    }

    fn booking_summary(&self) -> String {
        match self.state.schedule().len() {
            0 => "No services booked".to_string(),
            1 => "1 service booked".to_string(),
            n => format!("{} services booked", n),
        }
    }

    fn interaction_hint(&self) -> String {
        if let Some(target) = self.state.dialog().target() {
            return format!("Assigning {} · Enter to save, Esc to cancel", target);
        }

        if let Some(source) = self.state.drag().source() {
            return format!("Moving {} · release on a slot, Esc to cancel", source);
        }

        "Click an empty slot to assign · drag a booking to move it".to_string()
    }
}
