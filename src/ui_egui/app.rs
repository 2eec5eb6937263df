mod lifecycle;
mod menu;
pub mod state;
mod status_bar;
mod toast;

pub use self::lifecycle::load_settings_or_default;

use self::state::SchedulerState;
use self::toast::ToastManager;
use crate::models::settings::Settings;
use crate::services::settings::SettingsService;
use crate::ui_egui::actions::{ActionOutcome, SchedulerAction};
use crate::ui_egui::theme::SchedulerTheme;

pub struct SchedulerApp {
    /// Schedule plus the transient dialog and drag state
    state: SchedulerState,
    settings: Settings,
    /// Where settings are written on exit; `None` when no config dir exists
    settings_service: Option<SettingsService>,
    /// Currently applied theme colors
    active_theme: SchedulerTheme,
    toasts: ToastManager,
    pending_theme_apply: bool,
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl SchedulerApp {
    /// Run actions through the scheduler state in order
    fn dispatch(&mut self, actions: Vec<SchedulerAction>) {
        for action in actions {
            let outcome = self.state.apply(action);
            self.report_outcome(outcome);
        }
    }

    fn report_outcome(&mut self, outcome: ActionOutcome) {
        match outcome {
            ActionOutcome::Saved { target, service, .. } => {
                self.toasts
                    .success(format!("Assigned \"{}\" to {}", service.trim(), target));
            }
            ActionOutcome::Moved { from, to, .. } => {
                self.toasts.success(format!("Moved {} to {}", from, to));
            }
            ActionOutcome::DropIgnored => {
                self.toasts.info("That booking no longer exists");
            }
            ActionOutcome::Ignored
            | ActionOutcome::Updated
            | ActionOutcome::Rejected(_)
            | ActionOutcome::DragCancelled => {}
        }
    }
}
