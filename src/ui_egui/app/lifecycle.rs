use super::state::SchedulerState;
use super::toast::ToastManager;
use super::SchedulerApp;
use crate::models::settings::{Settings, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::services::settings::SettingsService;
use crate::ui_egui::assignment_dialog::render_assignment_dialog;
use crate::ui_egui::theme::SchedulerTheme;
use crate::ui_egui::views::palette::GridPalette;
use crate::ui_egui::views::schedule_grid::{render_schedule_grid, GridOptions};
use std::time::Duration;

impl SchedulerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_service: Option<SettingsService>,
    ) -> Self {
        let mut app = Self::with_settings(settings, settings_service);
        app.apply_theme(&cc.egui_ctx);
        app
    }

    /// Build the app without a window. The theme is applied on the first frame.
    pub fn with_settings(settings: Settings, settings_service: Option<SettingsService>) -> Self {
        let active_theme = SchedulerTheme::for_preference(settings.theme);
        let toasts = ToastManager::new(Duration::from_secs(settings.toast_seconds));

        Self {
            state: SchedulerState::new(),
            settings,
            settings_service,
            active_theme,
            toasts,
            pending_theme_apply: true,
        }
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(super) fn apply_theme(&mut self, ctx: &egui::Context) {
        self.active_theme = SchedulerTheme::for_preference(self.settings.theme);
        self.active_theme.apply_to_context(ctx);
        self.pending_theme_apply = false;
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.pending_theme_apply {
            self.apply_theme(ctx);
        }

        self.remember_window_size(ctx);

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);

        let palette = GridPalette::from_theme(&self.active_theme);
        let options = GridOptions {
            show_current_time: self.settings.show_current_time,
        };
        // The grid stays visible but inert while the dialog is up
        let grid_enabled = !self.state.dialog().is_open();

        let grid_actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_enabled_ui(grid_enabled, |ui| {
                    render_schedule_grid(ui, &self.state, &palette, &options)
                })
                .inner
            })
            .inner;
        self.dispatch(grid_actions);

        let dialog_actions = render_assignment_dialog(ctx, self.state.dialog(), &self.active_theme);
        self.dispatch(dialog_actions);

        self.toasts.render(ctx, self.active_theme.is_dark);
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let Some(service) = &self.settings_service else {
            return;
        };

        if let Err(err) = service.save(&self.settings) {
            log::error!("Failed to save settings on exit: {:#}", err);
        }
    }

    fn remember_window_size(&mut self, ctx: &egui::Context) {
        let Some(rect) = ctx.input(|i| i.viewport().inner_rect) else {
            return;
        };

        if rect.width() >= MIN_WINDOW_WIDTH && rect.height() >= MIN_WINDOW_HEIGHT {
            self.settings.window_width = rect.width();
            self.settings.window_height = rect.height();
        }
    }
}

/// Load settings through `service`, logging and falling back to defaults on failure
pub fn load_settings_or_default(service: Option<&SettingsService>) -> Settings {
    let Some(service) = service else {
        log::warn!("No config directory available, settings will not persist");
        return Settings::default();
    };

    match service.load() {
        Ok(settings) => {
            log::info!(
                "Loaded settings from {}: theme={:?}, window={}x{}",
                service.path().display(),
                settings.theme,
                settings.window_width,
                settings.window_height
            );
            settings
        }
        Err(err) => {
            log::warn!("Failed to load settings, using defaults: {:#}", err);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ThemePreference;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_without_service_uses_defaults() {
        assert_eq!(load_settings_or_default(None), Settings::default());
    }

    #[test]
    fn test_load_broken_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = [").unwrap();

        let service = SettingsService::new(&path);
        assert_eq!(load_settings_or_default(Some(&service)), Settings::default());
    }

    #[test]
    fn test_with_settings_starts_empty() {
        let settings = Settings {
            theme: ThemePreference::Dark,
            ..Settings::default()
        };
        let app = SchedulerApp::with_settings(settings, None);

        assert!(app.state().schedule().is_empty());
        assert!(!app.state().dialog().is_open());
        assert_eq!(app.settings().theme, ThemePreference::Dark);
        assert!(app.active_theme.is_dark);
    }
}
