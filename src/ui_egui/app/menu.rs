use super::SchedulerApp;
use crate::models::settings::{Settings, ThemePreference};
use egui::Context;
use std::time::Duration;

impl SchedulerApp {
    pub(super) fn render_menu_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                self.render_view_menu(ui);
            });
        });
    }

    fn render_view_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("View", |ui| {
            ui.menu_button("🎨 Theme", |ui| {
                for (preference, label) in [
                    (ThemePreference::Light, "Light"),
                    (ThemePreference::Dark, "Dark"),
                    (ThemePreference::System, "Follow System"),
                ] {
                    if ui
                        .radio(self.settings.theme == preference, label)
                        .clicked()
                    {
                        self.set_theme_preference(preference);
                        ui.close_menu();
                    }
                }
            });

            if ui
                .checkbox(&mut self.settings.show_current_time, "Show Current Time")
                .changed()
            {
                log::debug!("Current time marker: {}", self.settings.show_current_time);
            }

            ui.separator();

            if ui.button("↺ Reset Preferences").clicked() {
                self.reset_preferences();
                ui.close_menu();
            }
        });
    }

    fn set_theme_preference(&mut self, preference: ThemePreference) {
        if self.settings.theme != preference {
            log::info!("Theme changed to {:?}", preference);
            self.settings.theme = preference;
            self.pending_theme_apply = true;
        }
    }

    /// Restore default preferences. The window keeps its current size.
    fn reset_preferences(&mut self) {
        if let Some(service) = &self.settings_service {
            if let Err(err) = service.reset() {
                log::error!("Failed to reset settings: {:#}", err);
                return;
            }
        }

        self.settings = Settings {
            window_width: self.settings.window_width,
            window_height: self.settings.window_height,
            ..Settings::default()
        };
        self.toasts
            .set_duration(Duration::from_secs(self.settings.toast_seconds));
        self.pending_theme_apply = true;
        self.toasts.info("Preferences reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::settings::SettingsService;
    use tempfile::TempDir;

    #[test]
    fn test_reset_preferences_restores_defaults_and_keeps_window() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));
        let settings = Settings {
            theme: ThemePreference::Dark,
            show_current_time: false,
            window_width: 1280.0,
            window_height: 900.0,
            toast_seconds: 8,
        };
        service.save(&settings).unwrap();

        let mut app = SchedulerApp::with_settings(settings, Some(service));
        app.reset_preferences();

        assert_eq!(app.settings().theme, ThemePreference::Light);
        assert!(app.settings().show_current_time);
        assert_eq!(app.settings().window_width, 1280.0);
        assert_eq!(app.settings().window_height, 900.0);

        let on_disk = SettingsService::new(dir.path().join("settings.toml"))
            .load()
            .unwrap();
        assert_eq!(on_disk, Settings::default());
    }

    #[test]
    fn test_theme_change_requests_reapply() {
        let mut app = SchedulerApp::with_settings(Settings::default(), None);
        app.pending_theme_apply = false;

        app.set_theme_preference(ThemePreference::Light);
        assert!(!app.pending_theme_apply);

        app.set_theme_preference(ThemePreference::Dark);
        assert!(app.pending_theme_apply);
        assert_eq!(app.settings().theme, ThemePreference::Dark);
    }
}
