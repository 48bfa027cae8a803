use eframe::{App, Frame, egui};
use egui::{Color32, RichText};
use std::time::{Duration, Instant};

use crate::form::PasswordForm;
use crate::settings::AppSettings;

/// The main eframe app struct
pub struct PassGenApp {
    pub form: PasswordForm,

    // Only show the length error once the field has been edited
    pub length_touched: bool,
    pub status_msg: Option<String>,

    // Clipboard auto-clear
    pub clipboard_copy_time: Option<Instant>,

    // Application settings
    pub settings: AppSettings,
    pub show_settings: bool,
}

impl Default for PassGenApp {
    fn default() -> Self {
        Self::with_settings(AppSettings::load())
    }
}

impl PassGenApp {
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            form: PasswordForm::new(settings.initial_selection()),
            length_touched: false,
            status_msg: None,
            clipboard_copy_time: None,
            settings,
            show_settings: false,
        }
    }

    /// Runs the form submit and records any failure for display.
    pub fn generate(&mut self) {
        self.length_touched = true;
        match self.form.submit() {
            Ok(()) => self.status_msg = None,
            Err(e) => {
                log::debug!("Password not generated: {e}");
                self.status_msg = Some(e.to_string());
            }
        }
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.length_touched = false;
        self.status_msg = None;
    }

    pub fn clipboard_expired(&self) -> bool {
        self.clipboard_copy_time
            .is_some_and(|t| t.elapsed().as_secs() >= self.settings.clipboard_timeout_u64())
    }

    fn copy_password(&mut self, ctx: &egui::Context) {
        if let Some(pwd) = self.form.password() {
            ctx.copy_text(pwd.to_owned());
            self.clipboard_copy_time = Some(Instant::now());
            self.status_msg = Some(format!(
                "Copied. Clipboard clears in {}s.",
                self.settings.clipboard_clear_seconds
            ));
        }
    }

    fn show_form_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading(RichText::new("Password Generator").size(32.0));
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Password length");
                if self.length_touched {
                    if let Some(err) = self.form.length_error() {
                        ui.label(RichText::new(err.to_string()).small().color(Color32::RED));
                    }
                }
            });
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.form.length_input)
                    .hint_text("Ex. 8")
                    .desired_width(80.0),
            );
            if resp.changed() || resp.lost_focus() {
                self.length_touched = true;
            }
        });

        let sel = self.form.selection;
        let mut lower = sel.include_lower;
        if ui.checkbox(&mut lower, "Include Lower case").changed() {
            self.form.toggle_lower();
        }
        let mut upper = sel.include_upper;
        if ui.checkbox(&mut upper, "Include Upper case").changed() {
            self.form.toggle_upper();
        }
        let mut digits = sel.include_digits;
        if ui.checkbox(&mut digits, "Include Numbers").changed() {
            self.form.toggle_digits();
        }
        let mut symbols = sel.include_symbols;
        if ui.checkbox(&mut symbols, "Include Symbols").changed() {
            self.form.toggle_symbols();
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.form.is_valid(), egui::Button::new("Generate Password"))
                .clicked()
            {
                self.generate();
            }
            if ui.button("Reset").clicked() {
                self.reset();
            }
        });

        if let Some(msg) = &self.status_msg {
            ui.label(RichText::new(msg).color(Color32::YELLOW));
        }
    }

    fn show_result_ui(&mut self, ui: &mut egui::Ui) {
        let mut copy_clicked = false;
        if let Some(pwd) = self.form.password() {
            ui.separator();
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.heading(RichText::new("Result:").size(26.0));
                ui.label(RichText::new("Select the text or press Copy.").color(Color32::GRAY));
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(RichText::new(pwd).monospace().size(22.0)).selectable(true),
                    );
                });
                copy_clicked = ui.button("Copy").clicked();
            });
        }
        if copy_clicked {
            self.copy_password(ui.ctx());
        }
    }

    fn show_settings_ui(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.checkbox(&mut self.show_settings, "Settings");
        if !self.show_settings {
            return;
        }

        let mut seconds = self.settings.clipboard_clear_seconds;
        ui.horizontal(|ui| {
            ui.label("Clear clipboard after:");
            ui.add(egui::Slider::new(&mut seconds, 10..=120).text("s"));
        });
        self.settings.set_clipboard_timeout(seconds);
        ui.checkbox(
            &mut self.settings.remember_selection,
            "Remember character classes",
        );

        if ui.button("Save Settings").clicked() {
            self.settings.saved_selection = self.form.selection;
            match self.settings.save() {
                Ok(()) => self.status_msg = Some("Settings saved.".into()),
                Err(e) => {
                    log::warn!("Failed to save settings: {e}");
                    self.status_msg = Some(format!("Failed to save settings: {e}"));
                }
            }
        }
    }
}

impl App for PassGenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Check clipboard auto-clear (using settings)
        if self.clipboard_expired() {
            ctx.copy_text(String::new());
            self.clipboard_copy_time = None;
            log::debug!("Clipboard cleared");
        }
        if self.clipboard_copy_time.is_some() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }

        // Ctrl+G: Generate, Escape: Reset
        let (generate, reset) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::G),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if generate && self.form.is_valid() {
            self.generate();
        }
        if reset {
            self.reset();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.show_form_ui(ui);
                    self.show_result_ui(ui);
                    self.show_settings_ui(ui);
                });
        });
    }
}

// Persist remembered toggles on the way out; the form scrubs its own password
impl Drop for PassGenApp {
    fn drop(&mut self) {
        if self.settings.remember_selection {
            self.settings.saved_selection = self.form.selection;
            if let Err(e) = self.settings.save() {
                log::warn!("Failed to save settings on exit: {e}");
            }
        }
    }
}
