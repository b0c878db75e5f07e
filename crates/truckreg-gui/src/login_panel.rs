//! Login form panel

use eframe::egui::{self, Color32, RichText, Ui};
use truckreg_app::{auth, Session};
use truckreg_store::UserStore;

/// Panel for logging in to an existing account
pub struct LoginPanel {
    username: String,
    password: String,
    /// Status message
    status_message: Option<(String, bool)>, // (message, is_error)
}

impl LoginPanel {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, users: &UserStore, session: &mut Session) {
        ui.heading("Log in to Your Account");
        ui.add_space(10.0);

        egui::Grid::new("login_form")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Username");
                ui.text_edit_singleline(&mut self.username);
                ui.end_row();

                ui.label("Password");
                ui.add(egui::TextEdit::singleline(&mut self.password).password(true));
                ui.end_row();
            });

        ui.add_space(10.0);

        if ui.button("Login").clicked() {
            match auth::login(users, session, &self.username, &self.password) {
                Ok(()) => {
                    self.status_message = Some((format!("Welcome, {}!", self.username), false));
                    self.password.clear();
                }
                Err(_) => {
                    self.status_message =
                        Some(("Invalid username or password.".to_string(), true));
                }
            }
        }

        if let Some((ref msg, is_error)) = self.status_message {
            ui.add_space(10.0);
            let color = if is_error {
                Color32::LIGHT_RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    }
}
