//! Sign-up form panel

use eframe::egui::{self, Color32, RichText, Ui};
use truckreg_app::{auth, Session};
use truckreg_store::UserStore;
use truckreg_types::FormError;

/// Panel for creating a new account
pub struct SignupPanel {
    username: String,
    password: String,
    /// Status message
    status_message: Option<(String, bool)>, // (message, is_error)
}

impl SignupPanel {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, users: &mut UserStore, session: &mut Session) {
        ui.heading("Create a New Account");
        ui.label("Fill out the details below to register your account.");
        ui.add_space(10.0);

        egui::Grid::new("signup_form")
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

        if ui.button("Create Account").clicked() {
            match auth::register(users, session, &self.username, &self.password) {
                Ok(()) => {
                    self.status_message = Some((
                        "Account registered successfully! You are now logged in.".to_string(),
                        false,
                    ));
                    self.password.clear();
                }
                Err(e) => {
                    let message = match e.as_form_error() {
                        Some(FormError::DuplicateUser) => {
                            "Username already exists. Please choose a different username."
                                .to_string()
                        }
                        Some(FormError::MissingField(_)) => {
                            "Please fill out both fields.".to_string()
                        }
                        _ => format!("Failed to register account: {}", e),
                    };
                    self.status_message = Some((message, true));
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
