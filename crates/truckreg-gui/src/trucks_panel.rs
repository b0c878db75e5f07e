//! Truck registration and listing panel

use chrono::{Local, NaiveDate};
use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::DatePickerButton;
use truckreg_app::{registration, Session};
use truckreg_store::TruckStore;
use truckreg_types::FormError;

/// Panel for registering trucks and listing the session user's trucks
pub struct TrucksPanel {
    /// New truck form fields
    truck_number: String,
    driver_name: String,
    contact_number: String,
    registration_date: NaiveDate,
    /// Status message
    status_message: Option<(String, bool)>, // (message, is_error)
}

impl TrucksPanel {
    pub fn new() -> Self {
        Self {
            truck_number: String::new(),
            driver_name: String::new(),
            contact_number: String::new(),
            registration_date: Local::now().date_naive(),
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, trucks: &mut TruckStore, session: &mut Session) {
        let owner = match session.current_user() {
            Some(user) => user.to_string(),
            None => return,
        };

        ui.heading("Register a New Truck");
        ui.label(format!("Welcome, {}! Register your truck below.", owner));
        ui.add_space(10.0);

        self.render_form(ui, trucks, &owner);

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        self.render_truck_list(ui, trucks, &owner);

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        if ui.button("Logout").clicked() {
            session.logout();
            self.status_message = None;
        }
    }

    fn render_form(&mut self, ui: &mut Ui, trucks: &mut TruckStore, owner: &str) {
        egui::Grid::new("truck_form")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Truck number");
                ui.text_edit_singleline(&mut self.truck_number);
                ui.end_row();

                ui.label("Driver's name");
                ui.text_edit_singleline(&mut self.driver_name);
                ui.end_row();

                ui.label("Contact number");
                ui.text_edit_singleline(&mut self.contact_number);
                ui.end_row();

                ui.label("Registration date");
                ui.add(DatePickerButton::new(&mut self.registration_date));
                ui.end_row();
            });

        ui.add_space(10.0);

        if ui.button("Register Truck").clicked() {
            match registration::register_truck(
                trucks,
                &self.truck_number,
                &self.driver_name,
                &self.contact_number,
                self.registration_date,
                owner,
            ) {
                Ok(()) => {
                    self.status_message = Some((
                        format!("Truck {} registered successfully!", self.truck_number),
                        false,
                    ));
                    self.truck_number.clear();
                    self.driver_name.clear();
                    self.contact_number.clear();
                }
                Err(e) => {
                    let message = match e.as_form_error() {
                        Some(FormError::MissingField(_)) => {
                            "Please fill out all the fields.".to_string()
                        }
                        Some(FormError::DuplicateTruck) => {
                            "Truck number is already registered.".to_string()
                        }
                        _ => format!("Error saving truck data: {}", e),
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

    fn render_truck_list(&self, ui: &mut Ui, trucks: &TruckStore, owner: &str) {
        ui.heading(format!("Registered Trucks for {}", owner));
        ui.add_space(5.0);

        let owned = registration::list_owned_trucks(trucks, owner);
        if owned.is_empty() {
            ui.label("No trucks registered yet.");
            return;
        }

        egui::Grid::new("truck_list_grid")
            .num_columns(4)
            .spacing([10.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label(RichText::new("Truck Number").strong());
                ui.label(RichText::new("Driver's Name").strong());
                ui.label(RichText::new("Contact Number").strong());
                ui.label(RichText::new("Registration Date").strong());
                ui.end_row();

                for truck in owned {
                    ui.label(&truck.truck_number);
                    ui.label(&truck.driver_name);
                    ui.label(&truck.contact_number);
                    ui.label(truck.registration_date.to_string());
                    ui.end_row();
                }
            });
    }
}
