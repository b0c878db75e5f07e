//! Main application structure with tab navigation

use eframe::egui::{self, Color32, RichText};
use truckreg_app::{Config, Session};
use truckreg_store::{TruckStore, UserStore};

use crate::login_panel::LoginPanel;
use crate::signup_panel::SignupPanel;
use crate::trucks_panel::TrucksPanel;

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    SignUp,
    Login,
    Trucks,
}

impl Tab {
    /// Get the label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            Tab::SignUp => "Sign Up",
            Tab::Login => "Login",
            Tab::Trucks => "My Trucks",
        }
    }
}

/// Main application state
pub struct TruckregApp {
    /// Currently selected tab
    current_tab: Tab,
    /// Sign-up panel state
    signup_panel: SignupPanel,
    /// Login panel state
    login_panel: LoginPanel,
    /// Truck registration panel state
    trucks_panel: TrucksPanel,
    /// User account table
    users: UserStore,
    /// Truck registration table
    trucks: TruckStore,
    /// Authenticated-user session for this window
    session: Session,
    /// Table recovery warnings gathered at startup
    warnings: Vec<String>,
}

impl TruckregApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load().unwrap_or_default();

        let users_path = config
            .users_path()
            .unwrap_or_else(|_| std::env::temp_dir().join("truckreg").join("users.csv"));
        let trucks_path = config
            .trucks_path()
            .unwrap_or_else(|_| std::env::temp_dir().join("truckreg").join("truck_data.csv"));

        let mut users = UserStore::open(users_path).unwrap_or_else(|_| {
            let fallback = std::env::temp_dir()
                .join("truckreg-fallback")
                .join("users.csv");
            UserStore::open(fallback).expect("Failed to create fallback user table")
        });
        let mut trucks = TruckStore::open(trucks_path).unwrap_or_else(|_| {
            let fallback = std::env::temp_dir()
                .join("truckreg-fallback")
                .join("truck_data.csv");
            TruckStore::open(fallback).expect("Failed to create fallback truck table")
        });

        let mut warnings = Vec::new();
        if let Some(notice) = users.take_notice() {
            warnings.push(format!("User table: {}", notice));
        }
        if let Some(notice) = trucks.take_notice() {
            warnings.push(format!("Truck table: {}", notice));
        }

        Self {
            current_tab: Tab::default(),
            signup_panel: SignupPanel::new(),
            login_panel: LoginPanel::new(),
            trucks_panel: TrucksPanel::new(),
            users,
            trucks,
            session: Session::new(),
            warnings,
        }
    }

    /// Render the tab bar
    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in [Tab::SignUp, Tab::Login, Tab::Trucks] {
                let enabled = tab != Tab::Trucks || self.session.is_authenticated();
                let selected = self.current_tab == tab;
                let label = egui::SelectableLabel::new(selected, tab.label());
                if ui.add_enabled(enabled, label).clicked() {
                    self.current_tab = tab;
                }
            }
        });
    }
}

impl eframe::App for TruckregApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Truck Registration and Login System");

            for warning in &self.warnings {
                ui.label(RichText::new(warning).color(Color32::YELLOW));
            }

            ui.add_space(8.0);
            self.render_tab_bar(ui);
            ui.separator();
            ui.add_space(8.0);

            let was_authenticated = self.session.is_authenticated();

            match self.current_tab {
                Tab::SignUp => self.signup_panel.ui(ui, &mut self.users, &mut self.session),
                Tab::Login => self.login_panel.ui(ui, &self.users, &mut self.session),
                Tab::Trucks => self.trucks_panel.ui(ui, &mut self.trucks, &mut self.session),
            }

            // Keep the selected tab in step with authentication changes
            if !was_authenticated && self.session.is_authenticated() {
                self.current_tab = Tab::Trucks;
            }
            if was_authenticated && !self.session.is_authenticated() {
                self.current_tab = Tab::Login;
            }
        });
    }
}
