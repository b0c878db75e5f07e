//! Application service layer for the truck registration system
//!
//! The handlers here are the explicit per-form-action entry points: the GUI
//! panels and the CLI subcommands both call into this crate, passing the
//! stores and the session they own.

pub mod auth;
pub mod config;
pub mod registration;
pub mod session;

pub use config::Config;
pub use session::Session;
