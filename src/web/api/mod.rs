pub mod import_controller;
pub mod pharmacists_controller;
pub mod server;
