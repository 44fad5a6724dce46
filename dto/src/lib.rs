pub mod error;
pub mod import_report;
pub mod nationality;
pub mod pharmacist;
pub mod pharmacist_to_look_up;
pub mod title;
