pub mod current_calculation;
pub mod saved_project;
