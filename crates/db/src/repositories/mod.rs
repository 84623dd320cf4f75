pub mod current_calculation_repo;
pub mod saved_project_repo;

pub use current_calculation_repo::CurrentCalculationRepo;
pub use saved_project_repo::SavedProjectRepo;
