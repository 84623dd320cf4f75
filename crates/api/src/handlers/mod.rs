pub mod calculations;
pub mod meta;
pub mod projects;
