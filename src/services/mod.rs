pub mod box_service;
pub mod splice;
pub mod summary;
