pub mod prediction_service;
pub mod submission_service;
pub mod validation_service;
