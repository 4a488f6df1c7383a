pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod errors;
pub mod form_controller;
pub mod shared_main;
pub mod submission_client;
pub mod validators;
