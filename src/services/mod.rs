// Services module for business logic
pub mod folder_builder;
pub mod form_controller;
