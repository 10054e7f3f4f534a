pub mod cascade;
pub mod components;
pub mod data;
pub mod geo;
pub mod icons;
pub mod list_controller;
pub mod notify;
pub mod status_toggle;
pub mod validate;
