//! Aisle Assistant - maps free-text shopping requests to shelf locations

pub mod catalog;
pub mod core;
pub mod nlp;
pub mod present;
pub mod request;
