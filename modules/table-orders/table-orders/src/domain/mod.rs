pub mod error;
pub mod menu;
pub mod repo;
pub mod service;
