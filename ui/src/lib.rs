//! This crate contains all shared UI components for the login/sign-up service.

pub mod app;
pub use app::AuthService;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
