//! User Interface Components
//!
//! - **forms**: the toggled login/sign-up form
//! - **inputs**: form input controls

pub mod forms;
pub mod inputs;

pub use forms::AuthFormComponent;
