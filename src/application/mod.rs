pub mod services;
pub mod state;
pub mod views;
