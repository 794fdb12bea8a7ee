//! Reusable widgets for the Timekeep window

pub mod components;

pub use components::*;
