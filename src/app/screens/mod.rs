//! TUI screen components
//!
//! One component per application state.

pub mod focus;
pub mod home;

pub use focus::FocusScreen;
pub use home::{HomeItem, HomeScreen};
