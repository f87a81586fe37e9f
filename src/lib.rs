pub mod core;

pub use crate::core::{ProjectStore, StoreError, ThemePreference};

#[cfg(feature = "gui")]
pub mod gui;
