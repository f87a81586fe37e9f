mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from harmony_cuts for tests
pub use harmony_cuts::core::{ProjectStore, StoreError, ThemePreference};
