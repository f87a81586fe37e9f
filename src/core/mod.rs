mod store;
mod theme;

pub use store::{ProjectStore, StoreError};
pub use theme::ThemePreference;
