mod app;
mod message;
mod state;
mod widgets;

pub use app::App;
pub use message::Message;

use std::path::PathBuf;

use iced::{Task, window};

use crate::core::{ProjectStore, ThemePreference};

/// Paths the window operates on.
#[derive(Debug, Clone)]
pub struct Options {
    pub projects_root: PathBuf,
    pub theme_file: PathBuf,
}

/// Opens the store and the theme preference, then runs the event loop until
/// the window is closed (after confirmation).
pub fn run(options: Options) -> anyhow::Result<()> {
    let store = ProjectStore::open(&options.projects_root)?;
    let theme = ThemePreference::load(&options.theme_file)?;
    tracing::info!(
        root = %options.projects_root.display(),
        projects = store.len(),
        theme = theme.as_str(),
        "starting"
    );

    let app = App::new(store, theme, options.theme_file);
    iced::application(
        move || (app.clone(), Task::none()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .subscription(App::subscription)
    .window(window::Settings {
        // Closing goes through the exit confirmation instead.
        exit_on_close_request: false,
        ..window::Settings::default()
    })
    .run()?;
    Ok(())
}
