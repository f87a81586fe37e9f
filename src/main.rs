use std::path::PathBuf;

use clap::Parser;

use harmony_cuts::gui;

#[derive(Parser)]
#[command(name = "harmony-cuts")]
#[command(about = "Manage Harmony Cuts projects from a desktop window")]
struct Cli {
    /// Directory that holds one subdirectory per project
    #[arg(long, value_name = "DIR", default_value = "Projects")]
    projects_root: PathBuf,

    /// File the theme preference is read from and written to
    #[arg(long, value_name = "FILE", default_value = "settings/theme.txt")]
    theme_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();
    gui::run(gui::Options {
        projects_root: args.projects_root,
        theme_file: args.theme_file,
    })
}
