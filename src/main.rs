#![allow(non_snake_case)]

mod app;
mod config;
pub mod context;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::context::LaunchOptions;

/// Course Card - browse a course catalog
#[derive(Parser, Debug)]
#[command(name = "coursecard-desktop")]
#[command(about = "Course Card - browse a course catalog as accent-colored cards")]
struct Args {
    /// JSON catalog file (array of courses or {"courses": [...]})
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Window title
    #[arg(short, long, default_value = "Course Catalog")]
    title: String,

    /// Start with every card's lessons expanded
    #[arg(long)]
    show_lessons: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let default_path = config::default_catalog_path();
    let catalog = config::load_catalog(args.catalog.as_deref(), default_path.as_deref());

    tracing::info!("Starting '{}' with {} courses", args.title, catalog.len());

    context::set_launch_options(LaunchOptions {
        title: args.title.clone(),
        catalog,
        lessons_visible: args.show_lessons,
    });

    // Narrow window: cards stack in a single column
    let window_width = 560.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
