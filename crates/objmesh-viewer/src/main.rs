//! Minimal viewer for triangulated OBJ models.
//!
//! Run: `cargo run -p objmesh-viewer -- house=assets/house.obj teapot=assets/teapot.obj`

mod loader;
mod upload;

use bevy::prelude::*;

use loader::{ModelLoaderPlugin, ViewerSettings};

fn main() -> AppExit {
    tracing_subscriber::fmt::init();

    let settings = ViewerSettings::from_args(std::env::args().skip(1));
    tracing::info!("Viewing {} model(s)", settings.models.len());

    App::new()
        .add_plugins(DefaultPlugins)
        .insert_resource(settings)
        .add_plugins(ModelLoaderPlugin)
        .run()
}
