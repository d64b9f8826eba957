//! Startup loading of OBJ models into the scene.
//!
//! Models listed in [`ViewerSettings`] are parsed into the [`ModelLibrary`]
//! table, uploaded through [`BevyMeshUploader`], and spawned side by side.
//! On exit, models that are still in the library are reported and dropped.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use objmesh::{LoadPolicy, ModelInfo, ModelSummary, ModelTable, UploadedModels};

use crate::upload::BevyMeshUploader;

/// Plugin for loading models at startup.
pub struct ModelLoaderPlugin;

impl Plugin for ModelLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerSettings>()
            .init_resource::<ModelLibrary>()
            .add_systems(Startup, (load_models, spawn_models, spawn_camera).chain())
            .add_systems(Last, close_library_on_exit);
    }
}

/// Settings for the viewer.
#[derive(Resource, Debug, Clone)]
pub struct ViewerSettings {
    /// Models to load, in order.
    pub models: Vec<ModelInfo>,
    /// How unreadable or malformed model files are handled.
    pub policy: LoadPolicy,
    /// Distance between neighbouring models along the X axis.
    pub spacing: f32,
    /// Distance of the camera from the origin.
    pub camera_distance: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            models: Vec::new(),
            policy: LoadPolicy::lenient(),
            spacing: 2.5,
            camera_distance: 6.0,
        }
    }
}

impl ViewerSettings {
    /// Build settings from command-line arguments.
    ///
    /// `--strict` makes malformed models fatal; every other argument is a
    /// `name=path` model entry.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        let mut settings = Self::default();
        for arg in args {
            if arg == "--strict" {
                settings.policy = LoadPolicy::strict();
            } else {
                settings.models.push(ModelInfo::from_arg(&arg));
            }
        }
        settings
    }
}

/// Parsed models, keyed by name.
#[derive(Resource, Default)]
pub struct ModelLibrary {
    pub table: ModelTable,
}

/// Marker for a spawned model entity.
#[derive(Component, Debug)]
pub struct LoadedModel {
    pub name: String,
}

/// Parse every configured model; a propagated failure ends the app.
#[allow(clippy::needless_pass_by_value)]
fn load_models(
    settings: Res<ViewerSettings>,
    mut library: ResMut<ModelLibrary>,
    mut exit: MessageWriter<AppExit>,
) {
    match library.table.load_all(&settings.models, &settings.policy) {
        Ok(loaded) => {
            tracing::info!("Loaded {} of {} models", loaded, settings.models.len());
        }
        Err(e) => {
            tracing::error!("Failed to load models: {}", e);
            exit.write(AppExit::error());
        }
    }
}

/// Upload the library and spawn one entity per model.
#[allow(clippy::needless_pass_by_value)]
fn spawn_models(
    mut commands: Commands,
    settings: Res<ViewerSettings>,
    library: Res<ModelLibrary>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut uploaded = UploadedModels::new(BevyMeshUploader::new(&mut meshes));
    if let Err(e) = uploaded.upload_all(&library.table) {
        // Meshes uploaded so far are released when `uploaded` drops.
        tracing::error!("Failed to upload models: {}", e);
        return;
    }
    let handles = uploaded.into_handles();

    let material = materials.add(StandardMaterial::default());
    let names = library.table.names();
    for (slot, name) in names.iter().enumerate() {
        let (Some(mesh), Some(model)) = (handles.get(*name), library.table.get(name)) else {
            continue;
        };
        let center = ModelSummary::of(model)
            .bounds
            .map_or(Vec3::ZERO, |b| Vec3::from_array(b.center().to_array()));
        let translation = Vec3::X * slot_offset(slot, names.len(), settings.spacing) - center;

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(translation),
            LoadedModel {
                name: (*name).to_owned(),
            },
        ));
    }
}

/// X offset of `slot` when `count` models are laid out centred on the origin.
#[allow(clippy::cast_precision_loss)]
fn slot_offset(slot: usize, count: usize, spacing: f32) -> f32 {
    (slot as f32 - count.saturating_sub(1) as f32 / 2.0) * spacing
}

#[allow(clippy::needless_pass_by_value)]
fn spawn_camera(mut commands: Commands, settings: Res<ViewerSettings>) {
    let distance = settings.camera_distance;
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, distance * 0.5, distance).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(1.0, 2.0, 1.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Report models that were never deleted, then drop the table.
fn close_library_on_exit(mut exits: MessageReader<AppExit>, mut library: ResMut<ModelLibrary>) {
    if exits.read().next().is_none() {
        return;
    }
    std::mem::take(&mut library.table).close(|name| {
        tracing::info!("Model \"{}\" was not deleted before exit, releasing", name);
    });
}
