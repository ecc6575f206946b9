use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::Deserialize;

use crate::engine::core::app_state::AppState;

/// JSON manifest listing the photo files to hang on the tree. Fewer photos
/// than placards leaves the remainder on the blank paper placeholder; more
/// photos than placards uses the first N.
#[derive(Asset, TypePath, Deserialize, Clone, Debug, Default)]
pub struct PhotoManifest {
    pub photos: Vec<String>,
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<PhotoManifest>>,
}

/// Photo image handles shared by the placard population. Loading is fire
/// and forget; the core never waits on it.
#[derive(Resource, Default)]
pub struct PhotoSlots {
    pub handles: Vec<Handle<Image>>,
}

/// Kick off the manifest load at startup.
pub fn start_manifest_load(
    mut loader: ResMut<ManifestLoader>,
    asset_server: Res<AssetServer>,
) {
    println!("Loading photo manifest: photos/manifest.json");
    loader.handle = Some(asset_server.load("photos/manifest.json"));
}

/// Poll the manifest and transition to `Running` once resolved. A missing
/// manifest is not fatal: the tree runs with blank placards.
pub fn poll_photo_manifest(
    loader: Res<ManifestLoader>,
    manifests: Res<Assets<PhotoManifest>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };

    if let Some(manifest) = manifests.get(handle) {
        println!("✓ Photo manifest loaded: {} photos", manifest.photos.len());
        let handles = manifest
            .photos
            .iter()
            .map(|path| asset_server.load::<Image>(path.as_str()))
            .collect();
        commands.insert_resource(PhotoSlots { handles });
        next_state.set(AppState::Running);
    } else if matches!(
        asset_server.get_load_state(handle),
        Some(LoadState::Failed(_))
    ) {
        println!("Photo manifest missing, running with blank placards");
        commands.insert_resource(PhotoSlots::default());
        next_state.set(AppState::Running);
    }
}
