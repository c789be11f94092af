//! File-backed source provider: selected assets are image files on disk.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use rampconv_core::actions::{AssetRef, SourceProvider};
use rampconv_core::error::ActionError;
use rampconv_core::image::TextureData;

use crate::config::AppConfig;
use crate::image_loader::load_texture;

/// Resolves package names to image files and decodes them on demand.
#[derive(Debug, Default)]
pub struct FileSourceProvider {
    files: HashMap<String, PathBuf>,
    srgb: bool,
}

impl FileSourceProvider {
    pub fn new(srgb: bool) -> Self {
        Self {
            files: HashMap::new(),
            srgb,
        }
    }

    /// Register `path` and return the asset reference selecting it.
    ///
    /// The asset name is the file stem; the package lives under the
    /// configured package root. Two files with the same stem would map to
    /// the same package and are rejected.
    pub fn add(&mut self, path: &Path, config: &AppConfig) -> Result<AssetRef, DuplicateAsset> {
        let asset_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Texture".to_string());
        let package_name = config.package_name(&asset_name);
        match self.files.entry(package_name.clone()) {
            Entry::Occupied(existing) => Err(DuplicateAsset {
                package_name,
                first: existing.get().clone(),
                second: path.to_path_buf(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(path.to_path_buf());
                Ok(AssetRef::texture(package_name, asset_name))
            }
        }
    }
}

/// Two inputs resolved to the same package name.
#[derive(Debug, thiserror::Error)]
#[error("{} and {} both map to {package_name}", .first.display(), .second.display())]
pub struct DuplicateAsset {
    pub package_name: String,
    pub first: PathBuf,
    pub second: PathBuf,
}

impl SourceProvider for FileSourceProvider {
    fn load(&mut self, asset: &AssetRef) -> Result<Option<TextureData>, ActionError> {
        let Some(path) = self.files.get(&asset.package_name) else {
            return Ok(None);
        };
        load_texture(path, self.srgb)
            .map(Some)
            .map_err(|e| ActionError::Source {
                asset: asset.package_name.clone(),
                message: format!("{}: {e}", path.display()),
            })
    }
}
