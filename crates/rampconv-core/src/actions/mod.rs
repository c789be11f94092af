//! Host-facing actions over a selection of assets.
//!
//! A host (editor, CLI, ...) owns an [`ActionContext`], asks it which
//! actions apply to the user's current selection, and invokes one by id.
//! Reading textures and persisting results go through the
//! [`SourceProvider`] and [`CurveStore`] collaborators the host supplies.

pub mod generate;
pub mod registry;
pub mod store;

pub use generate::GenerateCurvesAction;
pub use registry::{ActionContext, ActionRegistry, MenuEntry};
pub use store::{CurveStore, MemoryCurveStore};

use serde::{Deserialize, Serialize};

use crate::error::ActionError;
use crate::image::TextureData;

// ── Selection ────────────────────────────────────────────────────

/// Asset class as reported by the host's asset registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    Texture2D,
    Other(String),
}

/// One entry of the host's current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    /// Package path, e.g. `/Game/Ramps/T_Fire`.
    pub package_name: String,
    /// Asset name, e.g. `T_Fire`.
    pub asset_name: String,
    pub kind: AssetKind,
}

impl AssetRef {
    pub fn new(package_name: impl Into<String>, asset_name: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            package_name: package_name.into(),
            asset_name: asset_name.into(),
            kind,
        }
    }

    /// Shorthand for a 2D texture asset.
    pub fn texture(package_name: impl Into<String>, asset_name: impl Into<String>) -> Self {
        Self::new(package_name, asset_name, AssetKind::Texture2D)
    }

    pub fn is_texture(&self) -> bool {
        self.kind == AssetKind::Texture2D
    }
}

// ── Collaborators ────────────────────────────────────────────────

/// Supplies decoded pixel data for selected assets.
pub trait SourceProvider {
    /// Load the texture behind `asset`.
    ///
    /// `Ok(None)` means the asset has no readable texture and is skipped.
    fn load(&mut self, asset: &AssetRef) -> Result<Option<TextureData>, ActionError>;
}

/// Mutable collaborators an action runs against.
pub struct ActionTarget<'a> {
    pub sources: &'a mut dyn SourceProvider,
    pub store: &'a mut dyn CurveStore,
}

// ── Actions ──────────────────────────────────────────────────────

/// Why an asset produced no output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The provider had no texture for it.
    Unavailable,
    /// The texture format or dimensions cannot be converted.
    Unsupported,
    /// The provider failed while reading it.
    SourceError(String),
}

/// An asset that was skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedAsset {
    pub asset: String,
    pub reason: SkipReason,
}

/// Outcome of running an action over a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReport {
    /// Package names of every stored output, in creation order.
    pub created: Vec<String>,
    pub skipped: Vec<SkippedAsset>,
}

/// A command offered for a selection of assets.
pub trait AssetAction {
    /// Stable identifier used to invoke the action.
    fn id(&self) -> &'static str;

    /// Human-readable menu label.
    fn label(&self) -> &'static str;

    fn tooltip(&self) -> &'static str;

    /// Whether the action should be offered for `selection`.
    fn applies_to(&self, selection: &[AssetRef]) -> bool;

    /// Run the action over every asset in `selection`.
    fn execute(
        &self,
        target: &mut ActionTarget<'_>,
        selection: &[AssetRef],
    ) -> Result<ActionReport, ActionError>;
}
