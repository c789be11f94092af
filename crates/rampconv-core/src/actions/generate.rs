//! "Generate Curve from Ramp Texture" action.

use tracing::{debug, info, warn};

use super::{ActionReport, ActionTarget, AssetAction, AssetRef, SkipReason, SkippedAsset};
use crate::convert::RampToCurveConverter;
use crate::error::ActionError;
use crate::naming::name_curve_sets;

/// Converts every selected ramp texture into one curve set per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateCurvesAction {
    converter: RampToCurveConverter,
}

impl GenerateCurvesAction {
    pub const ID: &'static str = "generate_ramp_curves";

    pub fn new() -> Self {
        Self::default()
    }

    fn generate_one(
        &self,
        target: &mut ActionTarget<'_>,
        asset: &AssetRef,
        report: &mut ActionReport,
    ) -> Result<(), ActionError> {
        let texture = match target.sources.load(asset) {
            Ok(Some(texture)) => texture,
            Ok(None) => {
                debug!(asset = %asset.package_name, "no texture available");
                report.skipped.push(SkippedAsset {
                    asset: asset.package_name.clone(),
                    reason: SkipReason::Unavailable,
                });
                return Ok(());
            }
            Err(e) => {
                warn!(asset = %asset.package_name, error = %e, "failed to read texture");
                report.skipped.push(SkippedAsset {
                    asset: asset.package_name.clone(),
                    reason: SkipReason::SourceError(e.to_string()),
                });
                return Ok(());
            }
        };

        let rows = self.converter.convert(&texture.view());
        if rows.is_empty() {
            debug!(
                asset = %asset.package_name,
                format = %texture.format,
                width = texture.width,
                height = texture.height,
                "texture cannot be converted"
            );
            report.skipped.push(SkippedAsset {
                asset: asset.package_name.clone(),
                reason: SkipReason::Unsupported,
            });
            return Ok(());
        }

        for record in name_curve_sets(&asset.package_name, &asset.asset_name, rows) {
            target.store.store(&record)?;
            report.created.push(record.package_name);
        }
        Ok(())
    }
}

impl AssetAction for GenerateCurvesAction {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Generate Curve from Ramp Texture"
    }

    fn tooltip(&self) -> &'static str {
        "Generates curves from a ramp texture"
    }

    /// Offered only when something is selected and every asset is a 2D texture.
    fn applies_to(&self, selection: &[AssetRef]) -> bool {
        !selection.is_empty() && selection.iter().all(AssetRef::is_texture)
    }

    fn execute(
        &self,
        target: &mut ActionTarget<'_>,
        selection: &[AssetRef],
    ) -> Result<ActionReport, ActionError> {
        let mut report = ActionReport::default();
        for asset in selection {
            self.generate_one(target, asset, &mut report)?;
        }
        info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "generated ramp curves"
        );
        Ok(report)
    }
}
