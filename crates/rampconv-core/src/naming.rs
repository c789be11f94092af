//! Output naming for converted rows.
//!
//! Each row's curve set is named after its source asset plus a
//! `_Curve_<row>` suffix, in both the package path and the asset name.

use serde::{Deserialize, Serialize};

use crate::curve::CurveSet;

/// A curve set paired with the names it should be stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCurveSet {
    /// Full package path, e.g. `/Game/Ramps/T_Fire_Curve_0`.
    pub package_name: String,
    /// Asset name inside the package, e.g. `T_Fire_Curve_0`.
    pub asset_name: String,
    /// Source image row the curves were read from.
    pub row: u32,
    pub curves: CurveSet,
}

/// Suffix appended to names for the given row.
pub fn curve_suffix(row: u32) -> String {
    format!("_Curve_{row}")
}

/// Attach names to converted rows, preserving row order.
pub fn name_curve_sets(
    package_name: &str,
    asset_name: &str,
    rows: Vec<CurveSet>,
) -> Vec<NamedCurveSet> {
    (0u32..)
        .zip(rows)
        .map(|(row, curves)| {
            let suffix = curve_suffix(row);
            NamedCurveSet {
                package_name: format!("{package_name}{suffix}"),
                asset_name: format!("{asset_name}{suffix}"),
                row,
                curves,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_format() {
        assert_eq!(curve_suffix(0), "_Curve_0");
        assert_eq!(curve_suffix(12), "_Curve_12");
    }

    #[test]
    fn test_names_follow_row_order() {
        let named = name_curve_sets(
            "/Game/Ramps/T_Fire",
            "T_Fire",
            vec![CurveSet::new(), CurveSet::new()],
        );
        assert_eq!(named.len(), 2);
        assert_eq!(named[0].package_name, "/Game/Ramps/T_Fire_Curve_0");
        assert_eq!(named[1].asset_name, "T_Fire_Curve_1");
        assert_eq!(named[1].row, 1);
    }

    #[test]
    fn test_no_rows_no_names() {
        assert!(name_curve_sets("/Game/T", "T", Vec::new()).is_empty());
    }
}
