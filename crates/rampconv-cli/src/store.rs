//! JSON file store for generated curve sets.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use rampconv_core::actions::CurveStore;
use rampconv_core::curve::CurveSet;
use rampconv_core::error::StoreError;
use rampconv_core::naming::NamedCurveSet;

/// On-disk layout of one curve file.
#[derive(Debug, Serialize)]
struct CurveFile<'a> {
    package_name: &'a str,
    asset_name: &'a str,
    row: u32,
    curves: &'a CurveSet,
}

/// Writes each record to `<dir>/<asset_name>.json`.
#[derive(Debug)]
pub struct JsonCurveStore {
    dir: PathBuf,
    written: BTreeSet<PathBuf>,
}

impl JsonCurveStore {
    /// Store rooted at `dir`, created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: BTreeSet::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Distinct paths written so far.
    pub fn written(&self) -> &BTreeSet<PathBuf> {
        &self.written
    }

    fn path_for(&self, record: &NamedCurveSet) -> Result<PathBuf, StoreError> {
        let name = &record.asset_name;
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(StoreError::Rejected {
                name: name.clone(),
                reason: "asset name is not a valid file name".to_string(),
            });
        }
        Ok(self.dir.join(format!("{name}.json")))
    }
}

impl CurveStore for JsonCurveStore {
    fn store(&mut self, record: &NamedCurveSet) -> Result<(), StoreError> {
        let path = self.path_for(record)?;
        let file = CurveFile {
            package_name: &record.package_name,
            asset_name: &record.asset_name,
            row: record.row,
            curves: &record.curves,
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        fs::create_dir_all(&self.dir)?;
        fs::write(&path, json)?;
        debug!(path = %path.display(), "wrote curve file");

        self.written.insert(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampconv_core::color_management::LinearColor;

    fn record(asset_name: &str) -> NamedCurveSet {
        let mut curves = CurveSet::new();
        curves.add_color_key(0.0, LinearColor::new(0.0, 0.25, 0.5, 1.0));
        curves.add_color_key(1.0, LinearColor::new(1.0, 0.75, 0.5, 1.0));
        NamedCurveSet {
            package_name: format!("/Game/{asset_name}"),
            asset_name: asset_name.to_string(),
            row: 0,
            curves,
        }
    }

    #[test]
    fn test_writes_pretty_json_per_record() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = JsonCurveStore::new(tmp.path().join("out"));
        store.store(&record("T_Fire_Curve_0")).unwrap();

        let path = tmp.path().join("out").join("T_Fire_Curve_0.json");
        assert_eq!(store.written().len(), 1);
        assert!(store.written().contains(&path));

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["package_name"], "/Game/T_Fire_Curve_0");
        assert_eq!(value["row"], 0);
        let keys = &value["curves"]["curves"][1]["keys"];
        assert_eq!(keys.as_array().unwrap().len(), 2);
        assert_eq!(keys[1]["value"], 0.75);
    }

    #[test]
    fn test_rewrite_overwrites_same_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = JsonCurveStore::new(tmp.path());
        store.store(&record("T_A_Curve_0")).unwrap();
        store.store(&record("T_A_Curve_1")).unwrap();
        store.store(&record("T_A_Curve_0")).unwrap();
        assert_eq!(store.written().len(), 2);
    }

    #[test]
    fn test_rejects_path_like_names() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = JsonCurveStore::new(tmp.path());
        let err = store.store(&record("../escape")).unwrap_err();
        assert!(matches!(err, StoreError::Rejected { .. }));
        assert!(store.written().is_empty());
    }
}
