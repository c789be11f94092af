//! Storage collaborator for converted curve sets.

use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::naming::NamedCurveSet;

/// Persists named curve sets on behalf of the host.
pub trait CurveStore {
    /// Store `record`, replacing any earlier record with the same package name.
    fn store(&mut self, record: &NamedCurveSet) -> Result<(), StoreError>;
}

/// Keeps records in memory, keyed by package name.
#[derive(Debug, Clone, Default)]
pub struct MemoryCurveStore {
    records: BTreeMap<String, NamedCurveSet>,
}

impl MemoryCurveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, package_name: &str) -> Option<&NamedCurveSet> {
        self.records.get(package_name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by package name.
    pub fn records(&self) -> impl Iterator<Item = &NamedCurveSet> {
        self.records.values()
    }
}

impl CurveStore for MemoryCurveStore {
    fn store(&mut self, record: &NamedCurveSet) -> Result<(), StoreError> {
        self.records
            .insert(record.package_name.clone(), record.clone());
        Ok(())
    }
}
