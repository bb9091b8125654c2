//! JSON snapshot readers
//!
//! Employee records are exported one file per employee as
//! `<employees_dir>/<employee id>.json`; master data is a single JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use hrms_domain::{DataConfig, Employee, MasterDataSet};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::errors::LoadError;

/// Reads exported employee snapshots from a directory
#[derive(Debug, Clone)]
pub struct EmployeeSnapshotReader {
    employees_dir: PathBuf,
}

impl EmployeeSnapshotReader {
    pub fn new(employees_dir: impl Into<PathBuf>) -> Self {
        Self { employees_dir: employees_dir.into() }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(config.employees_dir.clone())
    }

    pub fn employees_dir(&self) -> &Path {
        &self.employees_dir
    }

    /// Load one employee by id
    ///
    /// # Errors
    /// - [`LoadError::InvalidEmployeeId`] for ids that are empty or could
    ///   escape the snapshot directory
    /// - [`LoadError::EmployeeNotFound`] when no snapshot exists
    /// - [`LoadError::Read`] / [`LoadError::Parse`] for unreadable files
    #[instrument(skip(self))]
    pub fn load_employee(&self, id: &str) -> Result<Employee, LoadError> {
        if !is_safe_id(id) {
            return Err(LoadError::InvalidEmployeeId(id.to_string()));
        }

        let path = self.employees_dir.join(format!("{id}.json"));
        if !path.is_file() {
            return Err(LoadError::EmployeeNotFound(id.to_string()));
        }

        let employee: Employee = read_json(&path)?;
        if employee.id != id {
            warn!(file_id = id, record_id = %employee.id, "snapshot file name and record id differ");
        }
        debug!(blocks = employee.employment_history.len(), "loaded employee snapshot");
        Ok(employee)
    }

    /// Ids of every snapshot in the directory, sorted
    ///
    /// # Errors
    /// Returns [`LoadError::Read`] if the directory cannot be listed.
    pub fn list_employee_ids(&self) -> Result<Vec<String>, LoadError> {
        let entries = fs::read_dir(&self.employees_dir)
            .map_err(|e| LoadError::read(&self.employees_dir, e))?;

        let mut ids: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_stem().and_then(|stem| stem.to_str()).map(str::to_string))
            .filter(|id| is_safe_id(id))
            .collect();
        ids.sort();
        Ok(ids)
    }
}

/// Load a master-data export
///
/// # Errors
/// Returns [`LoadError::Read`] or [`LoadError::Parse`].
pub fn load_master_data(path: &Path) -> Result<MasterDataSet, LoadError> {
    let data: MasterDataSet = read_json(path)?;
    debug!(
        path = %path.display(),
        designations = data.designations.len(),
        units = data.units.len(),
        tehsils = data.tehsils.len(),
        qualifications = data.qualifications.len(),
        "loaded master data"
    );
    Ok(data)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let contents = fs::read_to_string(path).map_err(|e| LoadError::read(path, e))?;
    serde_json::from_str(&contents).map_err(|e| LoadError::parse(path, e))
}

fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && id.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
