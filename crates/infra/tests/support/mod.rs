//! Shared helpers for `hrms-infra` integration tests.
//!
//! [`SnapshotDir`] lays out an export directory in a temp dir the way the
//! admin backend writes it: one JSON file per employee plus master data.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;

/// Temporary export directory, removed on drop
pub struct SnapshotDir {
    dir: TempDir,
}

impl SnapshotDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        fs::create_dir(dir.path().join("employees")).expect("employees dir should be created");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn employees_dir(&self) -> PathBuf {
        self.dir.path().join("employees")
    }

    pub fn master_data_path(&self) -> PathBuf {
        self.dir.path().join("master-data.json")
    }

    pub fn write_employee(&self, id: &str, record: &Value) -> PathBuf {
        let path = self.employees_dir().join(format!("{id}.json"));
        fs::write(&path, record.to_string()).expect("employee snapshot should be written");
        path
    }

    pub fn write_raw(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.employees_dir().join(file_name);
        fs::write(&path, contents).expect("raw file should be written");
        path
    }

    pub fn write_master_data(&self, data: &Value) -> PathBuf {
        let path = self.master_data_path();
        fs::write(&path, data.to_string()).expect("master data should be written");
        path
    }

    /// Write a TOML config pointing at this directory, pinned to `fixed_date`
    pub fn write_config(&self, fixed_date: &str) -> PathBuf {
        let path = self.dir.path().join("hrms.toml");
        let contents = format!(
            "[logging]\nlevel = \"debug\"\nformat = \"json\"\n\n\
             [clock]\nfixed_date = \"{fixed_date}\"\n\n\
             [data]\nemployees_dir = \"{}\"\nmaster_data_path = \"{}\"\n",
            toml_path(&self.employees_dir()),
            toml_path(&self.master_data_path()),
        );
        fs::write(&path, contents).expect("config should be written");
        path
    }
}

fn toml_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

/// Sessions judge posted since mid-2015
pub fn serving_judge() -> Value {
    json!({
        "id": "EMP-0007",
        "fullName": "Bilal Ahmed",
        "dateOfBirth": "1975-03-02",
        "qualificationIds": ["q-llm"],
        "employmentHistory": [
            {
                "id": "b1",
                "status": "In-Service",
                "fromDate": "2015-06-15",
                "toDate": "0000-00-00",
                "isCurrentlyWorking": true,
                "designationId": "d-dsj",
                "unitId": "u-lhr",
                "tehsilId": "t-lhr"
            }
        ]
    })
}

pub fn master_data() -> Value {
    json!({
        "designations": [{ "id": "d-dsj", "title": "District & Sessions Judge", "bps": 21 }],
        "units": [{ "id": "u-lhr", "name": "Sessions Court Lahore", "tehsilId": "t-lhr" }],
        "tehsils": [{ "id": "t-lhr", "name": "Lahore City", "district": "Lahore" }],
        "qualifications": [{ "id": "q-llm", "name": "LLM" }]
    })
}
