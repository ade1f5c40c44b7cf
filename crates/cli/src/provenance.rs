//! Provenance sidecars: every file the runner writes gets a
//! `<stem>.provenance.json` next to it recording how it was produced.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params, tag: None }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

/// Provenance document shared by sidecars and `report`.
pub fn document(payload: &Payload, outputs: &[String]) -> Value {
    json!({
        "code_rev": code_rev(),
        "planar_version": planar::VERSION,
        "tag": payload.tag,
        "params": payload.params,
        "outputs": outputs,
    })
}

/// Write the sidecar for `artifact`, adding the caller's location to the
/// document. Returns the sidecar path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let callsite = Location::caller();
    let mut doc = document(&payload, &[artifact.to_string_lossy().into_owned()]);
    doc["callsite"] = json!({ "file": callsite.file(), "line": callsite.line() });

    let path = sidecar_path(artifact);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing sidecar {}", path.display()))?;
    Ok(path)
}

/// `out/moved.csv` → `out/moved.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` baked in at build time, else from the environment, else
/// `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .filter(|rev| !rev.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned()).filter(|rev| !rev.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/moved.csv")),
            Path::new("/tmp/output/moved.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("points")),
            Path::new("points.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_tag_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("moved.csv");
        fs::write(&artifact, "x,y\n").unwrap();
        let payload =
            Payload::new(json!({"transform": [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]})).with_tag(Some("t1".into()));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["tag"], "t1");
        assert_eq!(parsed["params"]["transform"][0], 1.0);
        assert!(parsed["callsite"]["line"].is_u64());
        assert!(parsed["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
    }

    #[test]
    fn document_without_tag_is_null() {
        let doc = document(&Payload::new(json!({})), &[]);
        assert!(doc["tag"].is_null());
        assert_eq!(doc["planar_version"], planar::VERSION);
        assert!(doc["outputs"].as_array().unwrap().is_empty());
        assert!(!doc["code_rev"].as_str().unwrap().is_empty());
    }
}
