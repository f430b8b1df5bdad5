use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced a layout: generator params (seed included) and every file
/// written for it.
pub struct Payload {
    pub params: Value,
    pub outputs: Vec<PathBuf>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            outputs: Vec::new(),
        }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.outputs.push(path.into());
        self
    }
}

/// Write `<stem>.provenance.json` next to `artifact` with the code revision,
/// callsite, params and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = provenance_path(artifact);
    let callsite = Location::caller();
    let mut outputs: Vec<String> = vec![artifact.to_string_lossy().into_owned()];
    outputs.extend(
        payload
            .outputs
            .iter()
            .map(|p| p.to_string_lossy().into_owned()),
    );
    let doc = json!({
        "code_rev": current_git_rev(),
        "generator": format!("hexgen {}", hexgen::VERSION),
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "outputs": outputs
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("layout"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
