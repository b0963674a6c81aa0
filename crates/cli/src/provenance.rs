use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the subcommand and its parameters.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`, recording the
/// git commit, the callsite, the command parameters, and the output path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "planar_version": planar::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("outline"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit the outputs came from: `GIT_COMMIT` at build time, then at run
/// time, then `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let build = option_env!("GIT_COMMIT").map(str::to_string);
    let run = std::env::var("GIT_COMMIT").ok();
    [build, run]
        .into_iter()
        .flatten()
        .find_map(|rev| non_empty(&rev))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn non_empty(rev: &str) -> Option<String> {
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    non_empty(std::str::from_utf8(&output.stdout).ok()?)
}
