//! `<stem>.provenance.json` sidecars for files written by the CLI.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an output file.
#[derive(Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub kernel_version: &'static str,
    pub command: String,
    pub params: Value,
    pub output: PathBuf,
}

impl Sidecar {
    pub fn new(command: &str, params: Value, output: &Path) -> Self {
        Self {
            code_rev: current_git_rev(),
            kernel_version: ductgeom::VERSION,
            command: command.to_string(),
            params,
            output: output.to_path_buf(),
        }
    }

    /// `outline.svg` → `outline.provenance.json`, next to the output.
    pub fn path(&self) -> PathBuf {
        self.output.with_extension("provenance.json")
    }

    /// Write the sidecar and return its path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = self.path();
        std::fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `GIT_COMMIT` from the environment, else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()
                .filter(|out| out.status.success())
                .and_then(|out| String::from_utf8(out.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_output() {
        let s = Sidecar::new("path", Value::Null, Path::new("out/svg/outline.svg"));
        assert_eq!(s.path(), Path::new("out/svg/outline.provenance.json"));
        let bare = Sidecar::new("path", Value::Null, Path::new("outline"));
        assert_eq!(bare.path(), Path::new("outline.provenance.json"));
    }

    #[test]
    fn sidecar_records_command_and_params() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("outline.svg");
        let written = Sidecar::new("path", json!({"margin": 10.0}), &output)
            .write()
            .unwrap();
        let doc: Value = serde_json::from_slice(&std::fs::read(written).unwrap()).unwrap();
        assert_eq!(doc["command"], "path");
        assert_eq!(doc["params"]["margin"], 10.0);
        assert_eq!(doc["kernel_version"], ductgeom::VERSION);
        assert_eq!(doc["output"], output.to_string_lossy().as_ref());
    }
}
