//! Documentation checkout refresh.
//!
//! First run does a shallow sparse clone limited to the property and type
//! subtrees; later runs fast-forward the existing checkout. Any failure is
//! reported as a `RefreshError` and nothing is retried.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("failed to start `{program}` for {step}: {source}")]
    Spawn {
        program: String,
        step: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{step} failed ({status})")]
    Failed {
        step: &'static str,
        status: ExitStatus,
    },
}

#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Git executable.
    pub git: String,
    pub repo_url: String,
    /// Local checkout directory.
    pub checkout: PathBuf,
    /// Paths kept by the sparse checkout, relative to the repository root.
    pub sparse_paths: Vec<String>,
}

impl RefreshConfig {
    pub fn new(repo_url: impl Into<String>, checkout: impl Into<PathBuf>) -> Self {
        Self {
            git: "git".to_string(),
            repo_url: repo_url.into(),
            checkout: checkout.into(),
            sparse_paths: vec!["docs/styles".to_string(), "docs/css_types".to_string()],
        }
    }
}

/// Clone or update the checkout.
pub fn refresh(config: &RefreshConfig) -> Result<(), RefreshError> {
    if config.checkout.join(".git").exists() {
        info!("updating documentation checkout {}", config.checkout.display());
        return run(config, "git pull", |cmd| {
            cmd.arg("-C").arg(&config.checkout).args(["pull", "--ff-only"]);
        });
    }

    info!(
        "cloning {} into {}",
        config.repo_url,
        config.checkout.display()
    );
    run(config, "git clone", |cmd| {
        cmd.args(["clone", "--depth", "1", "--filter=blob:none", "--sparse"])
            .arg(&config.repo_url)
            .arg(&config.checkout);
    })?;
    run(config, "git sparse-checkout", |cmd| {
        cmd.arg("-C")
            .arg(&config.checkout)
            .args(["sparse-checkout", "set"])
            .args(&config.sparse_paths);
    })
}

fn run(
    config: &RefreshConfig,
    step: &'static str,
    build: impl FnOnce(&mut Command),
) -> Result<(), RefreshError> {
    let mut cmd = Command::new(&config.git);
    build(&mut cmd);
    let status = cmd.status().map_err(|source| RefreshError::Spawn {
        program: config.git.clone(),
        step,
        source,
    })?;
    if status.success() {
        Ok(())
    } else {
        Err(RefreshError::Failed { step, status })
    }
}

/// Documentation root inside a checkout.
pub fn docs_root(checkout: &Path) -> PathBuf {
    checkout.join("docs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_git_is_a_spawn_error() {
        let dir = TempDir::new().unwrap();
        let mut config = RefreshConfig::new("https://example.invalid/repo.git", dir.path().join("co"));
        config.git = "definitely-not-a-real-git-binary".to_string();

        let err = refresh(&config).unwrap_err();
        assert!(matches!(err, RefreshError::Spawn { step: "git clone", .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let mut config = RefreshConfig::new("unused", dir.path());
        config.git = "false".to_string();

        let err = refresh(&config).unwrap_err();
        assert!(matches!(err, RefreshError::Failed { step: "git pull", .. }));
        assert!(err.to_string().starts_with("git pull failed"));
    }

    #[test]
    fn docs_root_is_inside_checkout() {
        assert_eq!(docs_root(Path::new("/tmp/textual")), PathBuf::from("/tmp/textual/docs"));
    }
}
