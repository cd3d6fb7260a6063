use std::{path::Path, process::Command};
use anyhow::{bail, Context, Result};

/// Substituted for the commit hash whenever git cannot produce one.
pub const UNKNOWN: &str = "unknown";

const GIT: &str = "git";

/// Resolves the commit checked out in `repo`, or [`UNKNOWN`].
pub fn resolve(repo: &Path) -> String {
    resolve_with(&mut rev_parse_head(GIT, repo))
}

fn rev_parse_head(program: &str, repo: &Path) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(["rev-parse", "HEAD"]).current_dir(repo);
    cmd
}

fn resolve_with(cmd: &mut Command) -> String {
    query_head(cmd).unwrap_or_else(|_| UNKNOWN.to_string())
}

fn query_head(cmd: &mut Command) -> Result<String> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run {:?}", cmd.get_program()))?;

    if !output.status.success() {
        bail!("git rev-parse failed: {}", String::from_utf8_lossy(&output.stderr));
    }

    let hash = String::from_utf8(output.stdout)?
        .trim()
        .to_string();

    if hash.is_empty() {
        bail!("git rev-parse printed nothing");
    }

    Ok(hash)
}
