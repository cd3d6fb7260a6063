use std::{fs, path::Path};
use anyhow::Context;

pub const SYMBOL: &str = "GIT_COMMIT_HASH";

pub fn render(hash: &str) -> String {
    format!("#pragma once\nconst char {}[] = \"{}\";\n", SYMBOL, hash)
}

/// Overwrites `path` with the header for `hash`, creating parent
/// directories as needed.
pub fn write(path: &Path, hash: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    fs::write(path, render(hash))
        .with_context(|| format!("failed to write header to {}", path.display()))?;

    Ok(())
}
