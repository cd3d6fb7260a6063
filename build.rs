use std::{fs, path::Path, process::Command};

fn main() {
    rerun_on_commit(Path::new(".git"));

    let git_hash = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={}", git_hash);
}

// HEAD only names the branch, so also watch the branch ref and packed-refs
// or a new commit on the same branch would not rerun this script.
fn rerun_on_commit(git_dir: &Path) {
    let head = git_dir.join("HEAD");
    let Ok(content) = fs::read_to_string(&head) else {
        return;
    };
    println!("cargo:rerun-if-changed={}", head.display());

    if let Some(reference) = content.trim().strip_prefix("ref: ") {
        // a missing loose ref (only packed) makes cargo rerun every build
        println!("cargo:rerun-if-changed={}", git_dir.join(reference).display());
    }

    let packed = git_dir.join("packed-refs");
    if packed.exists() {
        println!("cargo:rerun-if-changed={}", packed.display());
    }
}
