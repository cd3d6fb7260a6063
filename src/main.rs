mod commit;
mod config;
mod header;

use std::path::PathBuf;
use colored::Colorize;

use clap::Parser;

pub const CONFIG_NAME: &str = "version-stamp.toml";

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// write the current git commit hash into a C header
#[derive(Parser, Clone)]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// header to (over)write
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
    /// directory to run git in
    #[arg(short = 'C', long = "repo", value_name = "DIR")]
    repo: Option<PathBuf>,
    /// config file, ignored if it does not exist
    #[arg(long = "config", value_name = "FILE", default_value = CONFIG_NAME)]
    config: PathBuf,
    /// do not print a summary
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Resolves the commit and writes the header, returning the stamped hash.
fn stamp(settings: &config::Settings) -> anyhow::Result<String> {
    let hash = commit::resolve(&settings.repo);
    header::write(&settings.output, &hash)?;
    Ok(hash)
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = config::load(&cli.config).settings(cli.output, cli.repo);
    let hash = stamp(&settings)?;

    if !cli.quiet {
        let shown = if hash == commit::UNKNOWN {
            hash.yellow()
        } else {
            hash.green()
        };
        println!("{} = {} -> {}", header::SYMBOL, shown, settings.output.display());
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", format!("{:#}", err).red());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_means_defaults() {
        let cli = Cli::try_parse_from(["version-stamp"]).unwrap();
        assert!(cli.output.is_none());
        assert!(cli.repo.is_none());
        assert_eq!(cli.config, PathBuf::from(CONFIG_NAME));
        assert!(!cli.quiet);
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from(["version-stamp", "-o", "inc/v.h", "-C", "fw", "-q"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("inc/v.h")));
        assert_eq!(cli.repo, Some(PathBuf::from("fw")));
        assert!(cli.quiet);
    }

    #[test]
    fn stamps_sentinel_outside_a_checkout() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("src").join("version.h");

        let settings = config::Config::default().settings(Some(output.clone()), Some(dir.path().join("missing")));
        assert_eq!(stamp(&settings).unwrap(), commit::UNKNOWN);

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text, "#pragma once\nconst char GIT_COMMIT_HASH[] = \"unknown\";\n");
    }

    #[test]
    fn malformed_config_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(CONFIG_NAME);
        std::fs::write(&file, "output = [").unwrap();
        let output = dir.path().join("src").join("version.h");

        let settings = config::load(&file).settings(Some(output.clone()), Some(dir.path().join("missing")));
        stamp(&settings).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("#pragma once\nconst char GIT_COMMIT_HASH[] = \""));
    }
}
