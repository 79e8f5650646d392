use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use spinecat::catalog::{self, CatalogConfig};

#[derive(Parser)]
#[command(name = "spinecat", version)]
#[command(
    about = "Build the character asset catalogue from CSV metadata and on-disk Spine assets",
    long_about = None
)]
struct Cli {
    /// Public asset root directory
    #[arg(long, default_value = "public")]
    root: PathBuf,

    /// Character CSV path (defaults to <root>/characters.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSON path (defaults to <root>/characters.json)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> CatalogConfig {
        let mut config = CatalogConfig::new(self.root);
        if let Some(input) = self.input {
            config.csv_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config();

    catalog::run(&config).context("failed to build character catalogue")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_root() {
        let cli = Cli::parse_from(["spinecat", "--root", "assets"]);
        let config = cli.into_config();

        assert_eq!(config.csv_path, PathBuf::from("assets/characters.csv"));
        assert_eq!(config.output_path, PathBuf::from("assets/characters.json"));
        assert_eq!(config.datings_dir, PathBuf::from("assets/datings"));
    }

    #[test]
    fn test_overrides_win() {
        let cli = Cli::parse_from(["spinecat", "--input", "rows.csv", "--output", "out.json"]);
        let config = cli.into_config();

        assert_eq!(config.csv_path, PathBuf::from("rows.csv"));
        assert_eq!(config.output_path, PathBuf::from("out.json"));
        assert_eq!(config.root, PathBuf::from("public"));
    }
}
