use anyhow::{bail, Context, Result};
use clap::Parser;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

/// Static package metadata, read from a TOML file
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Metadata {
    pub name: String,
    pub version: String,
    pub author: String,
    pub author_email: String,
}

impl Metadata {
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut file = File::open(path)
            .context(format!("Failed to open metadata file at {}", path.display()))?;
        let mut data = String::new();
        file.read_to_string(&mut data)
            .context("Failed to read metadata file")?;
        let res: Metadata = toml::from_str(&data).context("Failed to parse metadata file")?;
        Ok(res)
    }

    pub fn check_sanity(&self) -> Result<()> {
        lazy_static! {
            static ref PKG_NAME: Regex = Regex::new("^[a-zA-Z0-9._-]+$").unwrap();
            static ref PKG_VERSION: Regex = Regex::new("^[0-9][a-zA-Z0-9.+-]*$").unwrap();
            static ref EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap();
        }

        if !PKG_NAME.is_match(&self.name) {
            bail!("Invalid character in package name {}", self.name);
        }
        if !PKG_VERSION.is_match(&self.version) {
            bail!(
                "Invalid version {} for package {}",
                self.version,
                self.name
            );
        }
        if !EMAIL.is_match(&self.author_email) {
            bail!("Invalid author email {}", self.author_email);
        }
        Ok(())
    }
}

#[derive(Parser)]
#[clap(about, version, author)]
pub struct Opts {
    #[clap(
        short,
        long,
        default_value = "requirements.txt",
        help = "Path to the requirements manifest"
    )]
    pub requirements: PathBuf,
    #[clap(
        short,
        long,
        default_value = "metadata.toml",
        help = "Path to the package metadata file"
    )]
    pub metadata: PathBuf,
    #[clap(
        short,
        long,
        help = "Write the descriptor to this file instead of stdout"
    )]
    pub output: Option<PathBuf>,
    #[clap(short, long, help = "Say yes to every prompt")]
    pub yes: bool,
    #[clap(short, long, help = "Print every retained dependency specifier")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Metadata {
        Metadata {
            name: "network-security".to_string(),
            version: "0.0.1".to_string(),
            author: "Madhumanti".to_string(),
            author_email: "madhumanti@example.com".to_string(),
        }
    }

    #[test]
    fn parse_metadata() {
        let data = r#"
name = "network-security"
version = "0.0.1"
author = "Madhumanti"
author_email = "madhumanti@example.com"
"#;
        let metadata: Metadata = toml::from_str(data).unwrap();
        assert_eq!(metadata.name, "network-security");
        assert_eq!(metadata.version, "0.0.1");
        assert!(metadata.check_sanity().is_ok());
    }

    #[test]
    fn sanity_rejects_bad_fields() {
        let mut bad_name = sample();
        bad_name.name = "no spaces allowed".to_string();
        assert!(bad_name.check_sanity().is_err());

        let mut bad_version = sample();
        bad_version.version = "v1".to_string();
        assert!(bad_version.check_sanity().is_err());

        let mut bad_email = sample();
        bad_email.author_email = "not-an-address".to_string();
        assert!(bad_email.check_sanity().is_err());
    }
}
