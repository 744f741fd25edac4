use crate::config::Metadata;

use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs::OpenOptions, io::Write, path::Path};

/// Everything the packaging tool needs to know about the package.
/// Built once, handed over, never mutated.
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct PackageDescriptor {
    pub name: String,
    pub version: String,
    pub author: String,
    pub author_email: String,
    pub dependencies: Vec<String>,
}

impl PackageDescriptor {
    pub fn new(metadata: &Metadata, dependencies: Vec<String>) -> Self {
        PackageDescriptor {
            name: metadata.name.clone(),
            version: metadata.version.clone(),
            author: metadata.author.clone(),
            author_email: metadata.author_email.clone(),
            dependencies,
        }
    }

    pub fn render(&self) -> Result<String> {
        let res = toml::to_string(self).context("Failed to render package descriptor")?;
        Ok(res)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let data = self.render()?;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .context(format!(
                "Failed to open descriptor output at {}",
                path.display()
            ))?;
        file.write_all(data.as_bytes())
            .context(format!("Failed to write descriptor to {}", path.display()))?;
        Ok(())
    }
}
