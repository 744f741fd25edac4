mod parse;
use parse::parse_requirement_lines;
pub use parse::RequirementLine;

use crate::warn;

use anyhow::{Context, Result};
use console::style;
use std::{
    fs::File,
    io::{BufReader, ErrorKind},
    path::{Path, PathBuf},
};

/// Dependency requests read from a requirements manifest
pub struct Requirements {
    path: PathBuf,
    lines: Vec<RequirementLine>,
}

impl Requirements {
    pub fn from_file(path: PathBuf) -> Result<Self> {
        let lines = match File::open(&path) {
            Ok(f) => parse_requirement_lines(BufReader::new(f))
                .context(format!("Failed to parse {}", style(path.display()).bold()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // A missing manifest means a package without dependencies
                warn!(
                    "Requirements file {} not found, treating as empty",
                    style(path.display()).bold()
                );
                Vec::new()
            }
            Err(e) => {
                return Err(e).context(format!(
                    "Failed to open requirements file at {}",
                    path.display()
                ))
            }
        };

        Ok(Requirements { path, lines })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ordered dependency specifiers, in file order.
    /// Duplicates are kept, dealing with those is up to the packaging tool.
    pub fn specifiers(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                RequirementLine::Specifier(req) => Some(req.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_no_specifiers() {
        let reqs =
            Requirements::from_file(PathBuf::from("/nonexistent/requirements.txt")).unwrap();
        assert!(reqs.specifiers().is_empty());
    }

    #[test]
    fn specifiers_keep_order_and_duplicates() {
        let reqs = Requirements {
            path: PathBuf::from("requirements.txt"),
            lines: vec![
                RequirementLine::Specifier("requests==2.0".to_string()),
                RequirementLine::Empty,
                RequirementLine::Editable,
                RequirementLine::Specifier("numpy".to_string()),
                RequirementLine::Specifier("numpy".to_string()),
            ],
        };
        assert_eq!(reqs.specifiers(), vec!["requests==2.0", "numpy", "numpy"]);
    }

    #[test]
    fn load_twice_yields_identical_sequences() {
        let dir = std::env::temp_dir().join("manifesto-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("requirements.txt");
        std::fs::write(&path, "requests==2.0\n\n-e .\nnumpy\n").unwrap();

        let first = Requirements::from_file(path.clone()).unwrap();
        let second = Requirements::from_file(path).unwrap();
        assert_eq!(first.specifiers(), vec!["requests==2.0", "numpy"]);
        assert_eq!(first.specifiers(), second.specifiers());
    }
}
