use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, Chainable};

/// A source of metadata or template text. Sources are consumed whole; the
/// pipeline never streams.
pub trait Source {
    fn read_text(self) -> Result<String>;
}

impl Source for String {
    fn read_text(self) -> Result<String> {
        Ok(self)
    }
}

impl Source for &str {
    fn read_text(self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl Source for &Path {
    fn read_text(self) -> Result<String> {
        fs::read_to_string(self).chain_with(|| error! {
            "failed to read file",
            "file path" => self.display(),
        })
    }
}

impl Source for &PathBuf {
    fn read_text(self) -> Result<String> {
        self.as_path().read_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_names_the_path() {
        let path = Path::new("does/not/exist.json");
        let error = path.read_text().unwrap_err().to_string();
        assert!(error.contains("failed to read file"), "{error}");
        assert!(error.contains("does/not/exist.json"), "{error}");
    }
}
