use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, Chainable};

/// A destination for rendered output.
pub trait Sink {
    fn write_text(&self, text: &str) -> Result<()>;
}

impl Sink for &Path {
    /// Writes through a sibling `.tmp` file and renames into place, so a
    /// failed run cannot leave a truncated output mistaken for a complete
    /// one.
    fn write_text(&self, text: &str) -> Result<()> {
        let Some(name) = self.file_name() else {
            return err! {
                "output path has no file name",
                "path" => self.display(),
            };
        };

        let mut tmp_name = name.to_os_string();
        tmp_name.push(".tmp");
        let tmp = self.with_file_name(tmp_name);

        fs::write(&tmp, text).chain_with(|| error! {
            "failed to write output",
            "file path" => tmp.display(),
        })?;

        fs::rename(&tmp, self).chain_with(|| error! {
            "failed to move output into place",
            "temporary path" => tmp.display(),
            "file path" => self.display(),
        })
    }
}

impl Sink for PathBuf {
    fn write_text(&self, text: &str) -> Result<()> {
        self.as_path().write_text(text)
    }
}
