use std::path::{Path, PathBuf};

use fxhash::FxHashMap;

use super::error::ManifestError;

/// A single manifest entry: which register to set and where its nominal values live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub register: String,
    pub path: PathBuf,
}

/// The nominal-DAC manifest, an ordered register -> nominal value file mapping.
///
/// Lines starting with `#` are comments; blank lines are skipped. Otherwise the
/// first two whitespace-separated tokens name a register and the file holding
/// its per-slot nominal values. If a register appears more than once the last
/// file path wins, keeping the position of the first occurrence.
#[derive(Debug, Clone, Default)]
pub struct NominalDacManifest {
    entries: Vec<ManifestEntry>,
}

impl NominalDacManifest {
    /// Read a manifest file. Registers missing from the maximum table are
    /// recorded anyway; they only produce a warning.
    pub fn from_file(
        path: &Path,
        max_values: &FxHashMap<&'static str, u32>,
    ) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::BadFilePath(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents, max_values)
    }

    /// Parse manifest text. A line with fewer than two tokens is an error.
    pub fn parse(
        contents: &str,
        max_values: &FxHashMap<&'static str, u32>,
    ) -> Result<Self, ManifestError> {
        let mut manifest = NominalDacManifest::default();

        for (number, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let register = tokens
                .next()
                .ok_or(ManifestError::BadLineFormat(number + 1))?;
            let path = tokens
                .next()
                .ok_or(ManifestError::BadLineFormat(number + 1))?;

            if !max_values.contains_key(register) {
                log::warn!("No maximum value found for register: {register}");
            }

            match manifest
                .entries
                .iter_mut()
                .find(|entry| entry.register == register)
            {
                Some(entry) => entry.path = PathBuf::from(path),
                None => manifest.entries.push(ManifestEntry {
                    register: register.to_string(),
                    path: PathBuf::from(path),
                }),
            }
        }

        Ok(manifest)
    }

    /// The manifest entries, in file order
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
