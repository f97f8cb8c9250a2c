//! Locates the instruction documents. Every `<MNEMONIC>.md` file in the
//! documentation directory describes one instruction; the file stem is the
//! instruction's identifier.
use super::*;

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

pub const DOC_EXTENSION: &str = "md";

/// The documentation directory and the identifiers found in it.
pub struct SpecLoader {
    root: PathBuf,
    ids: Vec<String>,
}
impl SpecLoader {
    /// Lists the documents under `root`. A missing directory is an error, an empty one is not.
    pub fn open(root: &Path) -> Result<Self, Error> {
        if !root.is_dir() {
            return Err(Error::new(
                ErrorKind::IO,
                None,
                &format!("documentation directory \"{}\" not found", root.display()),
            ));
        }
        let mut ids = Vec::new();
        for entry in fs::read_dir(root)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(OsStr::to_str) != Some(DOC_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(OsStr::to_str) {
                ids.push(stem.to_string());
            }
        }
        // body emission order follows the file names
        ids.sort();
        verbose_println!("found {} instruction document(s) in {}", ids.len(), root.display());
        Ok(SpecLoader {
            root: root.to_path_buf(),
            ids,
        })
    }
    pub fn ids(&self) -> &[String] { &self.ids }
    pub fn file_name(id: &str) -> String { format!("{}.{}", id, DOC_EXTENSION) }
    /// Reads the raw text of the document for `id`.
    pub fn load(&self, id: &str) -> Result<String, Error> {
        let path = self.root.join(Self::file_name(id));
        fs::read_to_string(&path).map_err(|e| {
            Error::new(
                ErrorKind::IO,
                Some(Self::file_name(id)),
                &format!("failed to read {}: {}", path.display(), e),
            )
        })
    }
    /// Reads every document, pairing each identifier with its text.
    pub fn load_all(&self) -> Result<Vec<(String, String)>, Error> {
        self.ids().iter().map(|id| Ok((id.clone(), self.load(id)?))).collect()
    }
}
