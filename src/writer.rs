use super::emit::Generated;
use super::*;

use std::fs;
use std::path::{Path, PathBuf};

pub const INSTRUCTIONS_FILE: &str = "instructions.rs";
pub const CLOCK_FILE: &str = "clock.rs";
const TMP_EXTENSION: &str = "tmp";

fn tmp_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(".");
    name.push(TMP_EXTENSION);
    PathBuf::from(name)
}

fn write_err(pb: &Path, e: std::io::Error) -> Error {
    Error::new(ErrorKind::IO, None, &format!("failed to write {}: {}", pb.display(), e))
}

/// Writes both generated files into `out_dir` (created if needed), replacing whatever was there.
/// Both files are staged next to their targets first; the targets are only replaced once
/// every staged write succeeded. Returns the paths written.
pub fn write_outputs(out_dir: &Path, generated: &Generated) -> Result<Vec<PathBuf>, Error> {
    fs::create_dir_all(out_dir)?;
    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::new();
    for (name, text) in [(INSTRUCTIONS_FILE, &generated.instructions), (CLOCK_FILE, &generated.clock)] {
        let pb = out_dir.join(name);
        let tmp = tmp_path(&pb);
        if let Err(e) = fs::write(&tmp, text) {
            for (t, _) in &staged {
                _ = fs::remove_file(t);
            }
            return Err(write_err(&tmp, e));
        }
        verbose_println!("staged {} bytes in {}", text.len(), tmp.display());
        staged.push((tmp, pb));
    }
    let mut written = Vec::new();
    for (tmp, pb) in staged {
        fs::rename(&tmp, &pb).map_err(|e| write_err(&pb, e))?;
        written.push(pb);
    }
    Ok(written)
}
