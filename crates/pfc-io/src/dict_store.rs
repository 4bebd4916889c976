//! Dictionary persistence — the JSON artifact on disk, written atomically.

use crate::error::Result;
use pfc_codec::Dictionary;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write the dictionary JSON to `path` via a temp file + rename, so a
/// reader never observes a partial artifact.
pub fn save(dict: &Dictionary, path: &Path) -> Result<()> {
    let json = serde_json::to_string(dict)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    let result = (|| -> std::io::Result<()> {
        let mut f = fs::File::create(&tmp)?;
        f.write_all(json.as_bytes())?;
        f.flush()?;
        f.sync_all()?;
        fs::rename(&tmp, path)?;
        Ok(())
    })();
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    Ok(result?)
}

/// Read a dictionary back from its JSON artifact.
pub fn load(path: &Path) -> Result<Dictionary> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
