//! On-disk input journal, written when a session ends.

use floor13::InputJournal;
use std::fs;
use std::io;
use std::path::Path;

pub fn write_atomic(journal: &InputJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(journal).map_err(io::Error::other)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn load(path: &Path) -> io::Result<InputJournal> {
    let content = fs::read_to_string(path)?;
    let journal: InputJournal = serde_json::from_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(journal)
}
