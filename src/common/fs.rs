use std::{fs, io::ErrorKind, path::Path, time::SystemTime};

use crate::LoadError;

/// Identity of a file on disk at one point in time: size plus last modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FileStamp {
    pub(crate) len: u64,
    pub(crate) modified: Option<SystemTime>,
}

/// Map an I/O error on `path` to the load taxonomy; a missing file is its own case.
fn io_error(path: &Path, source: std::io::Error) -> LoadError {
    match source.kind() {
        ErrorKind::NotFound => LoadError::MissingFile { path: path.to_path_buf() },
        _ => LoadError::Io { path: path.to_path_buf(), source },
    }
}

/// Stat `path`, erroring if it does not exist or is not a regular file.
pub(crate) fn stamp_file(path: &Path) -> Result<FileStamp, LoadError> {
    let meta = fs::metadata(path).map_err(|e| io_error(path, e))?;
    if !meta.is_file() {
        return Err(LoadError::Shape { path: path.to_path_buf(), reason: "path exists but is not a file".into() })
    }
    Ok(FileStamp { len: meta.len(), modified: meta.modified().ok() })
}

/// Read a whole input file into memory.
pub(crate) fn read_input_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|e| io_error(path, e))
}
