use super::types::{FileError, FileType};
use std::path::Path;

pub fn reader_from_filetype(path: &Path) -> Result<FileType, FileError> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("tif") | Some("tiff") => Ok(FileType::Tiff),
        Some("csv") | Some("txt") => Ok(FileType::Text),
        _ => Err(FileError::UnknownFileType(path.display().to_string())),
    }
}
