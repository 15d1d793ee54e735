//! Readers for value files
//!
//! Values to convert can be loaded from a single-band TIFF raster or from a
//! plain text / CSV file instead of being typed on the command line.

pub mod raster;
pub mod text;
pub mod types;
pub mod utils;

pub use raster::TiffReader;
pub use text::TextReader;
pub use types::{Data, DataReader, FileError, FileType, ReadError};
pub use utils::reader_from_filetype;

pub fn create_reader(file_name: String) -> Result<Box<dyn DataReader>, FileError> {
    match reader_from_filetype(file_name.as_ref()) {
        Ok(FileType::Tiff) => Ok(Box::new(TiffReader { file_name })),
        Ok(FileType::Text) => Ok(Box::new(TextReader { file_name })),
        Err(e) => Err(e),
    }
}
