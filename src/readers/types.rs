use std::fmt;

pub trait DataReader {
    fn read_data(&self) -> Result<Data, ReadError>;
}

#[derive(Debug)]
pub enum ReadError {
    Io(std::io::Error),
    Tiff(String),
    Text { line: usize, message: String },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "I/O error: {}", e),
            ReadError::Tiff(e) => write!(f, "TIFF error: {}", e),
            ReadError::Text { line, message } => write!(f, "line {}: {}", line, message),
        }
    }
}

impl std::error::Error for ReadError {}

impl From<std::io::Error> for ReadError {
    fn from(err: std::io::Error) -> ReadError {
        ReadError::Io(err)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum FileError {
    UnknownFileType(String),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::UnknownFileType(path) => write!(
                f,
                "unsupported file type: {} (expected .tif, .tiff, .csv or .txt)",
                path
            ),
        }
    }
}

impl std::error::Error for FileError {}

/// Values read from a file, flattened in row-major order
#[derive(Debug)]
pub struct Data {
    pub width: u32,
    pub height: u32,
    pub buffer: Vec<f64>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FileType {
    Tiff,
    Text,
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min_value = self
            .buffer
            .iter()
            .copied()
            .filter(|x| !x.is_nan())
            .fold(f64::NAN, f64::min);

        let max_value = self
            .buffer
            .iter()
            .copied()
            .filter(|x| !x.is_nan())
            .fold(f64::NAN, f64::max);

        write!(
            f,
            "Width: {}\nHeight: {}\nBuffer Length: {}\nMin value: {}\nMax value: {}",
            self.width,
            self.height,
            self.buffer.len(),
            min_value,
            max_value,
        )
    }
}
