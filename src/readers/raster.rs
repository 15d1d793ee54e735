use super::{Data, DataReader, ReadError};
use std::fs::File;
use std::io::BufReader;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

/// Reads the first image of a TIFF file as a flat list of values.
pub struct TiffReader {
    pub file_name: String,
}

impl DataReader for TiffReader {
    fn read_data(&self) -> Result<Data, ReadError> {
        let file = File::open(&self.file_name)?;

        let reader = BufReader::new(file);

        let mut decoder = Decoder::new(reader)
            .map_err(|e| ReadError::Tiff(format!("Failed to decode TIFF: {}", e)))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| ReadError::Tiff(format!("Failed to get dimensions: {}", e)))?;

        let buffer: Vec<f64> = match decoder
            .read_image()
            .map_err(|e| ReadError::Tiff(format!("Failed to read image: {}", e)))?
        {
            DecodingResult::U8(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::U16(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::U32(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::I16(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::I32(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::F32(data) => data.into_iter().map(f64::from).collect(),
            DecodingResult::F64(data) => data,
            _ => return Err(ReadError::Tiff("Unsupported pixel format".to_string())),
        };

        debug!(file = %self.file_name, width, height, "read TIFF values");

        Ok(Data {
            width,
            height,
            buffer,
        })
    }
}
