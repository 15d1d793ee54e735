use super::{Data, DataReader, ReadError};
use crate::input::parse_field;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::warn;

/// Reads numbers separated by commas, whitespace or newlines.
///
/// A first line made only of non-numeric fields is treated as a header and
/// skipped.
pub struct TextReader {
    pub file_name: String,
}

impl DataReader for TextReader {
    fn read_data(&self) -> Result<Data, ReadError> {
        let file = File::open(&self.file_name)?;
        let reader = BufReader::new(file);

        let mut buffer = Vec::new();
        let mut seen_data = false;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|field| !field.is_empty())
                .collect();

            if fields.is_empty() {
                continue;
            }

            if !seen_data && fields.iter().all(|field| field.parse::<f64>().is_err()) {
                warn!(file = %self.file_name, line = idx + 1, "skipping header line");
                seen_data = true;
                continue;
            }
            seen_data = true;

            for field in fields {
                let value = parse_field(buffer.len(), field).map_err(|e| ReadError::Text {
                    line: idx + 1,
                    message: e.to_string(),
                })?;
                buffer.push(value);
            }
        }

        let width = u32::try_from(buffer.len()).map_err(|_| ReadError::Text {
            line: buffer.len(),
            message: format!("more than {} values", u32::MAX),
        })?;

        Ok(Data {
            width,
            height: 1,
            buffer,
        })
    }
}
