//! Parsing of comma-separated numeric lists

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// Field at `position` (0-based, empty fields not counted) is not a number
    NotANumber { position: usize, field: String },
    NotFinite { position: usize, value: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotANumber { position, field } => {
                write!(f, "entry {} is not a number: '{}'", position + 1, field)
            }
            InputError::NotFinite { position, value } => {
                write!(f, "entry {} is not finite: {}", position + 1, value)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parses `"1, 2.5,3e2"` into `[1.0, 2.5, 300.0]`.
///
/// Blank fields are skipped, so trailing commas and empty input are fine;
/// the latter yields an empty vector.
pub fn parse_list(text: &str) -> Result<Vec<f64>, InputError> {
    text.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .enumerate()
        .map(|(position, field)| parse_field(position, field))
        .collect()
}

pub(crate) fn parse_field(position: usize, field: &str) -> Result<f64, InputError> {
    let value = field
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            position,
            field: field.to_string(),
        })?;

    if !value.is_finite() {
        return Err(InputError::NotFinite { position, value });
    }

    Ok(value)
}

/// Rejects NaN and infinite entries, e.g. nodata pixels read from a raster.
pub fn check_finite(values: &[f64]) -> Result<(), InputError> {
    match values.iter().position(|value| !value.is_finite()) {
        Some(position) => Err(InputError::NotFinite {
            position,
            value: values[position],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("1, 2.5,3e2").unwrap(), vec![1.0, 2.5, 300.0]);
        assert_eq!(parse_list(" -4 ").unwrap(), vec![-4.0]);
    }

    #[test]
    fn test_parse_list_skips_blank_fields() {
        assert_eq!(parse_list("1,,2, ,").unwrap(), vec![1.0, 2.0]);
        assert!(parse_list("").unwrap().is_empty());
        assert!(parse_list(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_list_rejects_text() {
        assert_eq!(
            parse_list("1, two, 3"),
            Err(InputError::NotANumber {
                position: 1,
                field: "two".to_string()
            })
        );
        // Whitespace is not a separator
        assert!(parse_list("1 2").is_err());
    }

    #[test]
    fn test_parse_list_rejects_non_finite() {
        assert!(matches!(
            parse_list("1, inf"),
            Err(InputError::NotFinite { position: 1, .. })
        ));
        assert!(matches!(
            parse_list("NaN"),
            Err(InputError::NotFinite { position: 0, .. })
        ));
    }

    #[test]
    fn test_check_finite() {
        assert!(check_finite(&[1.0, -2.0, 0.0]).is_ok());
        assert!(check_finite(&[]).is_ok());
        assert!(matches!(
            check_finite(&[1.0, f64::NAN, f64::INFINITY]),
            Err(InputError::NotFinite { position: 1, .. })
        ));
        assert_eq!(
            check_finite(&[1.0, 2.0, f64::NEG_INFINITY]),
            Err(InputError::NotFinite {
                position: 2,
                value: f64::NEG_INFINITY
            })
        );
    }
}
