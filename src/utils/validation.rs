use crate::domain::model::Triplet;
use crate::utils::error::{MultiplesError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Splits file content into logical lines. A single trailing newline is a
/// terminator, not an extra empty line; anything else counts.
pub fn content_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

pub fn validate_non_empty_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(MultiplesError::ConfigError {
            message: format!("{} cannot be empty", field_name),
        });
    }
    Ok(())
}

/// Full pre-scan of raw input bytes. Checks run in a fixed order (non-empty,
/// decodable, then every line) and the first violation aborts the run before
/// any computation happens.
pub fn validate_source(path: &str, data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Err(MultiplesError::EmptyInputError {
            path: path.to_string(),
        });
    }

    let text = std::str::from_utf8(data).map_err(|_| MultiplesError::EncodingError {
        path: path.to_string(),
    })?;

    for (index, line) in content_lines(text).iter().enumerate() {
        validate_line(path, index + 1, line)?;
    }

    Ok(())
}

pub fn validate_line(path: &str, line_number: usize, line: &str) -> Result<Triplet> {
    if line.is_empty() {
        return Err(MultiplesError::FormatError {
            path: path.to_string(),
            line: line_number,
            reason: "line is empty".to_string(),
        });
    }

    if line.starts_with(' ') || line.ends_with(' ') {
        return Err(MultiplesError::FormatError {
            path: path.to_string(),
            line: line_number,
            reason: "line contains leading or trailing spaces".to_string(),
        });
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(MultiplesError::FormatError {
            path: path.to_string(),
            line: line_number,
            reason: "each line must contain exactly three numbers".to_string(),
        });
    }

    for token in tokens {
        if !token.chars().all(|c| c.is_ascii_digit()) {
            return Err(MultiplesError::NotNaturalError {
                path: path.to_string(),
                line: line_number,
            });
        }
    }

    let triplet = Triplet::from_line(line).ok_or_else(|| MultiplesError::RangeError {
        message: format!("{}: {}: line contains values out of range", path, line_number),
    })?;

    if triplet.a < 1 || triplet.b < 1 || triplet.goal < 1 {
        return Err(MultiplesError::RangeError {
            message: format!("{}: {}: line contains values < 1", path, line_number),
        });
    }

    Ok(triplet)
}
