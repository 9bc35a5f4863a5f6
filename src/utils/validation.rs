use crate::utils::error::{CardError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CardError::ValidationError {
            message: format!("{}: URL cannot be empty", field_name),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CardError::ValidationError {
                message: format!("{}: unsupported URL scheme: {}", field_name, scheme),
            }),
        },
        Err(e) => Err(CardError::ValidationError {
            message: format!("{}: invalid URL format: {}", field_name, e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CardError::ValidationError {
            message: format!("{}: value cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

/// Accepts `#RGB` and `#RRGGBB` color values, which is what the theme
/// presets and the builder UI produce.
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    let digits = match value.strip_prefix('#') {
        Some(rest) => rest,
        None => {
            return Err(CardError::ValidationError {
                message: format!("{}: color must start with '#': {}", field_name, value),
            })
        }
    };

    if digits.len() != 3 && digits.len() != 6 {
        return Err(CardError::ValidationError {
            message: format!("{}: color must be #RGB or #RRGGBB: {}", field_name, value),
        });
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CardError::ValidationError {
            message: format!("{}: color contains non-hex characters: {}", field_name, value),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CardError::ValidationError {
            message: format!(
                "{}: value {} must be between {} and {}",
                field_name, value, min, max
            ),
        });
    }
    Ok(())
}
