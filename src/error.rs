//! Crate-level error types.

use std::fmt;

/// Errors produced by the viso-camera crate.
///
/// The per-frame transition core never fails; these errors only arise at the
/// configuration boundary (options files, option values and easing
/// parameters).
#[derive(Debug)]
pub enum CameraError {
    /// Ease-in/ease-out fractions outside `[0, 1]` or summing to more than 1.
    InvalidEase {
        /// Requested length of the accelerating phase.
        ease_in: f32,
        /// Requested length of the decelerating phase.
        ease_out: f32,
    },
    /// A numeric option that is not finite or lies outside its valid range.
    InvalidOption {
        /// Option key, as written in TOML.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEase { ease_in, ease_out } => write!(
                f,
                "invalid easing: ease_in={ease_in}, ease_out={ease_out} \
                 (each must lie in [0, 1] and their sum must not exceed 1)"
            ),
            Self::InvalidOption { name, value } => {
                write!(f, "invalid option: {name}={value}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CameraError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_ease_message_names_both_fractions() {
        let err = CameraError::InvalidEase {
            ease_in: 0.7,
            ease_out: 0.6,
        };
        let msg = err.to_string();
        assert!(msg.contains("ease_in=0.7"));
        assert!(msg.contains("ease_out=0.6"));
    }

    #[test]
    fn invalid_option_names_key_and_value() {
        let err = CameraError::InvalidOption {
            name: "fov",
            value: -5.0,
        };
        assert_eq!(err.to_string(), "invalid option: fov=-5");
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;

        let err: CameraError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
