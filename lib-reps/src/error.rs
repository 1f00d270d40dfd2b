use core::{error::Error, fmt};

/// Invalid detector or cadence tuning. Only ever produced while starting a session, never from
/// the per-sample path.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError
{
    InvalidGate { min: f64, max: f64 },
    InvalidTolerance(f64),
    InvalidBootstrapBand(f64),
    InvalidCadence { fast_below_ms: u64, slow_after_ms: u64 },
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidGate { min, max } => {
                write!(f, "Magnitude gate needs 0 <= min < max, got ({}, {})", min, max)
            }
            Self::InvalidTolerance(tolerance) => write!(f, "Edge tolerance {} is not a number", tolerance),
            Self::InvalidBootstrapBand(band) => {
                write!(f, "Bootstrap band {} must lie in (0, {}]", band, crate::MAX_BOOTSTRAP_BAND)
            }
            Self::InvalidCadence { fast_below_ms, slow_after_ms } => write!(
                f,
                "Cadence 'too fast' threshold ({} ms) exceeds the 'too slow' threshold ({} ms)",
                fast_below_ms, slow_after_ms
            ),
        }
    }
}

/// Reasons a session refuses to start.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionError
{
    MissingExercise,
    UntimedSequenceEntry { position: i32 },
    Config(ConfigError),
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingExercise => write!(f, "Session started without an exercise"),
            Self::UntimedSequenceEntry { position } => write!(
                f,
                "Exercise at sequence position {} needs a positive repetition target",
                position
            ),
            Self::Config(err) => write!(f, "Invalid tracking configuration: {}", err),
        }
    }
}

impl From<ConfigError> for SessionError
{
    fn from(err: ConfigError) -> Self {
        SessionError::Config(err)
    }
}
