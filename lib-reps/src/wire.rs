//! Decoding of the wearable's text stream. Every sample is sent as separate messages, one per
//! axis (`x<value>`, `y<value>`, `z<value>`) followed by a timestamp message (`t<millis>`) that
//! closes the sample.

use core::{error::Error, fmt, num::{ParseFloatError, ParseIntError}};
use math::*;

/// Raw sample together with the sensor's own timestamp.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedSample
{
    pub timestamp_ms: u64,
    pub accel: Vector,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WireError
{
    Empty,
    UnknownTag(char),
    InvalidAxis { axis: char, source: ParseFloatError },
    InvalidTimestamp(ParseIntError),

    /// A timestamp arrived before all three axes of the sample.
    IncompleteSample,
}

impl Error for WireError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidAxis { source, .. } => Some(source),
            Self::InvalidTimestamp(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty message"),
            Self::UnknownTag(tag) => write!(f, "Unknown message tag '{}'", tag),
            Self::InvalidAxis { axis, source } => write!(f, "Invalid {} value: {}", axis, source),
            Self::InvalidTimestamp(err) => write!(f, "Invalid timestamp: {}", err),
            Self::IncompleteSample => write!(f, "Timestamp received before all three axes"),
        }
    }
}

impl From<ParseIntError> for WireError
{
    fn from(err: ParseIntError) -> Self {
        WireError::InvalidTimestamp(err)
    }
}

/// Collects axis messages until a timestamp completes the sample.
///
#[derive(Debug, Default)]
pub struct SampleAssembler
{
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
}

impl SampleAssembler
{
    pub const fn new() -> Self {
        SampleAssembler { x: None, y: None, z: None }
    }

    /// Drop any partially received sample.
    ///
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Feed one message. Returns the finished sample when `message` was the closing timestamp.
    /// Axes may arrive in any order; a repeated axis replaces the earlier value.
    ///
    pub fn feed(&mut self, message: &str) -> Result<Option<TimedSample>, WireError> {
        let message = message.trim();
        let mut chars = message.chars();
        let tag = chars.next().ok_or(WireError::Empty)?;
        let value = chars.as_str().trim();

        let slot = match tag {
            'x' => &mut self.x,
            'y' => &mut self.y,
            'z' => &mut self.z,
            't' => {
                // Whatever happens, the timestamp closes the pending sample.
                let axes = (self.x, self.y, self.z);
                self.clear();
                let timestamp_ms = value.parse::<u64>()?;
                let sample = match axes {
                    (Some(x), Some(y), Some(z)) => TimedSample { timestamp_ms, accel: Vector::new(x, y, z) },
                    _ => return Err(WireError::IncompleteSample),
                };
                return Ok(Some(sample));
            }
            other => return Err(WireError::UnknownTag(other)),
        };

        let parsed = value
            .parse::<f64>()
            .map_err(|source| WireError::InvalidAxis { axis: tag, source })?;
        if slot.replace(parsed).is_some() {
            log::trace!("axis {} sent twice before timestamp", tag);
        }
        Ok(None)
    }
}
