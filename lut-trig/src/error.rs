use thiserror::Error;

use crate::float::LutFloat;

/// Returned by the `checked_*` lookups. The plain lookups never fail.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum TrigError {
	#[error("lookup table input must be finite, got {value}")]
	NonFinite { value: f64 }
}

impl TrigError {
	pub(crate) fn finite<T: LutFloat>(value: T) -> Result<T, TrigError> {
		if value.is_finite() {
			Ok(value)
		} else {
			Err(TrigError::NonFinite { value: value.to_f64().unwrap_or(f64::NAN) })
		}
	}
}
