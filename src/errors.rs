//! Contains error types used throughout the library.



//		Packages

use serde_json::Error as JsonError;
use std::io::ErrorKind as IoErrorKind;
use thiserror::Error as ThisError;



//		Enums

//		CodecError																
/// Represents all possible errors that can occur when building or using a
/// codec.
/// 
/// Note that out-of-range values are never an error. They are saturated to
/// the nearest bound of the codec's range before encoding.
/// 
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum CodecError {
	/// The requested bit width is zero or not a multiple of 8.
	#[error("Invalid width: {0} bits is not a positive multiple of 8")]
	InvalidWidth(u32),
	
	/// A byte slice of the wrong length was supplied.
	#[error("Length mismatch: expected {expected} bytes, got {actual}")]
	LengthMismatch {
		/// The number of bytes the codec works with.
		expected: usize,
		/// The number of bytes supplied.
		actual:   usize,
	},
	
	/// The byte source ran out before a full value could be read.
	#[error("Short read: expected {expected} bytes, got {actual}")]
	ShortRead {
		/// The number of bytes the codec needed.
		expected: usize,
		/// The number of bytes available.
		actual:   usize,
	},
	
	/// The byte sink does not have room for a full value.
	#[error("Short write: expected room for {expected} bytes, got {actual}")]
	ShortWrite {
		/// The number of bytes the codec needed to write.
		expected: usize,
		/// The number of bytes of room available.
		actual:   usize,
	},
	
	/// The underlying reader or writer failed.
	#[error("I/O error: {0}")]
	Io(IoErrorKind),
	
	/// A codec descriptor could not be serialised or deserialised.
	#[error("Invalid descriptor: {0}")]
	Json(String),
}

//󰭅		From: JsonError -> CodecError											
impl From<JsonError> for CodecError {
	//		from																
	fn from(err: JsonError) -> Self {
		Self::Json(err.to_string())
	}
}
