//! The Fixint crate is a library of fixed-width integer codecs.
//! 
//! Each codec is defined by a bit width (any positive multiple of 8), a byte
//! order, and a signedness. It can:
//! 
//!   1. Clamp any value into the range of the integer type it describes.
//!   2. Encode a value into exactly `bits / 8` bytes, using two's complement
//!      for signed types.
//!   3. Decode those bytes back into a value, reconstructing the sign.
//! 
//! Values are arbitrary-precision [`Integer`]s, so there is no upper limit on
//! width.
//! 
//! Codecs come in two forms. [`IntCodec`] is chosen at runtime, either
//! directly or through [`resolve()`] or a [`CodecSelector`], which is suited
//! to codecs named by a schema. [`FixedCodec`] is chosen at compile time, with
//! aliases such as [`UInt32Be`] for the common cases, and encodes to a
//! fixed-size array.
//! 
//! ```
//! use fixint::{CodecError, Endianness, Integer, Signedness, resolve};
//! 
//! let codec = resolve(24, Endianness::Little, Signedness::Unsigned)?;
//! let bytes = codec.encode(&Integer::from(0x00AB_CDEF_u32));
//! assert_eq!(&bytes[..], &[0xEF, 0xCD, 0xAB]);
//! assert_eq!(codec.decode(&bytes)?, Integer::from(0x00AB_CDEF_u32));
//! # Ok::<(), CodecError>(())
//! ```
//! 
//! Out-of-range values are saturated rather than rejected:
//! 
//! ```
//! use fixint::{IntCodec, Integer};
//! 
//! let bytes = IntCodec::UINT8.encode(&Integer::from(300));
//! assert_eq!(&bytes[..], &[0xFF]);
//! ```



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod codec;
mod endian;
mod errors;
mod fixed;
mod range;
mod selector;
mod signedness;
mod width;
mod words;



//		Packages

pub use codec::{IntCodec, decode, encode};
pub use endian::{BigEndian, ByteOrder, Endianness, LittleEndian};
pub use errors::CodecError;
pub use fixed::{
	BytesForBits,
	Encoded,
	FixedCodec,
	Int8,
	Int16Be,
	Int16Le,
	Int24Be,
	Int24Le,
	Int32Be,
	Int32Le,
	Int64Be,
	Int64Le,
	UInt8,
	UInt16Be,
	UInt16Le,
	UInt24Be,
	UInt24Le,
	UInt32Be,
	UInt32Le,
	UInt64Be,
	UInt64Le,
};
pub use malachite::Integer;
pub use range::{clamp, max_value, min_value};
pub use selector::{COMMON_WIDTHS, CodecSelector, resolve};
pub use signedness::Signedness;
pub use width::BitWidth;
