//! Compile-time codecs.
//! 
//! These fix the width, signedness, and byte order in the type, so that the
//! encoded form can be a [`GenericArray`] whose length is known at compile
//! time. They share their implementation with [`IntCodec`].



//		Modules

#[cfg(test)]
#[path = "tests/fixed.rs"]
mod tests;



//		Packages

use crate::{
	codec::IntCodec,
	endian::{BigEndian, ByteOrder, LittleEndian},
	errors::CodecError,
	signedness::Signedness,
	width::BitWidth,
};
use bytes::{Buf, BufMut};
use core::{
	marker::PhantomData,
	ops::Div,
};
use generic_array::{ArrayLength, GenericArray};
use malachite::Integer;
use typenum::{Quot, U8, U16, U24, U32, U64, Unsigned};



//		Type aliases

/// Helper type to calculate number of bytes needed for bits.
pub type BytesForBits<BITS> = Quot<BITS, U8>;

/// The encoded form of a [`FixedCodec`].
pub type Encoded<BITS> = GenericArray<u8, BytesForBits<BITS>>;

/// A signed 8-bit codec.
pub type Int8     = FixedCodec<U8,  true,  BigEndian>;

/// An unsigned 8-bit codec.
pub type UInt8    = FixedCodec<U8,  false, BigEndian>;

/// A signed big-endian 16-bit codec.
pub type Int16Be  = FixedCodec<U16, true,  BigEndian>;

/// A signed little-endian 16-bit codec.
pub type Int16Le  = FixedCodec<U16, true,  LittleEndian>;

/// An unsigned big-endian 16-bit codec.
pub type UInt16Be = FixedCodec<U16, false, BigEndian>;

/// An unsigned little-endian 16-bit codec.
pub type UInt16Le = FixedCodec<U16, false, LittleEndian>;

/// A signed big-endian 24-bit codec.
pub type Int24Be  = FixedCodec<U24, true,  BigEndian>;

/// A signed little-endian 24-bit codec.
pub type Int24Le  = FixedCodec<U24, true,  LittleEndian>;

/// An unsigned big-endian 24-bit codec.
pub type UInt24Be = FixedCodec<U24, false, BigEndian>;

/// An unsigned little-endian 24-bit codec.
pub type UInt24Le = FixedCodec<U24, false, LittleEndian>;

/// A signed big-endian 32-bit codec.
pub type Int32Be  = FixedCodec<U32, true,  BigEndian>;

/// A signed little-endian 32-bit codec.
pub type Int32Le  = FixedCodec<U32, true,  LittleEndian>;

/// An unsigned big-endian 32-bit codec.
pub type UInt32Be = FixedCodec<U32, false, BigEndian>;

/// An unsigned little-endian 32-bit codec.
pub type UInt32Le = FixedCodec<U32, false, LittleEndian>;

/// A signed big-endian 64-bit codec.
pub type Int64Be  = FixedCodec<U64, true,  BigEndian>;

/// A signed little-endian 64-bit codec.
pub type Int64Le  = FixedCodec<U64, true,  LittleEndian>;

/// An unsigned big-endian 64-bit codec.
pub type UInt64Be = FixedCodec<U64, false, BigEndian>;

/// An unsigned little-endian 64-bit codec.
pub type UInt64Le = FixedCodec<U64, false, LittleEndian>;



//		Structs

//		FixedCodec																
/// A codec whose parameters are fixed at compile time.
/// 
/// # Type parameters
/// 
/// * `BITS`   - The encoded width, as a [`typenum`] type. Must be a positive
///              multiple of 8.
/// * `SIGNED` - Whether values are signed (`true`) or unsigned (`false`).
/// * `E`      - The byte order, i.e. [`BigEndian`] or [`LittleEndian`].
/// 
/// The width is checked when the codec is first used, and an invalid width
/// fails the build rather than surfacing at runtime. So `FixedCodec<U12, false,
/// BigEndian>` can be named, but any call on it will not compile:
/// 
/// ```compile_fail
/// use fixint::{BigEndian, FixedCodec, Integer};
/// use typenum::U12;
/// 
/// let bytes = FixedCodec::<U12, false, BigEndian>::encode(&Integer::from(1));
/// ```
/// 
/// A valid width builds as normal:
/// 
/// ```
/// use fixint::{BigEndian, FixedCodec, Integer};
/// use typenum::U24;
/// 
/// let bytes = FixedCodec::<U24, false, BigEndian>::encode(&Integer::from(1));
/// assert_eq!(bytes.as_slice(), &[0x00, 0x00, 0x01]);
/// ```
/// 
/// Widths that [`typenum`] does not name directly can be built from its
/// operators, e.g. `Prod<U16, U16>` for a 256-bit codec.
/// 
/// This is a marker type: all of its operations are associated functions, and
/// it never needs to be instantiated.
/// 
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct FixedCodec<BITS, const SIGNED: bool, E>(PhantomData<(BITS, E)>);

//󰭅		FixedCodec																
impl<BITS, const SIGNED: bool, E> FixedCodec<BITS, SIGNED, E>
where
	BITS:               Unsigned + Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	E:                  ByteOrder,
{
	//		Public constants													
	/// Number of bits in the encoded form.
	pub const BITS:  u32      = BITS::U32;
	
	/// Number of bytes in the encoded form.
	pub const BYTES: usize    = <BytesForBits<BITS> as Unsigned>::USIZE;
	
	/// The equivalent runtime codec.
	pub const CODEC: IntCodec = {
		assert!(BITS::U32 > 0 && BITS::U32 % 8 == 0, "Width must be a positive multiple of 8");
		IntCodec::with_width(
			BitWidth::from_validated(BITS::U32),
			E::ENDIANNESS,
			if SIGNED { Signedness::Signed } else { Signedness::Unsigned },
		)
	};
	
	//		Public methods														
	
	//		clamp																
	/// Saturates a value into this codec's range.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to clamp.
	/// 
	#[must_use]
	pub fn clamp(value: &Integer) -> Integer {
		Self::CODEC.clamp(value)
	}
	
	//		codec																
	/// The equivalent runtime codec.
	#[must_use]
	pub const fn codec() -> IntCodec {
		Self::CODEC
	}
	
	//		decode																
	/// Decodes a value from its encoded form.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The encoded bytes.
	/// 
	#[must_use]
	pub fn decode(bytes: &Encoded<BITS>) -> Integer {
		Self::CODEC.decode_exact(bytes)
	}
	
	//		decode_from															
	/// Decodes a value from a byte buffer, consuming exactly [`Self::BYTES`]
	/// bytes.
	/// 
	/// # Parameters
	/// 
	/// * `src` - The buffer to read from.
	/// 
	/// # Errors
	/// 
	/// Returns [`CodecError::ShortRead`] if the buffer holds too few bytes, in
	/// which case nothing is consumed.
	/// 
	pub fn decode_from<B: Buf>(src: &mut B) -> Result<Integer, CodecError> {
		Self::CODEC.decode_from(src)
	}
	
	//		encode																
	/// Encodes a value, after clamping it into range.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to encode.
	/// 
	#[must_use]
	pub fn encode(value: &Integer) -> Encoded<BITS> {
		let mut out = Encoded::<BITS>::default();
		Self::CODEC.encode_exact(value, &mut out);
		out
	}
	
	//		encode_to															
	/// Encodes a value onto the end of a byte buffer, after clamping it into
	/// range.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to encode.
	/// * `dst`   - The buffer to write to.
	/// 
	/// # Errors
	/// 
	/// Returns [`CodecError::ShortWrite`] if the buffer cannot take a full
	/// value, in which case nothing is written.
	/// 
	pub fn encode_to<B: BufMut>(value: &Integer, dst: &mut B) -> Result<(), CodecError> {
		Self::CODEC.encode_to(value, dst)
	}
	
	//		max_value															
	/// The largest value this codec can represent.
	#[must_use]
	pub fn max_value() -> Integer {
		Self::CODEC.max_value()
	}
	
	//		min_value															
	/// The smallest value this codec can represent.
	#[must_use]
	pub fn min_value() -> Integer {
		Self::CODEC.min_value()
	}
}
