//! The fixed-width integer codec.

//	All arithmetic here is on arbitrary-precision integers, which cannot overflow.
#![allow(clippy::arithmetic_side_effects, reason = "Integer arithmetic cannot overflow")]



//		Modules

#[cfg(test)]
#[path = "tests/codec.rs"]
mod tests;



//		Packages

use crate::{
	endian::Endianness,
	errors::CodecError,
	range,
	signedness::Signedness,
	width::BitWidth,
	words,
};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use core::{
	fmt::{Display, Formatter, self},
	ops::RangeInclusive,
};
use malachite::Integer;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::debug;



//		Structs

//		IntCodec																
/// A codec for integers of a fixed width, byte order, and signedness.
/// 
/// An [`IntCodec`] maps values to and from an exact-length byte sequence of
/// `bits / 8` bytes. Signed values use two's complement. The codec holds
/// nothing but its three parameters, never changes after construction, and
/// can be freely copied and shared between threads.
/// 
/// # Values
/// 
/// Values are [`Integer`]s, so there is no limit on width. Values outside the
/// codec's range are saturated to the nearest bound before encoding, and this
/// is not considered an error: an "encode, then decode" round trip always
/// yields the clamped value.
/// 
/// # Byte layout
/// 
/// For the unsigned 16-bit value `0x1234`:
/// 
/// ```text
/// Big-endian:    [0x12, 0x34]
/// Little-endian: [0x34, 0x12]
/// ```
/// 
/// For the signed 8-bit value `-1`, the encoded byte is `0xFF`.
/// 
/// # Descriptors
/// 
/// An [`IntCodec`] serialises to and from a small descriptor, allowing codecs
/// to be named declaratively in a schema:
/// 
/// ```json
/// { "bits": 24, "endian": "little", "signedness": "unsigned" }
/// ```
/// 
/// The width is validated when the descriptor is read, so invalid widths are
/// caught at the point the schema is loaded.
/// 
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct IntCodec {
	/// The encoded width.
	#[serde(rename = "bits")]
	width:      BitWidth,
	
	/// The byte order of the encoded form.
	endian:     Endianness,
	
	/// Whether values are signed.
	signedness: Signedness,
}

//󰭅		IntCodec																
impl IntCodec {
	//		Public constants													
	/// A signed 8-bit codec.
	pub const INT8:  Self = Self::with_width(BitWidth::W8, Endianness::Big, Signedness::Signed);
	
	/// An unsigned 8-bit codec.
	pub const UINT8: Self = Self::with_width(BitWidth::W8, Endianness::Big, Signedness::Unsigned);
	
	//		Constructors														
	
	//		new																	
	/// Creates a new [`IntCodec`].
	/// 
	/// # Parameters
	/// 
	/// * `bits`       - The encoded width in bits. Must be a positive multiple
	///                  of 8.
	/// * `endian`     - The byte order of the encoded form.
	/// * `signedness` - Whether values are signed.
	/// 
	/// # Errors
	/// 
	/// Returns [`CodecError::InvalidWidth`] if `bits` is zero or not a multiple
	/// of 8.
	/// 
	pub fn new(bits: u32, endian: Endianness, signedness: Signedness) -> Result<Self, CodecError> {
		Ok(Self::with_width(BitWidth::new(bits)?, endian, signedness))
	}
	
	//		with_width															
	/// Creates a new [`IntCodec`] from an already-validated width.
	/// 
	/// # Parameters
	/// 
	/// * `width`      - The encoded width.
	/// * `endian`     - The byte order of the encoded form.
	/// * `signedness` - Whether values are signed.
	/// 
	#[must_use]
	pub const fn with_width(width: BitWidth, endian: Endianness, signedness: Signedness) -> Self {
		Self { width, endian, signedness }
	}
	
	//		from_json															
	/// Reads a codec from a JSON descriptor.
	/// 
	/// # Parameters
	/// 
	/// * `json` - The JSON descriptor to read.
	/// 
	/// # Errors
	/// 
	/// If the JSON is malformed, or names an invalid width, then an error will
	/// be returned.
	/// 
	pub fn from_json(json: &str) -> Result<Self, CodecError> {
		Ok(serde_json::from_str(json)?)
	}
	
	//		Public methods														
	
	//		bits																
	/// The encoded width in bits.
	#[must_use]
	pub const fn bits(&self) -> u32 {
		self.width.bits()
	}
	
	//		byte_len															
	/// The exact number of bytes an encoded value occupies.
	#[must_use]
	pub const fn byte_len(&self) -> usize {
		self.width.bytes()
	}
	
	//		clamp																
	/// Saturates a value into this codec's range.
	/// 
	/// See [`range::clamp()`](crate::clamp()).
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to clamp.
	/// 
	#[must_use]
	pub fn clamp(&self, value: &Integer) -> Integer {
		range::clamp(value, self.width, self.signedness)
	}
	
	//		decode																
	/// Decodes a value from its encoded bytes.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The encoded bytes. Must be exactly
	///             [`byte_len()`](IntCodec::byte_len()) bytes long.
	/// 
	/// # Errors
	/// 
	/// Returns [`CodecError::LengthMismatch`] if the slice is the wrong length.
	/// 
	pub fn decode(&self, bytes: &[u8]) -> Result<Integer, CodecError> {
		let expected = self.byte_len();
		if bytes.len() != expected {
			return Err(CodecError::LengthMismatch { expected, actual: bytes.len() });
		}
		Ok(self.decode_exact(bytes))
	}
	
	//		decode_from															
	/// Decodes a value from a byte buffer, consuming exactly
	/// [`byte_len()`](IntCodec::byte_len()) bytes.
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
	pub fn decode_from<B: Buf>(&self, src: &mut B) -> Result<Integer, CodecError> {
		let expected = self.byte_len();
		let actual   = src.remaining();
		if actual < expected {
			debug!(codec = %self, expected, actual, "Short read from buffer");
			return Err(CodecError::ShortRead { expected, actual });
		}
		self.decode(&src.copy_to_bytes(expected))
	}
	
	//		encode																
	/// Encodes a value, after clamping it into range.
	/// 
	/// The result is always exactly [`byte_len()`](IntCodec::byte_len()) bytes
	/// long.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to encode.
	/// 
	#[must_use]
	pub fn encode(&self, value: &Integer) -> Bytes {
		let mut buf = BytesMut::zeroed(self.byte_len());
		self.encode_exact(value, &mut buf);
		buf.freeze()
	}
	
	//		encode_into															
	/// Encodes a value into a caller-supplied slice, after clamping it into
	/// range.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to encode.
	/// * `out`   - The slice to write to. Must be exactly
	///             [`byte_len()`](IntCodec::byte_len()) bytes long.
	/// 
	/// # Errors
	/// 
	/// Returns [`CodecError::LengthMismatch`] if the slice is the wrong length,
	/// in which case it is left untouched.
	/// 
	pub fn encode_into(&self, value: &Integer, out: &mut [u8]) -> Result<(), CodecError> {
		let expected = self.byte_len();
		if out.len() != expected {
			return Err(CodecError::LengthMismatch { expected, actual: out.len() });
		}
		self.encode_exact(value, out);
		Ok(())
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
	pub fn encode_to<B: BufMut>(&self, value: &Integer, dst: &mut B) -> Result<(), CodecError> {
		let expected = self.byte_len();
		let actual   = dst.remaining_mut();
		if actual < expected {
			return Err(CodecError::ShortWrite { expected, actual });
		}
		dst.put_slice(&self.encode(value));
		Ok(())
	}
	
	//		endian																
	/// The byte order of the encoded form.
	#[must_use]
	pub const fn endian(&self) -> Endianness {
		self.endian
	}
	
	//		is_signed															
	/// Determines if values are signed.
	#[must_use]
	pub const fn is_signed(&self) -> bool {
		self.signedness.is_signed()
	}
	
	//		max_value															
	/// The largest value this codec can represent.
	#[must_use]
	pub fn max_value(&self) -> Integer {
		range::max_value(self.width, self.signedness)
	}
	
	//		min_value															
	/// The smallest value this codec can represent.
	#[must_use]
	pub fn min_value(&self) -> Integer {
		range::min_value(self.width, self.signedness)
	}
	
	//		range																
	/// The inclusive range of values this codec can represent.
	/// 
	/// This is computed on each call.
	/// 
	#[must_use]
	pub fn range(&self) -> RangeInclusive<Integer> {
		self.min_value()..=self.max_value()
	}
	
	//		read_from															
	/// Reads and decodes a value from a reader, consuming exactly
	/// [`byte_len()`](IntCodec::byte_len()) bytes when successful.
	/// 
	/// # Parameters
	/// 
	/// * `reader` - The reader to read from.
	/// 
	/// # Errors
	/// 
	/// Returns [`CodecError::ShortRead`] if the reader reaches the end of its
	/// input before a full value has been read, and [`CodecError::Io`] if it
	/// fails for any other reason.
	/// 
	pub fn read_from<R: Read>(&self, reader: &mut R) -> Result<Integer, CodecError> {
		let expected = self.byte_len();
		let mut buf  = Vec::with_capacity(expected);
		reader.by_ref().take(expected as u64).read_to_end(&mut buf).map_err(|err| CodecError::Io(err.kind()))?;
		if buf.len() < expected {
			debug!(codec = %self, expected, actual = buf.len(), "Short read from reader");
			return Err(CodecError::ShortRead { expected, actual: buf.len() });
		}
		self.decode(&buf)
	}
	
	//		signedness															
	/// Whether values are signed.
	#[must_use]
	pub const fn signedness(&self) -> Signedness {
		self.signedness
	}
	
	//		to_json																
	/// Writes this codec as a JSON descriptor.
	/// 
	/// # Errors
	/// 
	/// This will return an error if serialisation fails, which is not expected
	/// for this type.
	/// 
	pub fn to_json(&self) -> Result<String, CodecError> {
		Ok(serde_json::to_string(self)?)
	}
	
	//		width																
	/// The encoded width.
	#[must_use]
	pub const fn width(&self) -> BitWidth {
		self.width
	}
	
	//		write_to															
	/// Encodes a value and writes it to a writer, after clamping it into range.
	/// 
	/// # Parameters
	/// 
	/// * `value`  - The value to encode.
	/// * `writer` - The writer to write to.
	/// 
	/// # Errors
	/// 
	/// Returns [`CodecError::Io`] if the writer fails.
	/// 
	pub fn write_to<W: Write>(&self, value: &Integer, writer: &mut W) -> Result<(), CodecError> {
		writer.write_all(&self.encode(value)).map_err(|err| CodecError::Io(err.kind()))
	}
	
	//		Crate methods														
	
	//		decode_exact														
	/// Decodes a value from a slice already known to be the right length.
	pub(crate) fn decode_exact(&self, bytes: &[u8]) -> Integer {
		self.interpret(words::assemble(bytes, self.width, self.endian))
	}
	
	//		encode_exact														
	/// Encodes a value into a slice already known to be the right length.
	pub(crate) fn encode_exact(&self, value: &Integer, out: &mut [u8]) {
		words::split(&self.bit_pattern(value), self.width, self.endian, out);
	}
	
	//		Private methods														
	
	//		bit_pattern															
	/// Clamps a value and converts it to an unsigned bit pattern.
	/// 
	/// Negative values wrap into the top half of the unsigned range.
	/// 
	fn bit_pattern(&self, value: &Integer) -> Integer {
		let clamped = self.clamp(value);
		if self.is_signed() {
			clamped & (range::modulus(self.width) - Integer::from(1_u32))
		} else {
			clamped
		}
	}
	
	//		interpret															
	/// Reinterprets an unsigned bit pattern as a value.
	/// 
	/// For signed codecs, patterns with the top bit set are negative, and are
	/// recovered as `-((!pattern & (2^(bits-1) - 1)) + 1)`.
	/// 
	fn interpret(&self, pattern: Integer) -> Integer {
		if self.is_signed() {
			let half = range::sign_bit(self.width);
			if pattern >= half {
				let mask = half - Integer::from(1_u32);
				return -((!pattern & mask) + Integer::from(1_u32));
			}
		}
		pattern
	}
}

//󰭅		Display																	
impl Display for IntCodec {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}{}", self.signedness.prefix(), self.width, self.endian.suffix())
	}
}



//		Functions

//		decode																	
/// Decodes a value from its encoded bytes.
/// 
/// This is a shorthand for building an [`IntCodec`] and calling
/// [`decode()`](IntCodec::decode()) on it.
/// 
/// # Parameters
/// 
/// * `bytes`      - The encoded bytes. Must be exactly `width.bytes()` long.
/// * `width`      - The encoded width.
/// * `endian`     - The byte order of the encoded form.
/// * `signedness` - Whether values are signed.
/// 
/// # Errors
/// 
/// Returns [`CodecError::LengthMismatch`] if the slice is the wrong length.
/// 
pub fn decode(
	bytes:      &[u8],
	width:      BitWidth,
	endian:     Endianness,
	signedness: Signedness,
) -> Result<Integer, CodecError> {
	IntCodec::with_width(width, endian, signedness).decode(bytes)
}

//		encode																	
/// Encodes a value, after clamping it into range.
/// 
/// This is a shorthand for building an [`IntCodec`] and calling
/// [`encode()`](IntCodec::encode()) on it.
/// 
/// # Parameters
/// 
/// * `value`      - The value to encode.
/// * `width`      - The encoded width.
/// * `endian`     - The byte order of the encoded form.
/// * `signedness` - Whether values are signed.
/// 
#[must_use]
pub fn encode(
	value:      &Integer,
	width:      BitWidth,
	endian:     Endianness,
	signedness: Signedness,
) -> Bytes {
	IntCodec::with_width(width, endian, signedness).encode(value)
}
