//! Word-level splitting and assembly of bit patterns.
//! 
//! Values are moved to and from bytes a word at a time, using the widest of
//! 32, 16, or 8 bits that divides the codec width evenly. Only the number of
//! operations depends on the word size; the bytes produced are the same.

//	Chunks are produced by chunks_exact() with the word's own byte length, so
//	the copies into and out of them always match in size.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Chunk sizes always match the word size"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Word counts are bounded by the width")]



//		Modules

#[cfg(test)]
#[path = "tests/words.rs"]
mod tests;



//		Packages

use crate::{
	endian::Endianness,
	width::BitWidth,
};
use malachite::{
	Integer,
	base::num::conversion::traits::WrappingFrom,
};



//		Enums

//		WordSize																
/// The unit in which a bit pattern is moved to and from bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WordSize {
	/// 8-bit words.
	W8,
	
	/// 16-bit words.
	W16,
	
	/// 32-bit words.
	W32,
}

//󰭅		WordSize																
impl WordSize {
	//		for_width															
	/// Picks the widest word that divides the width evenly.
	pub(crate) const fn for_width(width: BitWidth) -> Self {
		let bits = width.bits();
		if bits % 32 == 0 {
			Self::W32
		} else if bits % 16 == 0 {
			Self::W16
		} else {
			Self::W8
		}
	}
	
	//		bits																
	/// The number of bits in a word.
	pub(crate) const fn bits(self) -> u32 {
		match self {
			Self::W8  => 8,
			Self::W16 => 16,
			Self::W32 => 32,
		}
	}
	
	//		bytes																
	/// The number of bytes in a word.
	pub(crate) const fn bytes(self) -> usize {
		match self {
			Self::W8  => 1,
			Self::W16 => 2,
			Self::W32 => 4,
		}
	}
	
	//		read																
	/// Reads one word from a chunk of exactly [`bytes()`](WordSize::bytes())
	/// bytes.
	fn read(self, chunk: &[u8], endian: Endianness) -> Integer {
		match self {
			Self::W8  => Integer::from(chunk[0]),
			Self::W16 => {
				let mut buf = [0_u8; 2];
				buf.copy_from_slice(chunk);
				Integer::from(match endian {
					Endianness::Big    => u16::from_be_bytes(buf),
					Endianness::Little => u16::from_le_bytes(buf),
				})
			},
			Self::W32 => {
				let mut buf = [0_u8; 4];
				buf.copy_from_slice(chunk);
				Integer::from(match endian {
					Endianness::Big    => u32::from_be_bytes(buf),
					Endianness::Little => u32::from_le_bytes(buf),
				})
			},
		}
	}
	
	//		write																
	/// Writes the lowest word of a value into a chunk of exactly
	/// [`bytes()`](WordSize::bytes()) bytes.
	fn write(self, value: &Integer, endian: Endianness, chunk: &mut [u8]) {
		match self {
			Self::W8  => chunk[0] = u8::wrapping_from(value),
			Self::W16 => {
				let word = u16::wrapping_from(value);
				chunk.copy_from_slice(&match endian {
					Endianness::Big    => word.to_be_bytes(),
					Endianness::Little => word.to_le_bytes(),
				});
			},
			Self::W32 => {
				let word = u32::wrapping_from(value);
				chunk.copy_from_slice(&match endian {
					Endianness::Big    => word.to_be_bytes(),
					Endianness::Little => word.to_le_bytes(),
				});
			},
		}
	}
}



//		Functions

//		assemble																
/// Rebuilds an unsigned bit pattern from its encoded bytes.
/// 
/// Each word is shifted into place according to its significance, which for
/// big-endian data runs from the last chunk backwards and for little-endian
/// data from the first chunk forwards. This is the inverse of [`split()`].
/// 
/// The caller must supply exactly `width.bytes()` bytes.
/// 
pub(crate) fn assemble(bytes: &[u8], width: BitWidth, endian: Endianness) -> Integer {
	if width == BitWidth::W8 {
		return Integer::from(bytes[0]);
	}
	let word    = WordSize::for_width(width);
	#[expect(clippy::integer_division, reason = "Width is a multiple of the word size")]
	let count   = bytes.len() / word.bytes();
	let mut acc = Integer::from(0_u32);
	for (slot, chunk) in bytes.chunks_exact(word.bytes()).enumerate() {
		acc += word.read(chunk, endian) << significance(slot, count, endian, word);
	}
	acc
}

//		split																	
/// Lays out an unsigned bit pattern as encoded bytes.
/// 
/// The pattern must already be non-negative and below `2^bits`, and `out`
/// must be exactly `width.bytes()` bytes long.
/// 
pub(crate) fn split(pattern: &Integer, width: BitWidth, endian: Endianness, out: &mut [u8]) {
	if width == BitWidth::W8 {
		out[0] = u8::wrapping_from(pattern);
		return;
	}
	let word  = WordSize::for_width(width);
	#[expect(clippy::integer_division, reason = "Width is a multiple of the word size")]
	let count = out.len() / word.bytes();
	for (slot, chunk) in out.chunks_exact_mut(word.bytes()).enumerate() {
		word.write(&(pattern >> significance(slot, count, endian, word)), endian, chunk);
	}
}

//		significance															
/// The bit offset of the word stored at a given chunk position.
fn significance(slot: usize, count: usize, endian: Endianness, word: WordSize) -> u64 {
	let index = match endian {
		Endianness::Big    => count - 1 - slot,
		Endianness::Little => slot,
	};
	index as u64 * u64::from(word.bits())
}
