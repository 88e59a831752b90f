//! Validated bit widths.



//		Modules

#[cfg(test)]
#[path = "tests/width.rs"]
mod tests;



//		Packages

use crate::errors::CodecError;
use core::fmt::{Display, Formatter, self};
use serde::{Deserialize, Serialize};



//		Structs

//		BitWidth																
/// The encoded size of an integer, in bits.
/// 
/// A [`BitWidth`] is always a positive multiple of 8, so every value encodes
/// to a whole number of bytes. The check happens once, at construction, so
/// encoding and decoding never have to revisit it.
/// 
/// There is no upper limit beyond what fits in a [`u32`]. Widths far beyond
/// the standard integer sizes (e.g. 256 or 4,096 bits) are perfectly valid.
/// 
/// When deserialised, the width is validated in the same way as with
/// [`new()`](BitWidth::new()), so a descriptor naming e.g. a 12-bit field is
/// rejected.
/// 
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct BitWidth(u32);

//󰭅		BitWidth																
impl BitWidth {
	//		Public constants													
	/// An 8-bit width.
	pub const W8:  Self = Self(8);
	
	/// A 16-bit width.
	pub const W16: Self = Self(16);
	
	/// A 24-bit width.
	pub const W24: Self = Self(24);
	
	/// A 32-bit width.
	pub const W32: Self = Self(32);
	
	/// A 64-bit width.
	pub const W64: Self = Self(64);
	
	//		Constructors														
	
	//		new																	
	/// Creates a new [`BitWidth`].
	/// 
	/// # Parameters
	/// 
	/// * `bits` - The number of bits. Must be a positive multiple of 8.
	/// 
	/// # Errors
	/// 
	/// Returns [`CodecError::InvalidWidth`] if `bits` is zero or not a multiple
	/// of 8.
	/// 
	pub const fn new(bits: u32) -> Result<Self, CodecError> {
		if bits == 0 || bits % 8 != 0 {
			return Err(CodecError::InvalidWidth(bits));
		}
		Ok(Self(bits))
	}
	
	//		from_validated														
	/// Creates a [`BitWidth`] from a value already known to be valid.
	/// 
	/// Used by the compile-time codecs, which assert validity in a const
	/// context before calling this.
	/// 
	pub(crate) const fn from_validated(bits: u32) -> Self {
		Self(bits)
	}
	
	//		Public methods														
	
	//		bits																
	/// The number of bits.
	#[must_use]
	pub const fn bits(self) -> u32 {
		self.0
	}
	
	//		bytes																
	/// The number of bytes an encoded value occupies.
	#[expect(clippy::integer_division, reason = "Always a multiple of 8")]
	#[must_use]
	pub const fn bytes(self) -> usize {
		(self.0 / 8) as usize
	}
}

//󰭅		Display																	
impl Display for BitWidth {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

//󰭅		From: BitWidth -> u32													
impl From<BitWidth> for u32 {
	//		from																
	fn from(width: BitWidth) -> Self {
		width.0
	}
}

//󰭅		TryFrom: u32 -> BitWidth												
impl TryFrom<u32> for BitWidth {
	type Error = CodecError;
	
	//		try_from															
	fn try_from(bits: u32) -> Result<Self, Self::Error> {
		Self::new(bits)
	}
}
