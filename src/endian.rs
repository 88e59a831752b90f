//! Byte ordering.



//		Modules

#[cfg(test)]
#[path = "tests/endian.rs"]
mod tests;

mod sealed {
	pub trait Sealed {}
	
	impl Sealed for super::BigEndian {}
	impl Sealed for super::LittleEndian {}
}



//		Packages

use core::fmt::{Display, Formatter, self};
use serde::{Deserialize, Serialize};



//		Enums

//		Endianness																
/// The order in which the bytes of an encoded integer are laid out.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
	/// Most-significant byte first.
	Big,
	
	/// Least-significant byte first.
	Little,
}

//󰭅		Endianness																
impl Endianness {
	//		suffix																
	/// The short suffix used when naming codecs, i.e. `be` or `le`.
	#[must_use]
	pub const fn suffix(self) -> &'static str {
		match self {
			Self::Big    => "be",
			Self::Little => "le",
		}
	}
}

//󰭅		Display																	
impl Display for Endianness {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Big    => "big",
			Self::Little => "little",
		})
	}
}



//		Traits

//		ByteOrder																
/// A type-level byte order, for use with compile-time codecs.
/// 
/// This trait is sealed, and is implemented only by [`BigEndian`] and
/// [`LittleEndian`].
/// 
pub trait ByteOrder: sealed::Sealed {
	/// The byte order this type represents.
	const ENDIANNESS: Endianness;
}



//		Structs

//		BigEndian																
/// Type-level marker for [`Endianness::Big`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BigEndian;

//󰭅		ByteOrder																
impl ByteOrder for BigEndian {
	const ENDIANNESS: Endianness = Endianness::Big;
}

//		LittleEndian															
/// Type-level marker for [`Endianness::Little`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LittleEndian;

//󰭅		ByteOrder																
impl ByteOrder for LittleEndian {
	const ENDIANNESS: Endianness = Endianness::Little;
}

