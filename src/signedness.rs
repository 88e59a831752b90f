//! Integer signedness.



//		Modules

#[cfg(test)]
#[path = "tests/signedness.rs"]
mod tests;



//		Packages

use core::fmt::{Display, Formatter, self};
use serde::{Deserialize, Serialize};



//		Enums

//		Signedness																
/// Whether an encoded integer carries a sign.
/// 
/// Signed integers use two's-complement representation.
/// 
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Signedness {
	/// The integer is signed, in two's complement.
	Signed,
	
	/// The integer is unsigned.
	Unsigned,
}

//󰭅		Signedness																
impl Signedness {
	//		is_signed															
	/// Determines if this is [`Signedness::Signed`].
	#[must_use]
	pub const fn is_signed(self) -> bool {
		matches!(self, Self::Signed)
	}
	
	//		prefix																
	/// The short prefix used when naming codecs, i.e. `i` or `u`.
	#[must_use]
	pub const fn prefix(self) -> &'static str {
		match self {
			Self::Signed   => "i",
			Self::Unsigned => "u",
		}
	}
}

//󰭅		Display																	
impl Display for Signedness {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Signed   => "signed",
			Self::Unsigned => "unsigned",
		})
	}
}

//󰭅		From: bool -> Signedness												
impl From<bool> for Signedness {
	//		from																
	fn from(signed: bool) -> Self {
		if signed { Self::Signed } else { Self::Unsigned }
	}
}
