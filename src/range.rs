//! Representable ranges and saturation.
//! 
//! The range of a codec is never stored. It is derived from the width and
//! signedness each time it is needed, so it cannot drift from the parameters
//! it depends on.

//	Shifts and subtractions here operate on widths that are at least 8 bits,
//	so they cannot underflow.
#![allow(clippy::arithmetic_side_effects, reason = "Widths are always at least 8 bits")]



//		Modules

#[cfg(test)]
#[path = "tests/range.rs"]
mod tests;



//		Packages

use crate::{
	signedness::Signedness,
	width::BitWidth,
};
use malachite::Integer;
use tracing::trace;



//		Functions

//		clamp																	
/// Saturates a value into the range of the given width and signedness.
/// 
/// Values at or below the minimum come back as the minimum, values at or
/// above the maximum come back as the maximum, and anything in between is
/// returned unchanged. Out-of-range input is never an error.
/// 
/// # Parameters
/// 
/// * `value`      - The value to clamp.
/// * `width`      - The width of the target integer.
/// * `signedness` - Whether the target integer is signed.
/// 
#[must_use]
pub fn clamp(value: &Integer, width: BitWidth, signedness: Signedness) -> Integer {
	let min = min_value(width, signedness);
	if *value <= min {
		if *value < min {
			trace!(bits = width.bits(), %signedness, %value, "Saturated value to minimum");
		}
		return min;
	}
	let max = max_value(width, signedness);
	if *value >= max {
		if *value > max {
			trace!(bits = width.bits(), %signedness, %value, "Saturated value to maximum");
		}
		return max;
	}
	value.clone()
}

//		max_value																
/// The largest value representable with the given width and signedness.
/// 
/// This is `2^bits - 1` for unsigned integers, and `2^(bits-1) - 1` for
/// signed ones.
/// 
#[must_use]
pub fn max_value(width: BitWidth, signedness: Signedness) -> Integer {
	match signedness {
		Signedness::Signed   => sign_bit(width) - Integer::from(1_u32),
		Signedness::Unsigned => modulus(width)  - Integer::from(1_u32),
	}
}

//		min_value																
/// The smallest value representable with the given width and signedness.
/// 
/// This is `0` for unsigned integers, and `-2^(bits-1)` for signed ones.
/// 
#[must_use]
pub fn min_value(width: BitWidth, signedness: Signedness) -> Integer {
	match signedness {
		Signedness::Signed   => -sign_bit(width),
		Signedness::Unsigned => Integer::from(0_u32),
	}
}

//		modulus																	
/// `2^bits`, one past the largest unsigned bit pattern.
pub(crate) fn modulus(width: BitWidth) -> Integer {
	Integer::from(1_u32) << u64::from(width.bits())
}

//		sign_bit																
/// `2^(bits-1)`, the value of the most-significant bit.
pub(crate) fn sign_bit(width: BitWidth) -> Integer {
	Integer::from(1_u32) << (u64::from(width.bits()) - 1)
}
