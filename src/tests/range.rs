//		Packages

use super::*;



//		Functions

//		int																		
/// Shorthand for building an [`Integer`].
fn int(value: i128) -> Integer {
	Integer::from(value)
}

//		width																	
/// Shorthand for building a [`BitWidth`].
fn width(bits: u32) -> BitWidth {
	BitWidth::new(bits).unwrap()
}



//		Tests

mod functions {
	use super::*;
	
	//		clamp																
	#[test]
	fn clamp__unsigned_8_below_min() {
		assert_eq!(clamp(&int(-5), BitWidth::W8, Signedness::Unsigned), int(0));
	}
	#[test]
	fn clamp__unsigned_8_above_max() {
		assert_eq!(clamp(&int(300), BitWidth::W8, Signedness::Unsigned), int(255));
	}
	#[test]
	fn clamp__unsigned_8_in_range() {
		assert_eq!(clamp(&int(42),  BitWidth::W8, Signedness::Unsigned), int(42));
		assert_eq!(clamp(&int(0),   BitWidth::W8, Signedness::Unsigned), int(0));
		assert_eq!(clamp(&int(255), BitWidth::W8, Signedness::Unsigned), int(255));
	}
	#[test]
	fn clamp__signed_8() {
		assert_eq!(clamp(&int(-129), BitWidth::W8, Signedness::Signed), int(-128));
		assert_eq!(clamp(&int(-128), BitWidth::W8, Signedness::Signed), int(-128));
		assert_eq!(clamp(&int(-1),   BitWidth::W8, Signedness::Signed), int(-1));
		assert_eq!(clamp(&int(127),  BitWidth::W8, Signedness::Signed), int(127));
		assert_eq!(clamp(&int(128),  BitWidth::W8, Signedness::Signed), int(127));
	}
	#[test]
	fn clamp__signed_64() {
		assert_eq!(clamp(&int(i128::from(i64::MAX) + 1), BitWidth::W64, Signedness::Signed), int(i128::from(i64::MAX)));
		assert_eq!(clamp(&int(i128::from(i64::MIN) - 1), BitWidth::W64, Signedness::Signed), int(i128::from(i64::MIN)));
	}
	#[test]
	fn clamp__beyond_native_widths() {
		let huge = Integer::from(1_u32) << 300_u64;
		assert_eq!(clamp(&huge,  width(256), Signedness::Unsigned), (Integer::from(1_u32) << 256_u64) - Integer::from(1_u32));
		assert_eq!(clamp(&-huge, width(256), Signedness::Signed),   -(Integer::from(1_u32) << 255_u64));
	}
	#[test]
	fn clamp__idempotent() {
		for bits in [8, 16, 24, 64, 128] {
			for signedness in [Signedness::Signed, Signedness::Unsigned] {
				for value in [i128::MIN, -70_000, -129, -1, 0, 1, 200, 70_000, i128::MAX] {
					let once = clamp(&int(value), width(bits), signedness);
					assert_eq!(clamp(&once, width(bits), signedness), once);
				}
			}
		}
	}
	
	//		max_value															
	#[test]
	fn max_value__normal() {
		assert_eq!(max_value(BitWidth::W8,  Signedness::Unsigned), int(255));
		assert_eq!(max_value(BitWidth::W8,  Signedness::Signed),   int(127));
		assert_eq!(max_value(BitWidth::W24, Signedness::Unsigned), int(0xFF_FFFF));
		assert_eq!(max_value(BitWidth::W64, Signedness::Unsigned), int(i128::from(u64::MAX)));
		assert_eq!(max_value(BitWidth::W64, Signedness::Signed),   int(i128::from(i64::MAX)));
		assert_eq!(max_value(width(128),    Signedness::Signed),   int(i128::MAX));
	}
	
	//		min_value															
	#[test]
	fn min_value__normal() {
		assert_eq!(min_value(BitWidth::W8,  Signedness::Unsigned), int(0));
		assert_eq!(min_value(BitWidth::W8,  Signedness::Signed),   int(-128));
		assert_eq!(min_value(BitWidth::W24, Signedness::Signed),   int(-0x80_0000));
		assert_eq!(min_value(BitWidth::W64, Signedness::Signed),   int(i128::from(i64::MIN)));
		assert_eq!(min_value(width(128),    Signedness::Signed),   int(i128::MIN));
	}
}
