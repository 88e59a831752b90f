//		Packages

use super::*;



//		Tests

mod word_size {
	use super::*;
	
	//		for_width															
	#[test]
	fn for_width__prefers_widest_divisor() {
		assert_eq!(WordSize::for_width(BitWidth::W8),  WordSize::W8);
		assert_eq!(WordSize::for_width(BitWidth::W16), WordSize::W16);
		assert_eq!(WordSize::for_width(BitWidth::W24), WordSize::W8);
		assert_eq!(WordSize::for_width(BitWidth::W32), WordSize::W32);
		assert_eq!(WordSize::for_width(BitWidth::new(48).unwrap()), WordSize::W16);
		assert_eq!(WordSize::for_width(BitWidth::W64), WordSize::W32);
	}
	
	//		bits / bytes														
	#[test]
	fn bits_and_bytes__agree() {
		for word in [WordSize::W8, WordSize::W16, WordSize::W32] {
			assert_eq!(word.bits() as usize, word.bytes() * 8);
		}
	}
}

mod functions {
	use super::*;
	
	//		split																
	#[test]
	fn split__48_bit_big_endian() {
		let width   = BitWidth::new(48).unwrap();
		let mut out = [0_u8; 6];
		split(&Integer::from(0x0102_0304_0506_u64), width, Endianness::Big, &mut out);
		assert_eq!(out, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
	}
	#[test]
	fn split__48_bit_little_endian() {
		let width   = BitWidth::new(48).unwrap();
		let mut out = [0_u8; 6];
		split(&Integer::from(0x0102_0304_0506_u64), width, Endianness::Little, &mut out);
		assert_eq!(out, [0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
	}
	#[test]
	fn split__8_bit() {
		let mut out = [0_u8; 1];
		split(&Integer::from(0xAB_u8), BitWidth::W8, Endianness::Little, &mut out);
		assert_eq!(out, [0xAB]);
	}
	
	//		assemble															
	#[test]
	fn assemble__96_bit() {
		let width = BitWidth::new(96).unwrap();
		let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C];
		let value = Integer::from(0x0102_0304_0506_0708_090A_0B0C_u128);
		assert_eq!(assemble(&bytes, width, Endianness::Big), value);
		let mut reversed = bytes;
		reversed.reverse();
		assert_eq!(assemble(&reversed, width, Endianness::Little), value);
	}
	#[test]
	fn assemble__inverts_split() {
		for bits in [8, 16, 24, 32, 40, 48, 56, 64, 72, 96, 128] {
			let width   = BitWidth::new(bits).unwrap();
			let pattern = (Integer::from(1_u32) << u64::from(bits)) - Integer::from(0x5B_u32);
			for endian in [Endianness::Big, Endianness::Little] {
				let mut out = vec![0_u8; width.bytes()];
				split(&pattern, width, endian, &mut out);
				assert_eq!(assemble(&out, width, endian), pattern);
			}
		}
	}
}
