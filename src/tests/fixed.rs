//		Packages

use super::*;
use bytes::BytesMut;
use claims::{assert_err_eq, assert_ok, assert_ok_eq};
use crate::endian::Endianness;
use typenum::{Prod, U40};



//		Type aliases

type UInt40Le  = FixedCodec<U40, false, LittleEndian>;
type Int256Be  = FixedCodec<Prod<U16, U16>, true, BigEndian>;



//		Tests

mod public_constants {
	use super::*;
	
	//		BITS / BYTES														
	#[test]
	fn bits_and_bytes() {
		assert_eq!(Int8::BITS,     8);
		assert_eq!(Int8::BYTES,    1);
		assert_eq!(UInt24Le::BITS, 24);
		assert_eq!(UInt24Le::BYTES, 3);
		assert_eq!(Int64Be::BYTES, 8);
		assert_eq!(Int256Be::BYTES, 32);
	}
	
	//		CODEC																
	#[test]
	fn codec__matches_runtime() {
		assert_eq!(Int8::codec(),     IntCodec::INT8);
		assert_eq!(UInt8::codec(),    IntCodec::UINT8);
		assert_eq!(UInt24Le::codec(), IntCodec::new(24, Endianness::Little, Signedness::Unsigned).unwrap());
		assert_eq!(Int32Be::codec(),  IntCodec::new(32, Endianness::Big,    Signedness::Signed).unwrap());
		assert_eq!(UInt40Le::codec(), IntCodec::new(40, Endianness::Little, Signedness::Unsigned).unwrap());
	}
}

mod public_methods {
	use super::*;
	
	//		encode																
	#[test]
	fn encode__signed_8() {
		assert_eq!(Int8::encode(&Integer::from(-1)).as_slice(),   &[0xFF]);
		assert_eq!(Int8::encode(&Integer::from(127)).as_slice(),  &[0x7F]);
		assert_eq!(Int8::encode(&Integer::from(-128)).as_slice(), &[0x80]);
	}
	#[test]
	fn encode__unsigned_16() {
		assert_eq!(UInt16Be::encode(&Integer::from(0x1234)).as_slice(), &[0x12, 0x34]);
		assert_eq!(UInt16Le::encode(&Integer::from(0x1234)).as_slice(), &[0x34, 0x12]);
	}
	#[test]
	fn encode__saturates() {
		assert_eq!(UInt8::encode(&Integer::from(300)).as_slice(), &[0xFF]);
		assert_eq!(UInt8::encode(&Integer::from(-5)).as_slice(),  &[0x00]);
	}
	#[test]
	fn encode__256_bit() {
		let encoded = Int256Be::encode(&Integer::from(-2));
		assert_eq!(encoded.len(), 32);
		assert!(encoded[..31].iter().all(|&b| b == 0xFF));
		assert_eq!(encoded[31], 0xFE);
	}
	
	//		decode																
	#[test]
	fn decode__round_trip() {
		let value = Integer::from(-0x12_3456_i32);
		assert_eq!(Int24Be::decode(&Int24Be::encode(&value)), value);
		assert_eq!(Int24Le::decode(&Int24Le::encode(&value)), value);
		let value = Integer::from(0xAB_CDEF_u32);
		assert_eq!(UInt24Be::decode(&UInt24Be::encode(&value)), value);
		assert_eq!(UInt24Le::decode(&UInt24Le::encode(&value)), value);
		let value = Integer::from(i64::MIN);
		assert_eq!(Int64Le::decode(&Int64Le::encode(&value)), value);
		let value = Integer::from(u64::MAX);
		assert_eq!(UInt64Be::decode(&UInt64Be::encode(&value)), value);
	}
	#[test]
	fn decode__matches_runtime() {
		let bytes = UInt32Le::encode(&Integer::from(0xDEAD_BEEF_u32));
		assert_ok_eq!(UInt32Le::codec().decode(&bytes), UInt32Le::decode(&bytes));
		assert_ok_eq!(Int32Le::codec().decode(&bytes),  Integer::from(-0x2152_4111_i32));
	}
	
	//		decode_from / encode_to												
	#[test]
	fn streams__round_trip() {
		let mut buf = BytesMut::new();
		assert_ok!(Int16Be::encode_to(&Integer::from(-300), &mut buf));
		assert_ok!(UInt32Be::encode_to(&Integer::from(70_000), &mut buf));
		let mut src = buf.freeze();
		assert_ok_eq!(Int16Be::decode_from(&mut src),  Integer::from(-300));
		assert_ok_eq!(UInt32Be::decode_from(&mut src), Integer::from(70_000));
		assert_err_eq!(Int8::decode_from(&mut src), CodecError::ShortRead { expected: 1, actual: 0 });
	}
	
	//		min_value / max_value / clamp										
	#[test]
	fn range__normal() {
		assert_eq!(Int16Le::min_value(),  Integer::from(i16::MIN));
		assert_eq!(Int16Le::max_value(),  Integer::from(i16::MAX));
		assert_eq!(UInt16Le::max_value(), Integer::from(u16::MAX));
		assert_eq!(UInt16Le::clamp(&Integer::from(-1)), Integer::from(0));
		assert_eq!(Int8::clamp(&Integer::from(200)),    Integer::from(127));
		assert_eq!(Int8::codec().clamp(&Integer::from(-200)), Integer::from(-128));
	}
}
