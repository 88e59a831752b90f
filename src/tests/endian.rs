//		Packages

use super::*;
use claims::{assert_err, assert_ok_eq};
use rubedo::sugar::s;



//		Tests

mod public_methods {
	use super::*;
	
	//		suffix																
	#[test]
	fn suffix__normal() {
		assert_eq!(Endianness::Big.suffix(),    "be");
		assert_eq!(Endianness::Little.suffix(), "le");
	}
}

mod traits {
	use super::*;
	
	//		ByteOrder															
	#[test]
	fn byte_order__markers() {
		assert_eq!(BigEndian::ENDIANNESS,    Endianness::Big);
		assert_eq!(LittleEndian::ENDIANNESS, Endianness::Little);
	}
	
	//		Deserialize															
	#[test]
	fn deserialize__valid() {
		assert_ok_eq!(serde_json::from_str::<Endianness>(r#""big""#),    Endianness::Big);
		assert_ok_eq!(serde_json::from_str::<Endianness>(r#""little""#), Endianness::Little);
	}
	#[test]
	fn deserialize__invalid() {
		assert_err!(serde_json::from_str::<Endianness>(r#""middle""#));
	}
	
	//		Display																
	#[test]
	fn display__normal() {
		assert_eq!(Endianness::Big.to_string(),    s!("big"));
		assert_eq!(Endianness::Little.to_string(), s!("little"));
	}
	
	//		Serialize															
	#[test]
	fn serialize__normal() {
		assert_ok_eq!(serde_json::to_string(&Endianness::Little), s!(r#""little""#));
	}
}
