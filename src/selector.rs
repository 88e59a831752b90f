//! Resolution of codec parameters to codecs.



//		Modules

#[cfg(test)]
#[path = "tests/selector.rs"]
mod tests;



//		Packages

use crate::{
	codec::IntCodec,
	endian::Endianness,
	errors::CodecError,
	signedness::Signedness,
	width::BitWidth,
};
use dashmap::DashMap;
use tracing::{debug, trace, warn};



//		Constants

/// The widths that every [`CodecSelector`] is pre-populated with.
pub const COMMON_WIDTHS: [BitWidth; 4] = [BitWidth::W8, BitWidth::W16, BitWidth::W32, BitWidth::W64];



//		Type aliases

/// The parameters identifying a codec.
type CodecKey = (u32, Endianness, Signedness);



//		Structs

//		CodecSelector															
/// A memoising table of codecs.
/// 
/// The table starts out holding codecs for all of the [`COMMON_WIDTHS`], in
/// both byte orders and both signednesses, and grows as other widths are
/// requested. It can be shared between threads without any external locking.
/// 
/// As codecs are small, immutable values, two codecs with the same parameters
/// always behave identically. If two threads race to add the same entry, the
/// table keeps exactly one, and both callers receive an equal codec.
/// 
/// For one-off lookups that do not need a table, [`resolve()`] does the same
/// validation without any shared state.
/// 
#[derive(Debug)]
pub struct CodecSelector {
	/// The codecs resolved so far.
	codecs: DashMap<CodecKey, IntCodec>,
}

//󰭅		CodecSelector															
impl CodecSelector {
	//		Constructors														
	
	//		new																	
	/// Creates a new [`CodecSelector`], pre-populated with codecs for the
	/// [`COMMON_WIDTHS`].
	#[must_use]
	pub fn new() -> Self {
		let codecs = DashMap::new();
		for width in COMMON_WIDTHS {
			for endian in [Endianness::Big, Endianness::Little] {
				for signedness in [Signedness::Signed, Signedness::Unsigned] {
					codecs.insert(
						(width.bits(), endian, signedness),
						IntCodec::with_width(width, endian, signedness),
					);
				}
			}
		}
		Self { codecs }
	}
	
	//		Public methods														
	
	//		contains															
	/// Determines if a codec with the given parameters is already held.
	/// 
	/// # Parameters
	/// 
	/// * `bits`       - The encoded width in bits.
	/// * `endian`     - The byte order of the encoded form.
	/// * `signedness` - Whether values are signed.
	/// 
	#[must_use]
	pub fn contains(&self, bits: u32, endian: Endianness, signedness: Signedness) -> bool {
		self.codecs.contains_key(&(bits, endian, signedness))
	}
	
	//		is_empty															
	/// Determines if the table holds no codecs. This is never the case for a
	/// table built with [`new()`](CodecSelector::new()).
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.codecs.is_empty()
	}
	
	//		len																	
	/// The number of codecs held.
	#[must_use]
	pub fn len(&self) -> usize {
		self.codecs.len()
	}
	
	//		resolve																
	/// Returns the codec for the given parameters, adding it to the table if
	/// it is not already held.
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
	/// of 8. Invalid widths are never added to the table.
	/// 
	pub fn resolve(&self, bits: u32, endian: Endianness, signedness: Signedness) -> Result<IntCodec, CodecError> {
		let key = (bits, endian, signedness);
		if let Some(codec) = self.codecs.get(&key) {
			trace!(codec = %codec.value(), "Resolved cached codec");
			return Ok(*codec.value());
		}
		let codec = resolve(bits, endian, signedness)?;
		let entry = self.codecs.entry(key).or_insert_with(|| {
			debug!(%codec, "Added codec to selector");
			codec
		});
		Ok(*entry.value())
	}
}

//󰭅		Default																	
impl Default for CodecSelector {
	//		default																
	fn default() -> Self {
		Self::new()
	}
}



//		Functions

//		resolve																	
/// Returns the codec for the given parameters.
/// 
/// This validates the width and builds the codec directly. It holds no state,
/// so every valid combination can be resolved at any time without relying on
/// prior registration.
/// 
/// # Parameters
/// 
/// * `bits`       - The encoded width in bits. Must be a positive multiple of 8.
/// * `endian`     - The byte order of the encoded form.
/// * `signedness` - Whether values are signed.
/// 
/// # Errors
/// 
/// Returns [`CodecError::InvalidWidth`] if `bits` is zero or not a multiple of
/// 8.
/// 
pub fn resolve(bits: u32, endian: Endianness, signedness: Signedness) -> Result<IntCodec, CodecError> {
	IntCodec::new(bits, endian, signedness).inspect_err(|err| {
		warn!(bits, %endian, %signedness, %err, "Rejected integer codec");
	})
}
