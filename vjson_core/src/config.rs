//! Options controlling how the object scanner treats questionable input.

/// Scanner configuration.
///
/// The lenient flavour is what [`JsonContainer::parse`](crate::JsonContainer::parse) uses: bare
/// values are accepted verbatim and commas are free-form separators. The strict flavour backs
/// [`JsonContainer::try_parse`](crate::JsonContainer::try_parse).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
	/// Append a snapshot of the most recently read bytes to error messages.
	pub debug: bool,
	/// Reject input the lenient scanner would silently accept: bare values that are not literals,
	/// missing or repeated commas and unterminated strings.
	pub strict: bool,
}

impl ScanOptions {
	#[must_use]
	pub fn lenient() -> Self {
		Self {
			debug: false,
			strict: false,
		}
	}

	#[must_use]
	pub fn strict() -> Self {
		Self {
			debug: true,
			strict: true,
		}
	}
}
