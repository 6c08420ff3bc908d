pub mod alphabet;

pub use alphabet::Alphabet;

/// Padding character shared by the padded codecs.
pub const PADDING: u8 = b'=';
