// Resume field extraction.
// Text comes out of the PDF once; every extractor below is a pure function over it.

pub mod fields;
pub mod name;
pub mod pdf;
pub mod skills;
