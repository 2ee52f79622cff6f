// Resume skill extraction stand-in. No document parsing happens here: known
// formats are signature-checked and mapped to sample text, then scanned
// against a fixed vocabulary.

pub mod extractor;
pub mod handlers;
