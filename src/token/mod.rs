// Internal modules
mod decode;
mod header;
mod sign;
mod verify;

// Public API exports
pub use decode::{decode, decode_header};
pub use header::TokenHeader;
pub use sign::sign;
pub use verify::verify;
