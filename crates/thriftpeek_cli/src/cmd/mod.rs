/// JSON decode command.
pub mod decode;
/// Framing and envelope summary command.
pub mod info;
/// Shared input loading and output helpers.
pub mod util;
