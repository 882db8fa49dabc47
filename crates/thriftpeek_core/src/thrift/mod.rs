mod bytes;
mod decode;
mod error;
mod frame;
mod key;
mod message;
mod render;
mod ttype;
mod value;

/// Bounded big-endian primitive reader.
pub use bytes::Cursor;
/// Recursive value decoding entry points and limits.
pub use decode::{DecodeOptions, decode_struct, decode_value};
/// Error and result aliases.
pub use error::{Result, ThriftError};
/// Transport frame detection.
pub use frame::{FRAME_PREFIX_LEN, Framing, VERSION_1, VERSION_MASK, detect_frame};
/// Output key formatting and ordering.
pub use key::{compare_keys, format_key, scalar_key_text};
/// Message envelope decoding.
pub use message::{Decoded, Message, MessageKind, decode_message, decode_stream};
/// JSON rendering of decoded trees.
pub use render::{CollectionStyle, RenderOptions, map_key_text, render_message, render_value};
/// Wire type tags.
pub use ttype::TType;
/// Decoded runtime value types.
pub use value::{FieldValue, ListValue, MapEntry, MapValue, StructValue, Value};
