//! Schema-less decoding of Thrift binary-protocol messages into generic, JSON-renderable trees.

/// Frame detection, binary-protocol decoding, key formatting, and JSON rendering.
pub mod thrift;
