//! Serialization codecs for the JSON-RPC protocol binding

pub mod jsonrpc;

pub use jsonrpc::{JsonRpcCodec, JsonRpcError, JsonRpcResponse};
