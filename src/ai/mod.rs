pub mod cleaner;
pub mod client;
pub mod credentials;
pub mod json_parser;
pub mod prompts;
pub mod stream;

pub use cleaner::clean_response;
pub use client::*;
pub use credentials::*;
pub use stream::{decode_event_stream, StreamDecoder};
