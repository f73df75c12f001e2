//! Rust source emission for resolved types.
//!
//! Renders every declaration a [`TypeGenerator`](crate::TypeGenerator)
//! collected, together with the `rt::Blank`, `rt::Encode` and `rt::Decode`
//! implementations generated code needs.

mod config;
mod emitter;
mod render;


pub use config::Config;
pub use emitter::Emitter;

pub(crate) use emitter::module_header;
pub(crate) use render::push_docs;
