// src/core/mod.rs
pub mod artifact;
pub mod kdf;
pub mod key;
pub mod padding;
pub mod pipeline;
pub mod util;
pub mod value;

pub use artifact::*;
pub use kdf::*;
pub use key::*;
pub use padding::*;
pub use pipeline::*;
pub use value::*;

// Same alias as crate::error::Result, for callers importing from core
pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
