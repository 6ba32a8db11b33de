//! Identificadores derivados de contenido.

pub mod hash;

pub use hash::{hash_str, input_id};
