//! Typed records shared by the storage and HTTP layers.

pub mod entry;
pub mod response;
