pub mod cache;
pub mod engine;
pub mod slot;
pub mod source;
