//! Image store implementations.

pub mod memory_image_store;
