//! UI components.

pub mod portal;
