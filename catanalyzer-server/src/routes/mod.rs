//! API route handlers

pub mod analysis;
pub mod board;
pub mod status;
