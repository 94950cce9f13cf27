//! Terminal and JSON rendering for the binary

pub mod blocks;
pub mod ci;
pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
