pub mod entity;
pub mod jsonapi;
pub mod standardized;

pub use entity::*;
