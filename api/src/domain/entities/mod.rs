//! Domain entities

mod house;

pub use house::{House, Trait};
