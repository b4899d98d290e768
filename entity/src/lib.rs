//! SeaORM entity models for every record kind stored by the companion backend.

pub mod prelude;

pub mod character;
pub mod club;
pub mod event;
pub mod news;
pub mod spell;
