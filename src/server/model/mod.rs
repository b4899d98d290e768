//! Domain models and operation-specific parameter types.
//!
//! Every record kind has a domain struct implementing [`resource::Resource`], plus a
//! `*Fields` parameter struct holding the validated, partial field set supplied by a
//! client. Conversions to and from entity models happen at the repository boundary;
//! conversions to DTOs happen in the controllers.

pub mod character;
pub mod club;
pub mod event;
pub mod news;
pub mod resource;
pub mod spell;
