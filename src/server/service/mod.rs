//! Service layer orchestrating repository calls and domain conversion.

pub mod resource;
