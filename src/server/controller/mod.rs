//! HTTP request handlers.
//!
//! One module per record kind, each exposing list/get/create/update/delete handlers
//! that delegate to the generic `ResourceService` and convert results into DTOs.

pub mod character;
pub mod club;
pub mod event;
pub mod index;
pub mod news;
pub mod spell;

#[cfg(test)]
mod test;

use crate::server::{error::AppError, model::resource::Resource};

/// Builds the 404 error returned when no record of kind `R` has the given ID.
pub(crate) fn not_found<R: Resource>(id: i32) -> AppError {
    AppError::NotFound(format!("{} {} not found", R::LABEL, id))
}
