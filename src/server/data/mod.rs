//! Database repository layer.
//!
//! Every record kind shares the generic [`resource::ResourceRepository`], which uses the
//! kind's SeaORM entity internally and returns entity models. Conversion into domain
//! models happens in the service layer through the `Resource` trait. All database
//! queries, inserts, updates, and deletes are performed through this repository.

pub mod resource;

#[cfg(test)]
mod test;
