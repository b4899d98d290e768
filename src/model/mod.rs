//! Wire-level DTOs exchanged with API clients.

pub mod api;
pub mod character;
pub mod club;
pub mod event;
pub mod news;
pub mod spell;
