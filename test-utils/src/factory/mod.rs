//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Record kinds have no relationships between them, so every
//! factory only needs its own table.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let news = factory::news::create_news(&db).await?;
//!     let club = factory::club::create_club(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let character = factory::character::CharacterFactory::new(&db)
//!     .name("Athena")
//!     .tags(["support", "healer"])
//!     .stars(5)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `news` - Create news posts
//! - `spell` - Create spells
//! - `club` - Create clubs
//! - `character` - Create characters
//! - `event` - Create events
//! - `helpers` - Shared counter for unique default values

pub mod character;
pub mod club;
pub mod event;
pub mod helpers;
pub mod news;
pub mod spell;

// Re-export commonly used factory functions for concise usage
pub use character::create_character;
pub use club::create_club;
pub use event::create_event;
pub use news::create_news;
pub use spell::create_spell;
