pub use super::character::Entity as Character;
pub use super::club::Entity as Club;
pub use super::event::Entity as Event;
pub use super::news::Entity as News;
pub use super::spell::Entity as Spell;
