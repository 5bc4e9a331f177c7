pub use super::favorite::Entity as Favorite;
pub use super::person::Entity as Person;
pub use super::planet::Entity as Planet;
pub use super::starship::Entity as Starship;
pub use super::user::Entity as User;
