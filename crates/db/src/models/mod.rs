//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO and, where a record accepts input, the
//!   validated value it converts into
//! - The nested response shapes for that entity
//!
//! Relationships between the three entities form a cycle
//! (scientist -> missions -> scientist). Response shapes break it with a
//! fixed set of structs rather than runtime cycle detection: an entity row
//! never carries its mission list, and a mission nested under its scientist
//! embeds only the planet.

pub mod mission;
pub mod planet;
pub mod scientist;
