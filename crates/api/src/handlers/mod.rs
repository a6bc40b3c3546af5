pub mod mission;
pub mod planet;
pub mod scientist;
