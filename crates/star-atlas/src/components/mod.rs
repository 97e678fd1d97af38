pub mod planet;
pub mod star_system;
