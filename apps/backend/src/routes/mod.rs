pub mod races;
pub mod typing;
