pub mod races;
