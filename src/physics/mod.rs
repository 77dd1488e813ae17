pub mod elements;
pub mod nucleus;
pub mod orbit;
pub mod shells;
pub mod sphere;
