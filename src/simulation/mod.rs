pub mod atom;
