pub mod alias;
pub mod face;
pub mod fundamental_constants;
pub mod triangle;
pub mod triangulation;
pub mod vertex;
