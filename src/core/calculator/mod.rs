pub mod derive;
pub mod normalize;
