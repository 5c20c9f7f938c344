pub mod athlete;
pub mod fixture;
pub mod plan;
