pub mod calculators;
pub mod infographic;
pub mod quiz;
pub mod video;
