// Continuous
pub mod F;
pub mod Normal;
pub mod StudentT;
pub mod Uniform;
