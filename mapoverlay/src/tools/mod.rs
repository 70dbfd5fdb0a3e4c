pub mod overlay;
pub mod serve;
