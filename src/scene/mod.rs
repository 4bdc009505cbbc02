pub mod animation;
pub mod backend;
pub mod camera;
pub mod generator;
pub mod input;
pub mod lifecycle;
pub mod math;
pub mod noise;
pub mod ornament;
pub mod palette;
pub mod surface;
