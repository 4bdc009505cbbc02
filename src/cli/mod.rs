pub mod db;
pub mod scene;
pub mod seed;
