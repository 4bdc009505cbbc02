pub mod db;
pub mod security;
pub mod sqlx_utils;
pub mod test_utils;
pub mod utils;
