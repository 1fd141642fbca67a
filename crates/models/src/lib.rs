pub mod errors;
pub mod db;
pub mod technician;
pub mod appliance_type;
pub mod user;
