pub mod routes;
pub mod startup;
pub mod errors;
pub mod openapi;

pub use routes::ServerState;
pub use startup::{build_app, build_cors, run, run_until};
