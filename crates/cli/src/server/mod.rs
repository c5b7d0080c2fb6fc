mod signal;
mod web;

pub use signal::wait_for_signal;
pub use web::start_web_server;
