pub mod model;
pub mod regenerate;

#[cfg(feature = "server")]
pub mod server;
