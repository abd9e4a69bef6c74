pub mod access;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use access::*;
pub use config::*;
pub use error::*;
pub use models::*;
pub use session::*;
