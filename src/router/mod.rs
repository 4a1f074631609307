mod errors;
mod methods;
mod options;
mod routable;
mod service;

pub use errors::{RouterError, RouterResult};
pub use options::{RouterOptions, RouterOptionsBuilder, RouterOptionsError};
pub use routable::Routable;
pub use service::Router;
