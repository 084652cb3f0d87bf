mod cascade;
mod error;
pub mod models;
pub mod ports;
mod reference;
mod resolver;
mod rows;
mod services;
mod session;
mod submission;
mod validation;

pub use cascade::*;
pub use error::*;
pub use reference::*;
pub use resolver::*;
pub use rows::*;
pub use services::*;
pub use session::*;
pub use submission::*;
pub use validation::*;
