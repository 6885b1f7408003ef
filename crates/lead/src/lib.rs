mod error;
mod field;
mod form;
mod notice;
mod schema;
mod service;
pub mod validation;

pub use error::*;
pub use field::*;
pub use form::*;
pub use notice::*;
pub use schema::*;
pub use service::*;
pub use validation::{is_valid_email, is_valid_phone};
