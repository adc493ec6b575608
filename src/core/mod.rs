//! Core lead-capture logic, independent of the rendering layer

#[cfg(feature = "ssr")]
pub mod config;
pub mod countdown;
mod error;
pub mod exit_intent;
mod lead;
#[cfg(feature = "ssr")]
pub mod leads;
mod notification;
pub mod reveal;
pub mod rotation;
mod services;
mod submission;
#[cfg(test)]
mod tests;
pub mod validation;

pub use error::*;
pub use lead::*;
pub use notification::*;
pub use services::*;
pub use submission::*;
pub use validation::{EmailAddress, ValidationError, validate_email};
