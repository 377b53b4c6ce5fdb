//! Contact form of the programme landing page.
//!
//! Holds the submitted field values, validates them with the same coarse
//! rules the page has always used and builds the `mailto:` fallback link.

mod error;
mod form;
mod mailto;
mod submission;
mod value_object;

pub use error::*;
pub use form::*;
pub use mailto::*;
pub use submission::*;
pub use value_object::*;
