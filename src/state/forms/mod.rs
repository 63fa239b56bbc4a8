//! Form domain layer
//!
//! Holds the search form values and the focus model used by key handling.

mod form_state;

pub use form_state::{FormFocus, FormState};
