//! Application state module

mod app_state;
mod forms;
pub mod selection;
mod submission;

pub use app_state::*;
pub use forms::*;
pub use submission::*;
