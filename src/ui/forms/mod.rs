//! Form rendering module
//!
//! - `field_renderer`: single-line text field rendering
//! - `search_form`: the Craigslist search form

mod field_renderer;
mod search_form;

pub use search_form::draw_search_form;
