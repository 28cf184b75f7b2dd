//! AI search widget (aisearch)
//!
//! Terminal search input with debounced autocomplete suggestions and a submit
//! flow that resolves free text to a listing-page URL.
//!
//! Pure core (`state`) and impure shell (`controller`, `api`, `view`).

pub mod api;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
#[allow(dead_code)] // Not every helper is used by every test module
mod test_harness;
