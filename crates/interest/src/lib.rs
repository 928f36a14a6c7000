//! Tally Interest - Simple Interest Calculator
//!
//! A form with three inputs (`principal`, `rate`, `years`), a `rate_val`
//! label and a `result` container, driven by two triggers:
//!
//! - **rate changed**: mirror the rate input into `rate_val`
//! - **compute requested**: snapshot the inputs, compute
//!   `interest = principal * years * rate / 100` and render the result
//!
//! ## Layers
//!
//! ```text
//!   FormSurface ──read──► FormSnapshot ──parse──► InterestInputs
//!                                                     │ compute(current year)
//!                                                     ▼
//!   FormSurface ◄──render_result── InterestQuote
//! ```
//!
//! Parsing and computation are pure; only [`InterestForm`] touches the form.

pub mod calculator;
pub mod error;
pub mod form;
pub mod markup;
pub mod memory;
pub mod snapshot;

pub use calculator::{InterestQuote, compute};
pub use error::{InterestError, Result};
pub use form::{InterestForm, NON_POSITIVE_PRINCIPAL_ALERT};
pub use markup::{render_form_page, render_result};
pub use memory::MemoryForm;
pub use snapshot::{FormSnapshot, InterestInputs};
