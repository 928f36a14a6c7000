//! Tally Ports
//!
//! Port definitions (traits) for the Tally reports.
//! These define the boundaries between report logic and the outside world:
//! where the current time comes from, where text lines go, and the form the
//! interest calculator reads from and writes into.

mod clock;
mod error;
mod form;
mod sink;

pub use clock::Clock;
pub use error::{SinkError, SinkResult};
pub use form::{FieldId, FormSurface};
pub use sink::LineSink;
