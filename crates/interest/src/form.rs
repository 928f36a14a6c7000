//! The two form triggers

use log::{debug, info, warn};
use tally_ports::{Clock, FieldId, FormSurface};

use crate::calculator::{InterestQuote, compute};
use crate::error::{InterestError, Result};
use crate::markup::render_result;
use crate::snapshot::FormSnapshot;

pub const NON_POSITIVE_PRINCIPAL_ALERT: &str = "Please enter a positive number!";

/// Event handlers for the calculator form.
///
/// Holds no form state: each trigger re-reads the live fields.
pub struct InterestForm<C: Clock> {
    clock: C,
}

impl<C: Clock> InterestForm<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Mirror the rate input verbatim into the `rate_val` label
    pub fn on_rate_changed(&self, form: &mut impl FormSurface) -> String {
        let rate = form.value(FieldId::Rate).unwrap_or_default();
        form.set_inner_text(FieldId::RateVal, &rate);
        debug!("rate_val <- {:?}", rate);
        rate
    }

    /// Snapshot the inputs, compute, and render into `result`.
    ///
    /// A non-positive principal raises the alert, returns focus to the
    /// principal field and yields `Ok(None)` with `result` untouched.
    /// Malformed numbers and missing fields are returned as errors.
    pub fn on_compute_requested(
        &self,
        form: &mut impl FormSurface,
    ) -> Result<Option<InterestQuote>> {
        let snapshot = FormSnapshot::read(&*form)?;
        let year = self.clock.current_year();

        let quote = match snapshot.parse().and_then(|inputs| compute(&inputs, year)) {
            Ok(quote) => quote,
            Err(InterestError::NonPositivePrincipal { principal }) => {
                warn!("Rejected principal {} ({})", principal, snapshot.principal);
                form.alert(NON_POSITIVE_PRINCIPAL_ALERT);
                form.focus(FieldId::Principal);
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        form.set_inner_html(FieldId::Result, &render_result(&quote));
        info!(
            "Interest on {} at {}% for {} years: {} (amount {} in {}, clock {})",
            quote.principal,
            quote.rate,
            quote.years,
            quote.interest,
            quote.amount,
            quote.target_year,
            self.clock.name()
        );
        Ok(Some(quote))
    }
}
