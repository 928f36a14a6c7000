//! Simple interest computation

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use tally_core::Money;

use crate::error::{InterestError, Result};
use crate::snapshot::InterestInputs;

/// Outcome of one compute request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestQuote {
    pub principal: i64,
    pub rate: Decimal,
    pub years: Decimal,
    pub interest: Money,
    /// principal + interest
    pub amount: Money,
    /// Current calendar year plus the whole part of `years`
    pub target_year: i32,
}

/// `interest = principal * years * rate / 100`, `amount = principal + interest`
pub fn compute(inputs: &InterestInputs, current_year: i32) -> Result<InterestQuote> {
    if inputs.principal <= 0 {
        return Err(InterestError::NonPositivePrincipal {
            principal: inputs.principal,
        });
    }

    let principal = Decimal::from(inputs.principal);
    let interest = principal
        .checked_mul(inputs.years)
        .and_then(|v| v.checked_mul(inputs.rate))
        .and_then(|v| v.checked_div(dec!(100)))
        .ok_or(InterestError::Overflow)?;
    let amount = principal
        .checked_add(interest)
        .ok_or(InterestError::Overflow)?;

    let target_year = inputs
        .years
        .trunc()
        .to_i32()
        .and_then(|y| current_year.checked_add(y))
        .ok_or(InterestError::Overflow)?;

    Ok(InterestQuote {
        principal: inputs.principal,
        rate: inputs.rate,
        years: inputs.years,
        interest,
        amount,
        target_year,
    })
}
