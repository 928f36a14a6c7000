//! Form snapshot and boundary parsing
//!
//! Every field is parsed to an explicit numeric type here, before any
//! arithmetic. Malformed text is rejected with `InvalidNumber`.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tally_ports::{FieldId, FormSurface};

use crate::error::{InterestError, Result};

/// Raw text of the three inputs at the moment a computation is triggered
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub principal: String,
    pub rate: String,
    pub years: String,
}

/// Parsed snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestInputs {
    /// Whole currency units, truncated toward zero
    pub principal: i64,
    /// Percent per year, as entered
    pub rate: Decimal,
    /// May be fractional; only the whole part moves the target year
    pub years: Decimal,
}

impl FormSnapshot {
    pub fn new(
        principal: impl Into<String>,
        rate: impl Into<String>,
        years: impl Into<String>,
    ) -> Self {
        Self {
            principal: principal.into(),
            rate: rate.into(),
            years: years.into(),
        }
    }

    /// Read the current input values from the form
    pub fn read(form: &impl FormSurface) -> Result<Self> {
        let field = |id: FieldId| form.value(id).ok_or(InterestError::MissingField(id));
        Ok(Self {
            principal: field(FieldId::Principal)?,
            rate: field(FieldId::Rate)?,
            years: field(FieldId::Years)?,
        })
    }

    /// Parse all three fields.
    ///
    /// The principal is checked first: a non-positive principal is reported
    /// even when the other fields are malformed.
    pub fn parse(&self) -> Result<InterestInputs> {
        let principal = parse_principal(&self.principal)?;
        if principal <= 0 {
            return Err(InterestError::NonPositivePrincipal { principal });
        }
        Ok(InterestInputs {
            principal,
            rate: parse_decimal(FieldId::Rate, &self.rate)?,
            years: parse_decimal(FieldId::Years, &self.years)?,
        })
    }
}

/// Parse a decimal and truncate it toward zero: `"1000.9"` -> `1000`
pub fn parse_principal(text: &str) -> Result<i64> {
    parse_decimal(FieldId::Principal, text)?
        .trunc()
        .to_i64()
        .ok_or_else(|| invalid(FieldId::Principal, text))
}

pub fn parse_decimal(field: FieldId, text: &str) -> Result<Decimal> {
    Decimal::from_str(text.trim()).map_err(|_| invalid(field, text))
}

fn invalid(field: FieldId, text: &str) -> InterestError {
    InterestError::InvalidNumber {
        field,
        value: text.to_string(),
    }
}
