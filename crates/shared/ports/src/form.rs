use std::fmt;

/// Elements of the interest calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    /// Numeric text input, must be positive after truncation
    Principal,
    /// Numeric input, mirrored live into `RateVal`
    Rate,
    /// Display label for the current rate
    RateVal,
    /// Numeric input, number of years
    Years,
    /// Output container for the generated markup
    Result,
}

impl FieldId {
    /// Element id as used in the page markup
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Principal => "principal",
            FieldId::Rate => "rate",
            FieldId::RateVal => "rate_val",
            FieldId::Years => "years",
            FieldId::Result => "result",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for the interactive form host
///
/// The calculator never holds form state itself: every trigger re-reads the
/// live field values through this trait and writes its output back through it.
pub trait FormSurface {
    /// Current text of an input element, `None` if the element is absent
    fn value(&self, field: FieldId) -> Option<String>;

    /// Replace an element's text content
    fn set_inner_text(&mut self, field: FieldId, text: &str);

    /// Replace an element's markup
    fn set_inner_html(&mut self, field: FieldId, html: &str);

    /// Blocking notification to the user
    fn alert(&mut self, message: &str);

    /// Move input focus to an element
    fn focus(&mut self, field: FieldId);
}
