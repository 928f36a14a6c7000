//! HTML produced by the calculator

use std::fmt::Write;

use crate::calculator::InterestQuote;

/// Result sentence written into the `result` container.
///
/// Every value is wrapped in `<mark>`; the amount prints without trailing
/// zeros (`1100`, `1102.5`), the rate at the scale it was entered with.
pub fn render_result(quote: &InterestQuote) -> String {
    format!(
        "If you deposit $<mark>{}</mark>,<br> at an interest rate of <mark>{}%</mark><br> \
         You will receive an amount of $<mark>{}</mark>,<br> in the year <mark>{}</mark><br>",
        quote.principal,
        escape_html(&quote.rate.to_string()),
        escape_html(&quote.amount.normalize().to_string()),
        quote.target_year
    )
}

/// The calculator page: inputs, rate label, compute button, result container
pub fn render_form_page() -> String {
    let mut years = String::new();
    for y in 1..=10 {
        let _ = writeln!(years, "        <option value=\"{y}\">{y}</option>");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Simple Interest Calculator</title>
</head>
<body>
    <h1>Simple Interest Calculator</h1>
    <label for="principal">Amount</label>
    <input type="number" id="principal" name="principal" required>
    <br>
    <label for="rate">Interest Rate</label>
    <input type="range" id="rate" name="rate" min="1" max="20" step="0.25" value="10.25" data-trigger="rate-changed">
    <span id="rate_val">10.25</span><span>%</span>
    <br>
    <label for="years">No. of Years</label>
    <select id="years" name="years">
{years}    </select>
    <br>
    <button type="button" data-trigger="compute-requested">Compute Interest</button>
    <br>
    <span id="result"></span>
</body>
</html>
"#
    )
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
