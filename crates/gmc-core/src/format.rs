//! Display formatting for treatment names.

/// Upper-case the first character of every whitespace-separated token.
///
/// The rest of each token and all whitespace are left untouched, so
/// `"joint replacement single"` becomes `"Joint Replacement Single"` and
/// `"maternity c-Section"` becomes `"Maternity C-Section"`. Total for any
/// input; the empty string maps to itself.
pub fn format_treatment_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_token_start = true;
    for c in raw.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_token_start = true;
        } else if at_token_start {
            out.extend(c.to_uppercase());
            at_token_start = false;
        } else {
            out.push(c);
        }
    }
    out
}
