//! Environment-variable name to property key conversion.

/// Converts an environment variable name to a property key.
///
/// - a single underscore (`_`) between two other characters becomes a `.`
/// - a double underscore (`__`) becomes a single `_`
/// - a triple underscore (`___`) becomes a `-`
/// - the whole result is lower-cased
///
/// A run of four or more underscores is rewritten left to right as one `-`
/// per three underscores, followed by a single `_` if any remain, so `____`
/// becomes `-_`. A lone underscore at the very start or end of the name is
/// not flanked and stays `_`.
pub fn convert_key(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '_' {
            out.extend(chars[i].to_lowercase());
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i] == '_' {
            i += 1;
        }
        let run = i - start;

        if run == 1 {
            let flanked = start > 0 && i < chars.len();
            out.push(if flanked { '.' } else { '_' });
        } else {
            out.extend(std::iter::repeat_n('-', run / 3));
            if run % 3 != 0 {
                out.push('_');
            }
        }
    }

    out
}
