//! Name normalization policy.
//!
//! Every lookup of an employee, book, car, or resident by name goes through
//! [`names_match`], so matching is case-insensitive and ignores surrounding
//! whitespace everywhere. Stored values keep the case they were entered with.

/// Fold a name into its comparison form: trimmed and lowercased.
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether two names refer to the same entity under the folding policy.
pub fn names_match(a: &str, b: &str) -> bool {
    fold_name(a) == fold_name(b)
}

/// Capitalize the first letter of each alphabetic run and lowercase the rest.
///
/// `"war and peace"` becomes `"War And Peace"`, `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;

    for c in s.trim().chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_ignores_case_and_padding() {
        assert!(names_match("  Ivanov Ivan ", "ivanov ivan"));
        assert!(names_match("ПЕТРОВ", "петров"));
        assert!(!names_match("Ivanov", "Ivanova"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("war and peace"), "War And Peace");
        assert_eq!(title_case("  o'neil  "), "O'Neil");
        assert_eq!(title_case("ЛЕВ толстой"), "Лев Толстой");
        assert_eq!(title_case("1984"), "1984");
    }
}
