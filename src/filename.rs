//! Download filename derivation.

/// Substitute for an empty owner or model.
pub const UNKNOWN: &str = "Unknown";

/// Suffix appended to every report filename.
pub const SUFFIX: &str = "_Inspection.pdf";

fn component(value: &str) -> String {
    let value = value.replace('/', "_");
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value
    }
}

/// Build `"<owner>_<model>_Inspection.pdf"`.
///
/// Every `/` becomes `_`, and an empty owner or model becomes
/// [`UNKNOWN`]. The result never contains a path separator `/`.
///
/// ```
/// use inspection_report::derive_filename;
///
/// assert_eq!(derive_filename("Jane Doe", "Civic"), "Jane Doe_Civic_Inspection.pdf");
/// assert_eq!(derive_filename("A/B", ""), "A_B_Unknown_Inspection.pdf");
/// ```
pub fn derive_filename(owner: &str, model: &str) -> String {
    format!("{}_{}{}", component(owner), component(model), SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names() {
        assert_eq!(derive_filename("Jane Doe", "Civic"), "Jane Doe_Civic_Inspection.pdf");
    }

    #[test]
    fn test_slashes_are_replaced() {
        assert_eq!(
            derive_filename("Smith/Jones", "F-150/XL"),
            "Smith_Jones_F-150_XL_Inspection.pdf"
        );
    }

    #[test]
    fn test_empty_parts_become_unknown() {
        assert_eq!(derive_filename("", ""), "Unknown_Unknown_Inspection.pdf");
        assert_eq!(derive_filename("Jane", ""), "Jane_Unknown_Inspection.pdf");
    }

    #[test]
    fn test_lone_slash_is_not_empty() {
        assert_eq!(derive_filename("/", "Civic"), "__Civic_Inspection.pdf");
    }
}
