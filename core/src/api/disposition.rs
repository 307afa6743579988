//! Download filename from a `Content-Disposition` header.
//!
//! Only the plain `filename=` parameter is looked at, by substring. The
//! RFC 6266 `filename*=UTF-8''...` form is not decoded; a header carrying
//! only that form yields [`DEFAULT_PDF_FILENAME`].

/// Used when the service does not name the PDF.
pub const DEFAULT_PDF_FILENAME: &str = "bulk-waybills.pdf";

const FILENAME_PARAM: &str = "filename=";

/// Text after the first `filename=` (up to a second one, if any), with
/// every `"` removed.
pub fn filename_from_disposition(header: Option<&str>) -> String {
    header
        .and_then(|value| value.split(FILENAME_PARAM).nth(1))
        .map(|raw| raw.replace('"', ""))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PDF_FILENAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_filename() {
        let name = filename_from_disposition(Some("attachment; filename=\"report.pdf\""));
        assert_eq!(name, "report.pdf");
    }

    #[test]
    fn test_unquoted_filename() {
        let name = filename_from_disposition(Some("attachment; filename=bulk-waybills.pdf"));
        assert_eq!(name, "bulk-waybills.pdf");
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(filename_from_disposition(None), DEFAULT_PDF_FILENAME);
    }

    #[test]
    fn test_header_without_filename() {
        assert_eq!(filename_from_disposition(Some("inline")), DEFAULT_PDF_FILENAME);
        assert_eq!(
            filename_from_disposition(Some("attachment; filename=")),
            DEFAULT_PDF_FILENAME
        );
    }

    #[test]
    fn test_extended_form_is_not_decoded() {
        let name = filename_from_disposition(Some("attachment; filename*=UTF-8''r%C3%A9sum%C3%A9.pdf"));
        assert_eq!(name, DEFAULT_PDF_FILENAME);
    }

    #[test]
    fn test_trailing_parameters_are_kept() {
        // substring semantics: everything after `filename=` is the name
        let name = filename_from_disposition(Some("attachment; filename=\"a.pdf\"; size=10"));
        assert_eq!(name, "a.pdf; size=10");
    }
}
