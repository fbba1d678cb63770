//! Small formatting helpers.

/// `"1 document"`, `"3 documents"`, `"0 documents"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "document"), "0 documents");
        assert_eq!(plural_count(1, "document"), "1 document");
        assert_eq!(plural_count(12, "identifier"), "12 identifiers");
    }
}
