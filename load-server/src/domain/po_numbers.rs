//! Purchase order number handling.

/// Split a comma-separated PO number string.
///
/// Each fragment is trimmed and blank fragments are dropped, so an empty
/// or all-whitespace input yields no PO numbers at all.
pub fn split_po_numbers(po_nums: &str) -> Vec<String> {
    po_nums
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blanks() {
        assert_eq!(split_po_numbers(" A1, , B2 ,"), vec!["A1", "B2"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split_po_numbers("").is_empty());
        assert!(split_po_numbers("   ").is_empty());
        assert!(split_po_numbers(" , ,").is_empty());
    }

    #[test]
    fn single_value() {
        assert_eq!(split_po_numbers("PO-778"), vec!["PO-778"]);
    }

    #[test]
    fn inner_spaces_are_kept() {
        assert_eq!(split_po_numbers("PO 1,PO 2"), vec!["PO 1", "PO 2"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// No fragment is ever blank or padded
        #[test]
        fn fragments_are_trimmed_and_non_empty(s in "[A-Z0-9 ,]{0,40}") {
            for po in split_po_numbers(&s) {
                prop_assert!(!po.is_empty());
                prop_assert_eq!(po.trim(), po.as_str());
                prop_assert!(!po.contains(','));
            }
        }

        /// Joining the output back together and splitting again is stable
        #[test]
        fn resplit_is_stable(s in "[A-Z0-9 ,]{0,40}") {
            let once = split_po_numbers(&s);
            let twice = split_po_numbers(&once.join(","));
            prop_assert_eq!(once, twice);
        }
    }
}
