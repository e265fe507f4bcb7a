/// Recovers the invocation text for a constructor-style initializer.
///
/// The foreign parser's raw text for an argument-list node omits the
/// constructed type: it reads `(1)` for `new Botan(1)`. The enclosing node's
/// text is the best available substitute, with a literal `new ` allocation
/// prefix stripped when present.
///
/// This is a one-level textual heuristic. It does not walk further up the
/// tree when the parent's text is empty, and it does not verify that the
/// stripped prefix actually denotes an allocation; a parent whose text
/// merely starts with those four characters is mis-stripped.
pub fn recover_invocation_text(own_text: &str, parent_text: Option<&str>) -> String {
    match parent_text {
        Some(parent) if !parent.is_empty() => {
            parent.strip_prefix("new ").unwrap_or(parent).to_string()
        }
        _ => own_text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::recover_invocation_text;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_allocation_prefix() {
        assert_eq!(
            recover_invocation_text("(1)", Some("new Botan(1)")),
            "Botan(1)"
        );
    }

    #[test]
    fn keeps_parent_text_without_prefix() {
        assert_eq!(recover_invocation_text("(1)", Some("Botan(1)")), "Botan(1)");
    }

    #[test]
    fn falls_back_to_own_text() {
        assert_eq!(recover_invocation_text("(42)", None), "(42)");
        assert_eq!(recover_invocation_text("(42)", Some("")), "(42)");
    }

    #[test]
    fn strips_only_the_exact_prefix() {
        // `new` must be followed by a single blank for the strip to apply.
        assert_eq!(
            recover_invocation_text("(1)", Some("newBotan(1)")),
            "newBotan(1)"
        );
        assert_eq!(
            recover_invocation_text("()", Some("new  Wide()")),
            " Wide()"
        );
    }
}
