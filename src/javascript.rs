//! Javascript fragments injected around remote calls.
//!
//! Fragments target the Prototype `Element` and `Form` helpers. They are opaque
//! to the rest of the crate, which only concatenates them.

/// Escape a value for interpolation inside a single-quoted javascript string
pub fn escape_javascript(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            _ => out.push(c),
        }
    }
    out
}

pub fn show_element(id: &str) -> String {
    format!("Element.show('{}')", escape_javascript(id))
}

pub fn hide_element(id: &str) -> String {
    format!("Element.hide('{}')", escape_javascript(id))
}

/// Wrap `show` so a missing indicator raises an alert naming it instead of
/// aborting the remote call silently
pub fn guard_indicator(show: &str, id: &str) -> String {
    let id = escape_javascript(id);
    format!(
        "try {{ {show} }} catch(e) {{ alert('The remote helper indicator \\'{id}\\' has not been defined.\\n\\nEither define the indicator with the \\'indicator\\' helper or pass indicator: false as an option to disable the indicator.') }}"
    )
}

/// Capture the submitting form and disable it
pub fn disable_current_form() -> String {
    "var form = this; Form.disable(form)".to_string()
}

/// Re-enable the form captured by [`disable_current_form`]
pub fn enable_current_form() -> String {
    "Form.enable(form)".to_string()
}

pub fn disable_named_form(name: &str) -> String {
    format!("Form.disable('{}')", escape_javascript(name))
}

pub fn enable_named_form(name: &str) -> String {
    format!("Form.enable('{}')", escape_javascript(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_javascript() {
        assert_eq!(escape_javascript("spinner"), "spinner");
        assert_eq!(escape_javascript("it's"), "it\\'s");
        assert_eq!(escape_javascript("a\\b"), "a\\\\b");
        assert_eq!(escape_javascript("line\nbreak"), "line\\nbreak");
        assert_eq!(escape_javascript("</script>"), "\\u003c/script>");
    }

    #[test]
    fn test_show_and_hide() {
        assert_eq!(show_element("spinner"), "Element.show('spinner')");
        assert_eq!(hide_element("spinner"), "Element.hide('spinner')");
    }

    #[test]
    fn test_guard_names_indicator() {
        let guarded = guard_indicator(&show_element("spinner"), "spinner");
        assert!(guarded.starts_with("try { Element.show('spinner') } catch(e) { alert('"));
        assert!(guarded.contains("\\'spinner\\' has not been defined"));
        assert!(guarded.contains("indicator: false"));
        assert!(guarded.ends_with("') }"));
    }

    #[test]
    fn test_named_form_fragments() {
        assert_eq!(disable_named_form("myform"), "Form.disable('myform')");
        assert_eq!(enable_named_form("myform"), "Form.enable('myform')");
    }

    #[test]
    fn test_current_form_fragments_share_reference() {
        assert!(disable_current_form().starts_with("var form = this;"));
        assert!(enable_current_form().contains("(form)"));
    }
}
