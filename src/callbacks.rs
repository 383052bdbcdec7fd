use crate::error::{RemoteError, RemoteResult};
use crate::options::{OptionValue, OptionsBag};

/// Separator placed between code fragments of the same lifecycle event
pub const FRAGMENT_SEPARATOR: &str = ";";

/// A lifecycle point of a remote call at which injected code runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackEvent {
    Before,
    Complete,
}

impl CallbackEvent {
    /// Option key holding the code for this event
    pub fn key(self) -> &'static str {
        match self {
            CallbackEvent::Before => "before",
            CallbackEvent::Complete => "complete",
        }
    }
}

/// A paired set of fragments injected together by one decorator
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackCode {
    pub before: String,
    pub complete: String,
}

/// Join fragments with the separator, skipping empty ones
pub fn join_fragments<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments
        .into_iter()
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
}

/// Prepend `fragment` to whatever code the bag already holds for `event`.
pub fn inject_callback(
    bag: &mut OptionsBag,
    event: CallbackEvent,
    fragment: &str,
) -> RemoteResult<()> {
    let key = event.key();
    let existing = match bag.get(key) {
        None => "",
        Some(OptionValue::String(code)) => code.as_str(),
        Some(other) => {
            return Err(RemoteError::InvalidOptionType {
                key: key.to_string(),
                expected: format!("string of javascript code, got {}", other.type_name()),
            })
        }
    };

    let joined = join_fragments([fragment, existing]);
    if !joined.is_empty() {
        bag.insert(key, joined);
    }
    Ok(())
}

/// Inject both halves of a paired callback
pub fn add_callback_code(bag: &mut OptionsBag, code: &CallbackCode) -> RemoteResult<()> {
    inject_callback(bag, CallbackEvent::Before, &code.before)?;
    inject_callback(bag, CallbackEvent::Complete, &code.complete)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_into_empty_has_no_separator() {
        let mut bag = OptionsBag::new();
        inject_callback(&mut bag, CallbackEvent::Before, "A").unwrap();
        assert_eq!(bag.get_str("before").unwrap(), Some("A"));
    }

    #[test]
    fn test_inject_prepends_new_fragment() {
        let mut bag = OptionsBag::new();
        inject_callback(&mut bag, CallbackEvent::Before, "A").unwrap();
        inject_callback(&mut bag, CallbackEvent::Before, "B").unwrap();
        assert_eq!(bag.get_str("before").unwrap(), Some("B;A"));
    }

    #[test]
    fn test_inject_keeps_caller_code() {
        let mut bag = OptionsBag::new().with("complete", "alert('done')");
        inject_callback(&mut bag, CallbackEvent::Complete, "Element.hide('x')").unwrap();
        assert_eq!(
            bag.get_str("complete").unwrap(),
            Some("Element.hide('x');alert('done')")
        );
    }

    #[test]
    fn test_inject_into_empty_string_has_no_trailing_separator() {
        let mut bag = OptionsBag::new().with("before", "");
        inject_callback(&mut bag, CallbackEvent::Before, "A").unwrap();
        assert_eq!(bag.get_str("before").unwrap(), Some("A"));
    }

    #[test]
    fn test_inject_rejects_non_string_existing_code() {
        let mut bag = OptionsBag::new().with("before", true);
        let result = inject_callback(&mut bag, CallbackEvent::Before, "A");
        assert!(matches!(result, Err(RemoteError::InvalidOptionType { .. })));
    }

    #[test]
    fn test_inject_leaves_other_event_alone() {
        let mut bag = OptionsBag::new();
        inject_callback(&mut bag, CallbackEvent::Before, "A").unwrap();
        assert!(!bag.contains_key("complete"));
    }

    #[test]
    fn test_join_fragments_is_associative() {
        let left = join_fragments([join_fragments(["a", "b"]).as_str(), "c"]);
        let right = join_fragments(["a", join_fragments(["b", "c"]).as_str()]);
        assert_eq!(left, right);
        assert_eq!(join_fragments(["", "x", ""]), "x");
    }

    #[test]
    fn test_add_callback_code_pairs() {
        let mut bag = OptionsBag::new();
        let code = CallbackCode {
            before: "Form.disable('f')".to_string(),
            complete: "Form.enable('f')".to_string(),
        };
        add_callback_code(&mut bag, &code).unwrap();
        assert_eq!(bag.get_str("before").unwrap(), Some("Form.disable('f')"));
        assert_eq!(bag.get_str("complete").unwrap(), Some("Form.enable('f')"));
    }
}
