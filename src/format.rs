//! Positional message templating.
//!
//! Templates use `{}` as the substitution marker. Placeholders are replaced
//! left to right with the display rendering of successive arguments.

use std::fmt;

/// The two-character substitution marker.
pub const PLACEHOLDER: &str = "{}";

/// Render `template` with positional substitutions.
///
/// Behavior, kept bug-for-bug compatible with existing call sites:
///
/// - A `None` template renders as the empty string.
/// - A template without `{}` is returned unchanged and the arguments are
///   ignored (fast path, not an error).
/// - Surplus arguments beyond the number of placeholders are silently
///   dropped.
/// - With fewer arguments than placeholders, only the first N placeholders
///   are replaced; the rest of the template is appended verbatim, so the
///   surplus placeholders stay in the output as literal `{}`. Callers rely
///   on this, so it must not be tightened into an error.
///
/// Never fails.
///
/// # Example
///
/// ```
/// use android_logger::format::render;
///
/// assert_eq!(render(Some("Hello {}"), &["World"]), "Hello World");
/// assert_eq!(render(Some("{} and {}"), &["A"]), "A and {}");
/// assert_eq!(render::<&str>(None, &[]), "");
/// ```
pub fn render<T: fmt::Display>(template: Option<&str>, args: &[T]) -> String {
    let Some(template) = template else {
        return String::new();
    };

    if !template.contains(PLACEHOLDER) {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    for arg in args {
        let Some(idx) = rest.find(PLACEHOLDER) else {
            break;
        };
        out.push_str(&rest[..idx]);
        out.push_str(&arg.to_string());
        rest = &rest[idx + PLACEHOLDER.len()..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ARGS: &[&str] = &[];

    #[test]
    fn test_none_template_renders_empty() {
        assert_eq!(render(None, NO_ARGS), "");
        assert_eq!(render(None, &["ignored"]), "");
    }

    #[test]
    fn test_empty_template_renders_empty() {
        assert_eq!(render(Some(""), &["ignored"]), "");
    }

    #[test]
    fn test_template_without_placeholder_is_unchanged() {
        assert_eq!(render(Some("plain message"), NO_ARGS), "plain message");
        assert_eq!(render(Some("plain message"), &["a", "b"]), "plain message");
    }

    #[test]
    fn test_single_substitution() {
        assert_eq!(render(Some("Hello {}"), &["World"]), "Hello World");
    }

    #[test]
    fn test_substitutions_apply_in_order() {
        assert_eq!(
            render(Some("user '{}' from {}"), &["alice", "10.0.0.1"]),
            "user 'alice' from 10.0.0.1"
        );
    }

    #[test]
    fn test_fewer_args_leaves_trailing_placeholder_literal() {
        assert_eq!(render(Some("{} and {}"), &["A"]), "A and {}");
    }

    #[test]
    fn test_fewer_args_three_placeholders() {
        assert_eq!(render(Some("{} {} {}"), &["a", "b"]), "a b {}");
    }

    #[test]
    fn test_no_args_with_placeholders_keeps_them_literal() {
        assert_eq!(render(Some("{} {}"), NO_ARGS), "{} {}");
    }

    #[test]
    fn test_extra_args_are_ignored() {
        assert_eq!(render(Some("only {}"), &["one", "two", "three"]), "only one");
    }

    #[test]
    fn test_placeholder_at_start_and_end() {
        assert_eq!(render(Some("{}mid{}"), &["a", "b"]), "amidb");
    }

    #[test]
    fn test_adjacent_placeholders() {
        assert_eq!(render(Some("{}{}"), &["a", "b"]), "ab");
    }

    #[test]
    fn test_non_string_display_args() {
        assert_eq!(render(Some("code {}"), &[503]), "code 503");
    }
}
