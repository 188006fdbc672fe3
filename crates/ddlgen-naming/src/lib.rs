//! Naming conventions and helpers for ddlgen code generation.
//!
//! This crate converts SQL identifiers between the snake, camel and Pascal
//! cases used by the generated artifacts. It has no dependencies and can be
//! used by any other ddlgen crate. Every function is total: any string,
//! including the empty string, is accepted.

// ============================================================================
// Column / Class Naming
// ============================================================================

/// Convert a SQL identifier to lower camelCase.
///
/// Identifiers containing `_` are treated as snake case: the first segment is
/// lower-cased and every following segment is capitalized. A single-character
/// leading segment (e.g. the `A` in `A_name`) is kept upper-case and glued to
/// the next segment, which then acts as the head.
///
/// Identifiers without `_` are lower-cased wholesale when entirely upper-case,
/// otherwise only their first character is lowered so existing camel humps
/// survive.
///
/// # Examples
/// ```
/// use ddlgen_naming::to_camel_case;
///
/// assert_eq!(to_camel_case("created_at"), "createdAt");
/// assert_eq!(to_camel_case("USER_ID"), "userId");
/// assert_eq!(to_camel_case("A_name"), "Aname");
/// assert_eq!(to_camel_case("EMAIL"), "email");
/// assert_eq!(to_camel_case("UserName"), "userName");
/// ```
pub fn to_camel_case(identifier: &str) -> String {
    if !identifier.contains('_') {
        if is_all_upper(identifier) {
            return identifier.to_lowercase();
        }
        return lower_first(identifier);
    }

    let mut segments = identifier.split('_').filter(|s| !s.is_empty()).peekable();
    let mut result = String::with_capacity(identifier.len());

    let Some(first) = segments.next() else {
        return result;
    };

    if first.chars().count() == 1 && segments.peek().is_some() {
        // Single-letter prefix stays upper-case; the next segment becomes the head.
        result.push_str(&first.to_uppercase());
        if let Some(head) = segments.next() {
            result.push_str(&head.to_lowercase());
        }
    } else {
        result.push_str(&first.to_lowercase());
    }

    for segment in segments {
        result.push_str(&capitalize(&segment.to_lowercase()));
    }
    result
}

/// Upper-case the first character of an identifier, leaving the rest as-is.
///
/// # Examples
/// ```
/// use ddlgen_naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("createdAt"), "CreatedAt");
/// assert_eq!(to_pascal_case("users"), "Users");
/// assert_eq!(to_pascal_case(""), "");
/// ```
pub fn to_pascal_case(identifier: &str) -> String {
    capitalize(identifier)
}

/// Lower-case the first character of an identifier, leaving the rest as-is.
pub fn lower_first(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a camel/Pascal identifier to lower snake_case.
///
/// An underscore is inserted before every upper-case letter that follows a
/// lower-case letter or digit. Existing underscores are kept.
///
/// # Examples
/// ```
/// use ddlgen_naming::to_snake_case;
///
/// assert_eq!(to_snake_case("UserInfo"), "user_info");
/// assert_eq!(to_snake_case("Users"), "users");
/// assert_eq!(to_snake_case("User_info"), "user_info");
/// ```
pub fn to_snake_case(identifier: &str) -> String {
    let mut result = String::with_capacity(identifier.len() + 4);
    let mut prev_lower_or_digit = false;
    for ch in identifier.chars() {
        if ch.is_uppercase() && prev_lower_or_digit {
            result.push('_');
        }
        prev_lower_or_digit = ch.is_lowercase() || ch.is_ascii_digit();
        result.extend(ch.to_lowercase());
    }
    result
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_all_upper(s: &str) -> bool {
    s.chars().any(char::is_alphabetic) && !s.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    // ========================================================================
    // Camel Case Tests
    // ========================================================================

    #[rstest]
    #[case("created_at", "createdAt")]
    #[case("user_id", "userId")]
    #[case("USER_ID", "userId")]
    #[case("first_NAME_kana", "firstNameKana")]
    #[case("A_name", "Aname")]
    #[case("a_name", "Aname")]
    #[case("A_user_id", "AuserId")]
    #[case("_id", "id")]
    #[case("user__id", "userId")]
    #[case("trailing_", "trailing")]
    #[case("_", "")]
    fn test_to_camel_case_snake_input(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_camel_case(input), expected);
    }

    #[rstest]
    #[case("EMAIL", "email")]
    #[case("ID", "id")]
    #[case("id", "id")]
    #[case("name", "name")]
    #[case("UserName", "userName")]
    #[case("userName", "userName")]
    #[case("HTTPStatus", "hTTPStatus")]
    #[case("COL1", "col1")]
    #[case("", "")]
    fn test_to_camel_case_without_underscore(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_camel_case(input), expected);
    }

    #[test]
    fn test_single_letter_without_tail_is_lowered() {
        // Only a prefix when another segment follows it.
        assert_eq!(to_camel_case("A_"), "a");
    }

    // ========================================================================
    // Pascal / Snake Tests
    // ========================================================================

    #[rstest]
    #[case("createdAt", "CreatedAt")]
    #[case("users", "Users")]
    #[case("Users", "Users")]
    #[case("user_info", "User_info")]
    #[case("", "")]
    fn test_to_pascal_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_pascal_case(input), expected);
    }

    #[rstest]
    #[case("UserInfo", "user_info")]
    #[case("Users", "users")]
    #[case("User_info", "user_info")]
    #[case("Order2Item", "order2_item")]
    #[case("", "")]
    fn test_to_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("UserInfo"), "userInfo");
        assert_eq!(lower_first("Users"), "users");
        assert_eq!(lower_first(""), "");
    }

    proptest! {
        #[test]
        fn pascal_case_is_idempotent(s in "[A-Za-z0-9_]{0,24}") {
            let once = to_pascal_case(&s);
            prop_assert_eq!(to_pascal_case(&once), once);
        }

        #[test]
        fn camel_case_never_keeps_underscores(s in "[A-Za-z0-9_]{0,24}") {
            prop_assert!(!to_camel_case(&s).contains('_'));
        }

        #[test]
        fn pascal_of_camel_only_touches_first_char(s in "[a-z][a-z0-9_]{0,24}") {
            let camel = to_camel_case(&s);
            let pascal = to_pascal_case(&camel);
            prop_assert_eq!(pascal.len(), camel.len());
            prop_assert_eq!(&pascal[1..], &camel[1..]);
        }
    }
}
