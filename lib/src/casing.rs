//! Name-case converters used to derive asset file names from token
//! identifiers.

/// Turn a snake_case name into PascalCase.
///
/// Capitalization follows title-case rules: a letter is uppercased whenever
/// the preceding character is not a letter, and lowercased otherwise.
/// Segments containing digits or punctuation therefore capitalize at those
/// boundaries too (`"token_1a"` becomes `"Token1A"`). Kept for compatibility
/// with existing asset names.
pub fn to_pascal_case(name: &str) -> String {
    let mut output = String::with_capacity(name.len());

    let mut prev_cased = false;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            match prev_cased {
                true => output.extend(ch.to_lowercase()),
                false => output.extend(ch.to_uppercase()),
            }

            prev_cased = true;
        } else {
            if ch != '_' {
                output.push(ch);
            }

            prev_cased = false;
        }
    }

    output
}

/// Turn a PascalCase name into snake_case.
///
/// An underscore is inserted between a character and a following uppercase
/// letter, scanning left to right without overlap: a character already used
/// on the left of one insertion cannot anchor the next (`"ABC"` becomes
/// `"a_bc"`, not `"a_b_c"`). The result is lowercased.
pub fn from_pascal_case(name: &str) -> String {
    let mut output = String::with_capacity(name.len() + 4);

    let mut anchor = false;
    for ch in name.chars() {
        if ch.is_uppercase() && anchor {
            output.push('_');
            output.extend(ch.to_lowercase());
            anchor = false;
        } else {
            output.extend(ch.to_lowercase());
            anchor = true;
        }
    }

    output
}

/// Turn a snake_case name into camelCase.
///
/// Leading underscores are stripped first. Note that the first letter is
/// left uppercase, so the output matches [`to_pascal_case`] of the stripped
/// name; existing call sites rely on this.
pub fn to_camel_case(name: &str) -> String {
    to_pascal_case(name.trim_start_matches('_'))
}

/// Turn a snake_case name into kebab-case.
pub fn to_kebab_case(name: &str) -> String {
    name.replace('_', "-")
}
