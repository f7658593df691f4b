//! Property name → type name casing.

/// PascalCase an arbitrary property name.
///
/// Word characters are letters and ASCII digits; everything else (including
/// `²`, `½` and other numeric symbols) separates words and is dropped. Runs of
/// separators and lower→upper transitions start a new word. The first
/// character of a word is uppercased, the rest lowercased, except an uppercase
/// character directly followed by a lowercase one, which is kept (so
/// `userID_list` → `UserIdList` but `JsonRootElement` stays as is). A
/// character whose case mapping is not a single character (`ß` → `SS`) is
/// kept unchanged.
pub fn to_pascal_case(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;

    for (i, &c) in chars.iter().enumerate() {
        let next = chars.get(i + 1).copied();
        if c.is_alphabetic() || c.is_ascii_digit() {
            if word_start {
                out.push(single(c.to_uppercase()).unwrap_or(c));
                word_start = false;
            } else if c.is_uppercase() && next.is_some_and(char::is_lowercase) {
                out.push(c);
            } else {
                out.push(single(c.to_lowercase()).unwrap_or(c));
            }
        } else {
            word_start = true;
        }

        if c.is_lowercase() && next.is_some_and(char::is_uppercase) {
            word_start = true;
        }
    }

    out
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
