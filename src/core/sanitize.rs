//! Filename sanitization for untrusted identity strings.
//!
//! Emails and tenant identifiers come from unverified tokens and URLs, so
//! they are mapped to a single safe path component before they reach the
//! token cache. Unsafe characters are substituted 1:1 with `_`, never
//! dropped or reordered, so the result stays readable.
//!
//! The transform runs in two passes:
//!
//! 1. Percent triplets that encode a separator, a dot or NUL (`%2F`, `%5C`,
//!    `%2E`, `%00`, any case) are neutralized to `_`. Every other `%` is
//!    replaced by `_` and the characters after it are kept, so double
//!    encodings such as `%252F` are never decoded a second time.
//! 2. Literal characters are checked against the substitution set below.
//!    Runs of dots are broken up so no `..` survives.

/// Characters that are never allowed in a filename component.
///
/// Whitespace and control characters (NUL included) are substituted too.
/// New unsafe characters belong here, not in a complement rule.
const SUBSTITUTED: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Replacement for every unsafe character.
const REPLACEMENT: char = '_';

/// One logical input unit after percent-triplet handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    /// A character taken from the input as-is.
    Literal(char),
    /// A recognized triplet or a stray `%`.
    Neutralized,
}

/// Map an untrusted string to a filesystem-safe filename component.
///
/// Empty input yields empty output. The result never contains `/`, `\`,
/// NUL, `%` or `..`, and sanitizing it again returns it unchanged.
pub fn sanitize_email_for_filename(input: &str) -> String {
    let units = neutralize_percent_triplets(input);
    substitute_unsafe(&units)
}

/// Pass 1: handle `%XX` sequences without general URL decoding.
fn neutralize_percent_triplets(input: &str) -> Vec<Unit> {
    let chars: Vec<char> = input.chars().collect();
    let mut units = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '%' {
            units.push(Unit::Literal(chars[i]));
            i += 1;
            continue;
        }

        units.push(Unit::Neutralized);
        match (chars.get(i + 1), chars.get(i + 2)) {
            (Some(&hi), Some(&lo)) if is_unsafe_triplet(hi, lo) => i += 3,
            _ => i += 1,
        }
    }

    units
}

/// True for `%2F`, `%5C`, `%2E` and `%00` in any letter case.
fn is_unsafe_triplet(hi: char, lo: char) -> bool {
    matches!(
        (hi, lo.to_ascii_uppercase()),
        ('2', 'F') | ('5', 'C') | ('2', 'E') | ('0', '0')
    )
}

/// Pass 2: character-class substitution over the literal units.
fn substitute_unsafe(units: &[Unit]) -> String {
    let mut out = String::with_capacity(units.len());

    for (i, unit) in units.iter().enumerate() {
        let c = match *unit {
            Unit::Neutralized => REPLACEMENT,
            // Every dot of a run except the last one is replaced.
            Unit::Literal('.') if units.get(i + 1) == Some(&Unit::Literal('.')) => REPLACEMENT,
            Unit::Literal(c) if is_unsafe_char(c) => REPLACEMENT,
            Unit::Literal(c) => c,
        };
        out.push(c);
    }

    out
}

fn is_unsafe_char(c: char) -> bool {
    SUBSTITUTED.contains(&c) || c.is_whitespace() || c.is_control()
}
