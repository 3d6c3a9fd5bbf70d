//! Rendering-boundary transforms.
//!
//! The engine works on raw letters only. J and P are shown as `C(J)` and
//! `M(P)`, and descriptive text tables are keyed by that display form.

use crate::error::{J16tError, J16tResult};
use crate::types::{Axis, Letter, TypeCode};

pub fn format_letter(letter: Letter) -> &'static str {
    match letter {
        Letter::E => "E",
        Letter::I => "I",
        Letter::S => "S",
        Letter::N => "N",
        Letter::T => "T",
        Letter::F => "F",
        Letter::J => "C(J)",
        Letter::P => "M(P)",
    }
}

/// Lookup key into the type description tables, e.g. `ESTC(J)`.
pub fn type_key(code: &TypeCode) -> String {
    code.letters().iter().map(|&l| format_letter(l)).collect()
}

/// Accepts both the raw (`ESTJ`) and display (`ESTC(J)`) spellings.
pub fn parse_type_key(s: &str) -> J16tResult<TypeCode> {
    let raw = s
        .trim()
        .to_ascii_uppercase()
        .replace("C(J)", "J")
        .replace("M(P)", "P");
    raw.parse().map_err(|_| {
        J16tError::Parse(format!("'{}' is not a recognised type code", s.trim()))
    })
}

/// Accepts a raw letter (`j`) or its display form (`C(J)`).
pub fn parse_letter(s: &str) -> J16tResult<Letter> {
    let t = s.trim().to_ascii_uppercase();
    let raw = match t.as_str() {
        "C(J)" | "C" => "J",
        "M(P)" | "M" => "P",
        other => other,
    };
    let mut chars = raw.chars();
    match (chars.next().and_then(Letter::from_char), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(J16tError::Parse(format!("'{}' is not a trait letter", s.trim()))),
    }
}

/// Long-form qualifier shown after the trait word for J and P.
pub fn suffix(letter: Letter) -> Option<&'static str> {
    match letter {
        Letter::J => Some("judging"),
        Letter::P => Some("perceiving"),
        _ => None,
    }
}

/// Group label for the paired chart, e.g. `S / N` or `C(J) / M(P)`.
pub fn group_label(axis: Axis) -> String {
    let [a, b] = axis.letters();
    format!("{} / {}", format_letter(a), format_letter(b))
}

/// Trait word with the letter it stands for highlighted as `[X]`,
/// e.g. `i[N]tuitive` or `[C]onsidered (judging)`.
pub fn highlight_word(letter: Letter, word: &str) -> String {
    let key = match letter {
        Letter::J => 'C',
        Letter::P => 'M',
        other => other.as_char(),
    };
    let mut out = String::with_capacity(word.len() + 2);
    let mut done = false;
    for c in word.chars() {
        if !done && c == key {
            out.push('[');
            out.push(c);
            out.push(']');
            done = true;
        } else {
            out.push(c);
        }
    }
    if let Some(s) = suffix(letter) {
        out.push_str(&format!(" ({})", s));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_key_brackets_only_j_and_p() {
        let code: TypeCode = "INFP".parse().unwrap();
        assert_eq!(type_key(&code), "INFM(P)");
        let code: TypeCode = "ESTJ".parse().unwrap();
        assert_eq!(type_key(&code), "ESTC(J)");
        assert_eq!(code.to_string(), "ESTJ");
    }

    #[test]
    fn display_key_parses_back() {
        for code in TypeCode::all() {
            assert_eq!(parse_type_key(&type_key(&code)).unwrap(), code);
        }
    }

    #[test]
    fn letters_parse_in_both_spellings() {
        assert_eq!(parse_letter("c(j)").unwrap(), Letter::J);
        assert_eq!(parse_letter("M(P)").unwrap(), Letter::P);
        assert_eq!(parse_letter(" n ").unwrap(), Letter::N);
        assert!(parse_letter("X").is_err());
        assert!(parse_letter("EI").is_err());
    }

    #[test]
    fn highlight_uses_first_uppercase_match() {
        assert_eq!(highlight_word(Letter::N, "iNtuitive"), "i[N]tuitive");
        assert_eq!(
            highlight_word(Letter::P, "iMpromptu"),
            "i[M]promptu (perceiving)"
        );
        assert_eq!(highlight_word(Letter::E, "Extroverted"), "[E]xtroverted");
    }
}
