use crate::error::{J16tError, J16tResult};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// One of the eight single-character trait codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Letter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Letter {
    pub const ALL: [Letter; 8] = [
        Letter::E,
        Letter::I,
        Letter::S,
        Letter::N,
        Letter::T,
        Letter::F,
        Letter::J,
        Letter::P,
    ];

    /// Dense index (0..8) in axis order, priority letter first.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn axis(self) -> Axis {
        match self {
            Letter::E | Letter::I => Axis::EI,
            Letter::S | Letter::N => Axis::SN,
            Letter::T | Letter::F => Axis::TF,
            Letter::J | Letter::P => Axis::JP,
        }
    }

    pub fn partner(self) -> Letter {
        match self {
            Letter::E => Letter::I,
            Letter::I => Letter::E,
            Letter::S => Letter::N,
            Letter::N => Letter::S,
            Letter::T => Letter::F,
            Letter::F => Letter::T,
            Letter::J => Letter::P,
            Letter::P => Letter::J,
        }
    }

    /// True for the first-listed member of the pair, which wins ties.
    pub fn is_priority(self) -> bool {
        self.index() % 2 == 0
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::E => 'E',
            Letter::I => 'I',
            Letter::S => 'S',
            Letter::N => 'N',
            Letter::T => 'T',
            Letter::F => 'F',
            Letter::J => 'J',
            Letter::P => 'P',
        }
    }

    pub fn from_char(c: char) -> Option<Letter> {
        Letter::ALL
            .into_iter()
            .find(|l| l.as_char() == c.to_ascii_uppercase())
    }
}

/// The four bipolar trait dimensions, in the fixed order used by type codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
pub enum Axis {
    #[strum(to_string = "E/I", serialize = "EI")]
    #[serde(rename = "E/I", alias = "EI")]
    EI,
    #[strum(to_string = "S/N", serialize = "SN")]
    #[serde(rename = "S/N", alias = "SN")]
    SN,
    #[strum(to_string = "T/F", serialize = "TF")]
    #[serde(rename = "T/F", alias = "TF")]
    TF,
    #[strum(to_string = "J/P", serialize = "JP")]
    #[serde(rename = "J/P", alias = "JP")]
    JP,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::EI, Axis::SN, Axis::TF, Axis::JP];

    /// Both letters of the axis, priority letter first.
    pub fn letters(self) -> [Letter; 2] {
        match self {
            Axis::EI => [Letter::E, Letter::I],
            Axis::SN => [Letter::S, Letter::N],
            Axis::TF => [Letter::T, Letter::F],
            Axis::JP => [Letter::J, Letter::P],
        }
    }

    pub fn priority(self) -> Letter {
        self.letters()[0]
    }

    pub fn contains(self, letter: Letter) -> bool {
        letter.axis() == self
    }

    /// Position of this axis inside a type code.
    pub fn position(self) -> usize {
        self as usize
    }
}

/// Dense per-letter table, indexed by `Letter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterMap<T>(pub [T; 8]);

impl<T> LetterMap<T> {
    pub fn from_fn(mut f: impl FnMut(Letter) -> T) -> Self {
        LetterMap(Letter::ALL.map(&mut f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Letter, &T)> {
        Letter::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Letter> for LetterMap<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, letter: Letter) -> &T {
        &self.0[letter.index()]
    }
}

impl<T> IndexMut<Letter> for LetterMap<T> {
    #[inline(always)]
    fn index_mut(&mut self, letter: Letter) -> &mut T {
        &mut self.0[letter.index()]
    }
}

impl<T: Serialize> Serialize for LetterMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(8))?;
        for (letter, value) in self.iter() {
            map.serialize_entry(&letter, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for LetterMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut raw: HashMap<Letter, T> = HashMap::deserialize(deserializer)?;
        let mut out = LetterMap::<T>::default();
        for letter in Letter::ALL {
            match raw.remove(&letter) {
                Some(v) => out[letter] = v,
                None => return Err(de::Error::custom(format!("missing entry for '{}'", letter))),
            }
        }
        Ok(out)
    }
}

/// Four letters, one per axis, in axis order E/I, S/N, T/F, J/P.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode(pub(crate) [Letter; 4]);

impl TypeCode {
    pub fn new(letters: [Letter; 4]) -> J16tResult<Self> {
        for (axis, &letter) in Axis::ALL.iter().zip(letters.iter()) {
            if !axis.contains(letter) {
                return Err(J16tError::Parse(format!(
                    "'{}' cannot sit in the {} position of a type code",
                    letter, axis
                )));
            }
        }
        Ok(TypeCode(letters))
    }

    pub fn letters(&self) -> [Letter; 4] {
        self.0
    }

    pub fn letter(&self, axis: Axis) -> Letter {
        self.0[axis.position()]
    }

    /// Content-lookup key, e.g. `ESTC(J)`.
    pub fn display_key(&self) -> String {
        crate::display::type_key(self)
    }

    /// Same construction using the other letter of every axis.
    pub fn converse(&self) -> TypeCode {
        TypeCode(self.0.map(Letter::partner))
    }

    /// All sixteen codes, E/I varying slowest.
    pub fn all() -> Vec<TypeCode> {
        let mut out = Vec::with_capacity(16);
        for a in Axis::EI.letters() {
            for b in Axis::SN.letters() {
                for c in Axis::TF.letters() {
                    for d in Axis::JP.letters() {
                        out.push(TypeCode([a, b, c, d]));
                    }
                }
            }
        }
        out
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{}", letter.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = J16tError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 4 {
            return Err(J16tError::Parse(format!(
                "type code '{}' must have exactly 4 letters",
                s
            )));
        }
        let mut letters = [Letter::E; 4];
        for (slot, c) in letters.iter_mut().zip(chars) {
            *slot = Letter::from_char(c)
                .ok_or_else(|| J16tError::Parse(format!("'{}' is not a trait letter", c)))?;
        }
        TypeCode::new(letters)
    }
}

impl TryFrom<String> for TypeCode {
    type Error = J16tError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partners_share_an_axis() {
        for letter in Letter::ALL {
            assert_eq!(letter.axis(), letter.partner().axis());
            assert_ne!(letter, letter.partner());
            assert_ne!(letter.is_priority(), letter.partner().is_priority());
        }
    }

    #[test]
    fn letter_order_is_dense() {
        use strum::IntoEnumIterator;
        assert!(Letter::iter().eq(Letter::ALL));
        for (i, letter) in Letter::iter().enumerate() {
            assert_eq!(letter.index(), i);
        }
        assert!(Axis::iter().eq(Axis::ALL));
    }

    #[test]
    fn type_code_rejects_misplaced_letters() {
        assert!("ESTJ".parse::<TypeCode>().is_ok());
        assert!("SETJ".parse::<TypeCode>().is_err());
        assert!("EST".parse::<TypeCode>().is_err());
    }

    #[test]
    fn letter_map_json_is_keyed_by_letter() {
        let map = LetterMap::from_fn(|l| l.index() as u32);
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.starts_with("{\"E\":0,\"I\":1"));
        let back: LetterMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
