//! Name validation and the live border cue shown while typing.

/// Minimum trimmed length, in characters, of an accepted name.
pub const MIN_NAME_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCheck {
    Valid,
    TooShort,
    InvalidCharacters,
}

impl NameCheck {
    #[inline]
    pub fn is_valid(self) -> bool {
        self == NameCheck::Valid
    }
}

/// Accepts letters (ASCII) and whitespace only, at least [`MIN_NAME_LEN`]
/// characters once surrounding whitespace is trimmed.
pub fn check_name(raw: &str) -> NameCheck {
    let name = raw.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return NameCheck::TooShort;
    }
    if name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        NameCheck::Valid
    } else {
        NameCheck::InvalidCharacters
    }
}

pub fn is_valid_name(raw: &str) -> bool {
    check_name(raw).is_valid()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderCue {
    Neutral,
    TooShort,
    Valid,
}

impl BorderCue {
    /// Cue for the current input value. Only length matters here; character
    /// checks happen on submit.
    pub fn for_input(raw: &str) -> Self {
        match raw.trim().chars().count() {
            0 => BorderCue::Neutral,
            n if n < MIN_NAME_LEN => BorderCue::TooShort,
            _ => BorderCue::Valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_and_spaces() {
        assert!(is_valid_name("Al"));
        assert!(is_valid_name("  Ada Lovelace  "));
        assert!(is_valid_name("Jean\tLuc"));
    }

    #[test]
    fn rejects_short_names() {
        assert_eq!(check_name(""), NameCheck::TooShort);
        assert_eq!(check_name("   "), NameCheck::TooShort);
        assert_eq!(check_name("A"), NameCheck::TooShort);
        assert_eq!(check_name(" B "), NameCheck::TooShort);
    }

    #[test]
    fn rejects_digits_and_punctuation() {
        assert_eq!(check_name("R2D2"), NameCheck::InvalidCharacters);
        assert_eq!(check_name("O'Brien"), NameCheck::InvalidCharacters);
        assert_eq!(check_name("Anne-Marie"), NameCheck::InvalidCharacters);
        assert_eq!(check_name("José"), NameCheck::InvalidCharacters);
    }

    #[test]
    fn border_cue_tracks_length() {
        assert_eq!(BorderCue::for_input(""), BorderCue::Neutral);
        assert_eq!(BorderCue::for_input("a"), BorderCue::TooShort);
        assert_eq!(BorderCue::for_input("ab"), BorderCue::Valid);
        assert_eq!(BorderCue::for_input("a1"), BorderCue::Valid);
    }
}
