use crate::error::{Error, Result};

pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// Child slot for `a`, or `None` if it isn't a letter. Case-insensitive.
pub fn get_idx(a: char) -> Option<usize> {
    let a = a.to_ascii_lowercase();
    if a.is_ascii_lowercase() {
        Some((a as u8 - b'a') as usize)
    } else {
        None
    }
}

pub fn get_letter(idx: usize) -> char {
    ALPHABET[idx] as char
}

pub fn normalize(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Maps every character of `word` to its child slot, rejecting the whole word
/// on the first character outside a-z.
pub fn letter_indices(word: &str) -> Result<Vec<usize>> {
    word.chars()
        .map(|c| {
            get_idx(c).ok_or_else(|| Error::InvalidCharacter {
                word: word.to_string(),
                character: c,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::alphabet::{get_idx, get_letter, letter_indices};
    use crate::error::Error;

    #[test]
    fn maps_letters_both_cases() {
        assert_eq!(get_idx('a'), Some(0));
        assert_eq!(get_idx('Z'), Some(25));
        assert_eq!(get_letter(get_idx('q').unwrap()), 'q');
    }

    #[test]
    fn rejects_everything_else() {
        for c in ['{', '`', '@', '[', ' ', '1', 'é'] {
            assert_eq!(get_idx(c), None, "{:?}", c);
        }
    }

    #[test]
    fn reports_first_bad_character() {
        match letter_indices("ab-c d") {
            Err(Error::InvalidCharacter { word, character }) => {
                assert_eq!(word, "ab-c d");
                assert_eq!(character, '-');
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(letter_indices("Cab").unwrap(), vec![2, 0, 1]);
        assert!(letter_indices("").unwrap().is_empty());
    }
}
