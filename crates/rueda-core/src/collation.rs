//! Spanish collation for move names.
//!
//! A three-level comparison in the manner of the Unicode collation algorithm
//! with the Spanish tailoring:
//!
//! 1. primary: base letters, ignoring accents and case, with `ñ` as a letter
//!    of its own between `n` and `o`. Whitespace sorts before punctuation,
//!    punctuation before digits, digits before letters and letters before
//!    anything else.
//! 2. secondary: accents (`a` < `á` < `à` < `â` < `ä` ...).
//! 3. tertiary: case, lower before upper.
//!
//! Both inputs are decomposed to NFD first, so precomposed and decomposed
//! spellings of the same name compare equal. Letters outside `a`-`z` that do
//! not decompose to one fall back to code-point order at the primary level.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const WHITESPACE: u32 = 0x0100_0000;
const PUNCTUATION: u32 = 0x0200_0000;
const DIGIT: u32 = 0x0300_0000;
const LETTER: u32 = 0x0400_0000;
const OTHER: u32 = 0x0500_0000;

const COMBINING_TILDE: char = '\u{0303}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Element {
    primary: u32,
    secondary: u16,
    tertiary: u8,
}

/// Compare two strings using Spanish collation rules.
pub fn compare(a: &str, b: &str) -> Ordering {
    let ka = elements(a);
    let kb = elements(b);

    let primary = |k: &[Element]| k.iter().map(|e| e.primary).collect::<Vec<_>>();
    primary(&ka)
        .cmp(&primary(&kb))
        .then_with(|| {
            let secondary = |k: &[Element]| k.iter().map(|e| e.secondary).collect::<Vec<_>>();
            secondary(&ka).cmp(&secondary(&kb))
        })
        .then_with(|| {
            let tertiary = |k: &[Element]| k.iter().map(|e| e.tertiary).collect::<Vec<_>>();
            tertiary(&ka).cmp(&tertiary(&kb))
        })
}

fn elements(s: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::with_capacity(s.len());
    for c in s.nfd() {
        if is_combining_mark(c) {
            // A combining mark modifies the preceding element.
            if let Some(last) = out.last_mut() {
                if c == COMBINING_TILDE && last.primary == letter('n') && last.secondary == 0 {
                    // ñ is a letter of its own, not an accented n
                    last.primary += 1;
                } else {
                    last.secondary = last.secondary.max(mark_weight(c));
                }
            }
            continue;
        }
        out.push(element(c));
    }
    out
}

fn letter(base: char) -> u32 {
    LETTER + (u32::from(base) - u32::from('a')) * 2
}

fn element(c: char) -> Element {
    let tertiary = u8::from(c.is_uppercase());
    let lower = c.to_lowercase().next().unwrap_or(c);

    let primary = if lower.is_ascii_lowercase() {
        letter(lower)
    } else if c.is_whitespace() {
        WHITESPACE + u32::from(c)
    } else if c.is_ascii_digit() {
        DIGIT + (u32::from(c) - u32::from('0'))
    } else if c.is_ascii_punctuation() || is_latin_punctuation(c) {
        PUNCTUATION + u32::from(c)
    } else {
        OTHER + u32::from(lower)
    };
    Element {
        primary,
        secondary: 0,
        tertiary,
    }
}

/// Secondary weight of a combining mark. The marks used in Spanish and its
/// neighbours come first; any other mark orders by code point after them.
fn mark_weight(c: char) -> u16 {
    match c {
        '\u{0301}' => 1, // acute
        '\u{0300}' => 2, // grave
        '\u{0302}' => 3, // circumflex
        '\u{0308}' => 4, // diaeresis
        '\u{0303}' => 5, // tilde
        '\u{030A}' => 6, // ring
        '\u{0327}' => 7, // cedilla
        other => 16 + (u32::from(other) & 0x0FFF) as u16,
    }
}

fn is_latin_punctuation(c: char) -> bool {
    matches!(c, '¡' | '¿' | '«' | '»' | '–' | '—' | '‘' | '’' | '“' | '”' | '…')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = words.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare(a, b));
        v
    }

    #[test]
    fn test_enye_sorts_after_n() {
        assert_eq!(compare("nube", "ñame"), Ordering::Less);
        assert_eq!(compare("ñame", "oso"), Ordering::Less);
        assert_eq!(compare("nz", "ña"), Ordering::Less);
        assert_eq!(sorted(&["oso", "ñame", "nube"]), vec!["nube", "ñame", "oso"]);
    }

    #[test]
    fn test_accents_are_secondary() {
        assert_eq!(compare("Ángel", "Bola"), Ordering::Less);
        assert_eq!(compare("adiós", "adiosa"), Ordering::Less);
        assert_eq!(compare("adios", "adiós"), Ordering::Less);
        assert_eq!(compare("él", "ella"), Ordering::Less);
    }

    #[test]
    fn test_case_is_tertiary() {
        assert_eq!(compare("a", "A"), Ordering::Less);
        assert_eq!(compare("Abanico", "abanico doble"), Ordering::Less);
        assert_eq!(compare("dile", "Dile"), Ordering::Less);
        assert_eq!(compare("Dile", "dilo"), Ordering::Less);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(compare("Sombrero", "Sombrero"), Ordering::Equal);
        assert_eq!(compare("", ""), Ordering::Equal);
    }

    #[test]
    fn test_decomposed_accent_matches_precomposed_weight() {
        assert_eq!(compare("Vacila\u{301}la", "Vacílala"), Ordering::Less);
        assert_eq!(compare("Vacilála", "Vacila\u{301}la"), Ordering::Equal);
    }

    #[test]
    fn test_decomposed_enye_is_its_own_letter() {
        assert_eq!(compare("n\u{303}ame", "nube"), Ordering::Greater);
        assert_eq!(compare("n\u{303}ame", "ñame"), Ordering::Equal);
        assert_eq!(compare("N\u{303}ongo", "Ñongo"), Ordering::Equal);
        assert_eq!(compare("N\u{303}ongo", "Oso"), Ordering::Less);
    }

    #[test]
    fn test_other_latin_accents_fold_to_base_letter() {
        assert_eq!(compare("Ōsaka", "Zapato"), Ordering::Less);
        assert_eq!(compare("Ōsaka", "Osaka"), Ordering::Greater);
        assert_eq!(compare("Őrült", "Pareja"), Ordering::Less);
        assert_eq!(compare("Čaro", "Dama"), Ordering::Less);
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(compare("Dile que no", "Dile-que"), Ordering::Less);
        assert_eq!(compare("70", "Setenta"), Ordering::Less);
        assert_eq!(compare("¡Vacílala!", "Abanico"), Ordering::Less);
    }

    #[test]
    fn test_typical_move_names() {
        assert_eq!(
            sorted(&["Sombrero", "Enchufla", "Abanico", "Dile que no", "Adiós", "Ñoño"]),
            vec!["Abanico", "Adiós", "Dile que no", "Enchufla", "Ñoño", "Sombrero"]
        );
    }
}
