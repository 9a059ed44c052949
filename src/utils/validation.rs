// Input grammars for the three free-text form fields

use regex::Regex;
use std::sync::OnceLock;

/// `C-ACRONYM`: one letter, hyphen, then a letter or digit followed by
/// letters, digits, hyphens, underscores or spaces
static CODE_ACRONYM_RE: OnceLock<Regex> = OnceLock::new();

/// `YYYY-Person`: four digits, hyphen, then a Latin-1 letter followed by
/// letters, whitespace, hyphens, periods or apostrophes
static YEAR_PERSON_RE: OnceLock<Regex> = OnceLock::new();

/// Exactly one ASCII letter
static DRIVE_RE: OnceLock<Regex> = OnceLock::new();

fn code_acronym_re() -> &'static Regex {
    CODE_ACRONYM_RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z])-([A-Za-z0-9][A-Za-z0-9\- _]*)$").expect("valid code-acronym regex")
    })
}

fn year_person_re() -> &'static Regex {
    YEAR_PERSON_RE.get_or_init(|| {
        Regex::new(r"^([0-9]{4})-([A-Za-zÀ-ÖØ-öø-ÿ][A-Za-zÀ-ÖØ-öø-ÿ\s\-\.']*)$")
            .expect("valid year-person regex")
    })
}

fn drive_re() -> &'static Regex {
    DRIVE_RE.get_or_init(|| Regex::new(r"^[A-Za-z]$").expect("valid drive regex"))
}

/// Split `A-CABCAR` into `("A", "CABCAR")`. The code is returned as typed.
pub fn parse_code_acronym(text: &str) -> Option<(&str, &str)> {
    let caps = code_acronym_re().captures(text)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Split `2026-Peter` into `("2026", "Peter")`. Trailing whitespace of the
/// person name is dropped.
pub fn parse_year_person(text: &str) -> Option<(&str, &str)> {
    let caps = year_person_re().captures(text)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str().trim()))
}

pub fn parse_drive(text: &str) -> Option<char> {
    if drive_re().is_match(text) {
        text.chars().next()
    } else {
        None
    }
}
