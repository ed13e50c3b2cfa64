use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

use crate::domain::model::Gender;

/// Date formats tried in fixed priority order. The two-digit-year format sits
/// ahead of the four-digit one, so matching must stay strict and full-string:
/// a trailing unconsumed digit fails the candidate instead of truncating it.
const DATE_FORMATS: [&str; 3] = ["%d/%m/%y", "%d/%m/%Y", "%B %d %Y"];

/// Time formats tried per date format, most specific first. Seconds default to
/// zero when the matched format lacks them.
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M", "%I:%M %p"];

fn zip_junk() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[\s"]+"#).unwrap())
}

/// Some sources wrap values in literal quote characters.
fn strip_quotes(s: &str) -> String {
    s.replace('"', "")
}

/// Firstname rule: upper-case the first character, leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let cleaned = strip_quotes(s);
    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lastname rule: title-case every whitespace-delimited word.
pub fn title_case(s: &str) -> String {
    strip_quotes(s)
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Deletes every whitespace and quote character from a zip code.
pub fn clean_zipcode(s: &str) -> String {
    zip_junk().replace_all(s, "").into_owned()
}

/// Folds the gender encodings seen across the source tables into two values.
/// The match is exact and case-sensitive; every other token lands on `F`.
pub fn unify_gender(s: &str) -> Gender {
    match s {
        "m" | "mr" | "male" => Gender::M,
        _ => Gender::F,
    }
}

/// Multi-format date parser. The first format that parses the full cleaned
/// string wins; no match folds to `None`, never an error.
pub fn parse_date(s: &str) -> Option<String> {
    let cleaned = strip_quotes(s);
    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(&cleaned, format)
            .ok()
            .map(|date| date.format("%Y-%m-%d").to_string())
    })
}

/// Multi-format date-time parser. Tries the cross product of date formats
/// (outer) and time formats (inner), joined by a single space, stopping at the
/// first combination that parses the full cleaned string.
pub fn parse_date_time(s: &str) -> Option<String> {
    let cleaned = strip_quotes(s);
    for date_format in DATE_FORMATS {
        for time_format in TIME_FORMATS {
            let format = format!("{date_format} {time_format}");
            if let Ok(parsed) = NaiveDateTime::parse_from_str(&cleaned, &format) {
                return Some(parsed.format("%Y-%m-%d %H:%M:%S").to_string());
            }
        }
    }
    None
}
