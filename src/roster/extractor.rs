use crate::roster::roster_entry::RosterEntry;
use derive_getters::Getters;
use dto::import_report::{ReviewNote, ReviewReason};
use dto::nationality::Nationality;
use dto::title::Title;
use log::{debug, warn};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Number of lines following a title line in which missing fields are looked for.
const LOOKAHEAD_WINDOW: usize = 3;
/// Registration numbers are stored as SQLite integers.
const MAX_REGISTRATION_NUMBER: u32 = i32::MAX as u32;

static SINGLE_LINE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^(?<title>Dr|Pr) (?<name>.+) (?<number>[0-9]+) (?<nationality>Gabon|ETRANGER)$")
        .expect("valid regex")
});

/// Entries extracted from a roster, in the order they have been found,
/// along with the entries which require a human review.
#[derive(Debug, Default, Getters, PartialEq)]
pub struct Extraction {
    entries: Vec<RosterEntry>,
    review_notes: Vec<ReviewNote>,
}

impl Extraction {
    #[cfg(test)]
    pub fn into_entries(self) -> Vec<RosterEntry> {
        self.entries
    }

    pub fn into_parts(self) -> (Vec<RosterEntry>, Vec<ReviewNote>) {
        (self.entries, self.review_notes)
    }
}

#[cfg(test)]
pub fn extract_entries<S: AsRef<str>>(lines: &[S]) -> Vec<RosterEntry> {
    extract(lines).into_entries()
}

/// Extract entries from the body of a roster, header excluded.
/// Malformed entries are dropped, so this never fails.
/// Entries whose registration number is uncertain are kept along with a review note.
pub fn extract<S: AsRef<str>>(lines: &[S]) -> Extraction {
    Scanner::new(lines).run()
}

// region Lines
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Title(Title, &'a str),
    Field(Field<'a>),
}

#[derive(Debug, PartialEq)]
enum Field<'a> {
    Number(u32),
    /// Digits only, but out of the range of registration numbers.
    InvalidNumber(&'a str),
    Nationality(Nationality),
    NamePart(&'a str),
}

impl<'a> From<&'a str> for Line<'a> {
    fn from(line: &'a str) -> Self {
        if let Some((title, name)) = split_title(line) {
            Line::Title(title, name)
        } else if is_number(line) {
            match parse_registration_number(line) {
                Some(number) => Line::Field(Field::Number(number)),
                None => Line::Field(Field::InvalidNumber(line)),
            }
        } else if let Ok(nationality) = Nationality::from_str(line) {
            Line::Field(Field::Nationality(nationality))
        } else {
            Line::Field(Field::NamePart(line))
        }
    }
}

fn split_title(line: &str) -> Option<(Title, &str)> {
    Title::ALL.into_iter().find_map(|title| {
        line.strip_prefix(title.as_str())
            .and_then(|rest| rest.strip_prefix(' '))
            .map(|name| (title, name.trim()))
    })
}

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

fn parse_registration_number(value: &str) -> Option<u32> {
    if !is_number(value) {
        return None;
    }

    value
        .parse::<u32>()
        .ok()
        .filter(|number| (1..=MAX_REGISTRATION_NUMBER).contains(number))
}

/// Number ending a name, and the name without it.
/// A name made of a number only doesn't have a trailing number.
fn trailing_number(name: &str) -> Option<(u32, String)> {
    let (rest, last_token) = name.trim_end().rsplit_once(char::is_whitespace)?;
    let number = parse_registration_number(last_token)?;
    let rest = rest.trim_end();

    (!rest.is_empty()).then(|| (number, rest.to_owned()))
}

fn parse_single_line(line: &str) -> Option<RosterEntry> {
    let captures = SINGLE_LINE_ENTRY.captures(line)?;
    let title = Title::from_str(&captures["title"]).ok()?;
    let name = captures["name"].trim();
    let registration_number = parse_registration_number(&captures["number"])?;
    let nationality = Nationality::from_str(&captures["nationality"]).ok()?;
    if name.is_empty() {
        return None;
    }

    Some(RosterEntry::new(
        title,
        name.to_owned(),
        registration_number,
        nationality,
    ))
}
// endregion

// region Candidate
#[derive(Debug)]
struct Candidate {
    title: Title,
    name: String,
    registration_number: Option<u32>,
    nationality: Option<Nationality>,
    /// Whether the number comes from a line of its own.
    explicit_number: bool,
    review_reason: Option<ReviewReason>,
    title_index: usize,
    /// Lines before this index had already been read by a lookahead when the title showed up.
    readable_from: usize,
}

impl Candidate {
    fn new(title: Title, name: &str, title_index: usize, readable_from: usize) -> Self {
        Self {
            title,
            name: name.to_owned(),
            registration_number: None,
            nationality: None,
            explicit_number: false,
            review_reason: None,
            title_index,
            readable_from,
        }
    }

    fn append_to_name(&mut self, name_part: &str) {
        if !self.name.is_empty() {
            self.name.push(' ');
        }
        self.name.push_str(name_part);
    }

    fn set_explicit_number(&mut self, registration_number: u32) {
        self.registration_number = Some(registration_number);
        self.explicit_number = true;
    }

    fn is_complete(&self) -> bool {
        self.registration_number.is_some() && self.nationality.is_some()
    }

    fn into_entry(self) -> Option<(RosterEntry, Option<ReviewReason>)> {
        let registration_number = self.registration_number?;
        let nationality = self.nationality?;
        if self.name.trim().is_empty() {
            return None;
        }

        let review_reason = self.review_reason.or_else(|| {
            (self.explicit_number && trailing_number(&self.name).is_some())
                .then_some(ReviewReason::NumberFoundTwice)
        });
        let entry = RosterEntry::new(self.title, self.name, registration_number, nationality);

        Some((entry, review_reason))
    }

    fn ignore_invalid_number(&self, value: &str) {
        debug!(
            "Ignoring out of range registration number {value} [line: {}]",
            self.title_index
        );
    }
}
// endregion

// region Scanner
/// - `ExpectTitle`: lines are skipped until a title line shows up.
/// - `ResolvingName`: neither the number nor the nationality is known, name parts are accumulated.
/// - `ResolvingNumber`: the nationality is known but the number couldn't be recovered.
/// - `ResolvingNationality`: the number is known.
///
/// Each `Resolving*` state reads one line of the lookahead window at a time,
/// and the candidate is finalized as soon as it is complete, a title line shows up
/// or the window is exhausted.
#[derive(Debug)]
enum ScanState {
    ExpectTitle,
    ResolvingName(Candidate),
    ResolvingNumber(Candidate),
    ResolvingNationality(Candidate),
}

type Resolver<'a, 'b, S> = fn(&mut Scanner<'a, S>, Candidate, Field<'b>) -> ScanState;

struct Scanner<'a, S> {
    lines: &'a [S],
    cursor: usize,
    /// Lines before this index have been read by a lookahead and can't provide anything anymore.
    consumed_until: usize,
    extraction: Extraction,
}

impl<'a, S: AsRef<str>> Scanner<'a, S> {
    fn new(lines: &'a [S]) -> Self {
        Self {
            lines,
            cursor: 0,
            consumed_until: 0,
            extraction: Extraction::default(),
        }
    }

    fn run(mut self) -> Extraction {
        let mut state = ScanState::ExpectTitle;
        loop {
            state = match state {
                ScanState::ExpectTitle if self.cursor >= self.lines.len() => break,
                ScanState::ExpectTitle => self.expect_title(),
                ScanState::ResolvingName(candidate) => {
                    self.look_ahead(candidate, Self::resolve_name)
                }
                ScanState::ResolvingNumber(candidate) => {
                    self.look_ahead(candidate, Self::resolve_number)
                }
                ScanState::ResolvingNationality(candidate) => {
                    self.look_ahead(candidate, Self::resolve_nationality)
                }
            };
        }

        self.extraction
    }

    fn expect_title(&mut self) -> ScanState {
        let lines = self.lines;
        let title_index = self.cursor;
        let line = lines[title_index].as_ref();
        self.cursor += 1;

        let Line::Title(title, name) = Line::from(line) else {
            return ScanState::ExpectTitle;
        };

        if let Some(entry) = parse_single_line(line) {
            self.extraction.entries.push(entry);
            ScanState::ExpectTitle
        } else {
            ScanState::ResolvingName(Candidate::new(
                title,
                name,
                title_index,
                self.consumed_until,
            ))
        }
    }

    fn look_ahead(&mut self, candidate: Candidate, resolve: Resolver<'a, 'a, S>) -> ScanState {
        let lines = self.lines;
        let window_end = (candidate.title_index + 1 + LOOKAHEAD_WINDOW).min(lines.len());
        if self.cursor >= window_end {
            return self.finalize(candidate);
        }

        match Line::from(lines[self.cursor].as_ref()) {
            Line::Title(_, _) => self.finalize(candidate),
            Line::Field(field) => {
                self.cursor += 1;
                self.consumed_until = self.consumed_until.max(self.cursor);
                resolve(self, candidate, field)
            }
        }
    }

    fn resolve_name(&mut self, mut candidate: Candidate, field: Field) -> ScanState {
        match field {
            Field::Number(number) => {
                candidate.set_explicit_number(number);
                ScanState::ResolvingNationality(candidate)
            }
            Field::Nationality(nationality) => {
                candidate.nationality = Some(nationality);
                self.recover_number(&mut candidate);
                if candidate.is_complete() {
                    self.finalize(candidate)
                } else {
                    ScanState::ResolvingNumber(candidate)
                }
            }
            Field::NamePart(name_part) => {
                candidate.append_to_name(name_part);
                ScanState::ResolvingName(candidate)
            }
            Field::InvalidNumber(value) => {
                candidate.ignore_invalid_number(value);
                ScanState::ResolvingName(candidate)
            }
        }
    }

    fn resolve_number(&mut self, mut candidate: Candidate, field: Field) -> ScanState {
        match field {
            Field::Number(number) => {
                candidate.set_explicit_number(number);
                self.finalize(candidate)
            }
            Field::Nationality(nationality) => {
                candidate.nationality = Some(nationality);
                ScanState::ResolvingNumber(candidate)
            }
            Field::NamePart(name_part) => {
                candidate.append_to_name(name_part);
                ScanState::ResolvingNumber(candidate)
            }
            Field::InvalidNumber(value) => {
                candidate.ignore_invalid_number(value);
                ScanState::ResolvingNumber(candidate)
            }
        }
    }

    fn resolve_nationality(&mut self, mut candidate: Candidate, field: Field) -> ScanState {
        match field {
            Field::Number(number) => {
                candidate.set_explicit_number(number);
                ScanState::ResolvingNationality(candidate)
            }
            Field::Nationality(nationality) => {
                candidate.nationality = Some(nationality);
                self.finalize(candidate)
            }
            Field::NamePart(name_part) => {
                candidate.append_to_name(name_part);
                ScanState::ResolvingNationality(candidate)
            }
            Field::InvalidNumber(value) => {
                candidate.ignore_invalid_number(value);
                ScanState::ResolvingNationality(candidate)
            }
        }
    }

    /// The nationality has been found before any number line.
    /// The number is taken from the end of the name or else from the line preceding the title.
    /// A number taken from the preceding line may as well be a page number, hence a review.
    fn recover_number(&self, candidate: &mut Candidate) {
        let from_name = trailing_number(&candidate.name);
        let from_previous_line = self.number_before(candidate);

        match (from_name, from_previous_line) {
            (Some((registration_number, name)), from_previous_line) => {
                if from_previous_line.is_some() {
                    candidate.review_reason = Some(ReviewReason::ConcurrentNumberFallbacks);
                }
                candidate.registration_number = Some(registration_number);
                candidate.name = name;
            }
            (None, Some(registration_number)) => {
                candidate.review_reason = Some(ReviewReason::NumberFromPrecedingLine);
                candidate.registration_number = Some(registration_number);
            }
            (None, None) => {}
        }
    }

    fn number_before(&self, candidate: &Candidate) -> Option<u32> {
        candidate
            .title_index
            .checked_sub(1)
            .filter(|index| *index >= candidate.readable_from)
            .and_then(|index| parse_registration_number(self.lines[index].as_ref()))
    }

    fn finalize(&mut self, candidate: Candidate) -> ScanState {
        let title_index = candidate.title_index;
        match candidate.into_entry() {
            Some((entry, review_reason)) => {
                if let Some(reason) = review_reason {
                    warn!(
                        "Entry requires a review [registration number: {}, reason: {reason:?}, line: {title_index}]",
                        entry.registration_number()
                    );
                    self.extraction.review_notes.push(ReviewNote::new(
                        *entry.registration_number(),
                        reason,
                        title_index,
                    ));
                }
                self.extraction.entries.push(entry);
            }
            None => {
                debug!("Dropping incomplete entry [line: {title_index}]");
                self.cursor = title_index + 1;
            }
        }

        ScanState::ExpectTitle
    }
}
// endregion
