//! Parsing of the catalog's serialized `genre_list` column
//!
//! The column is written as a list literal such as `['Dramas', "Comedies"]`.
//! Plain comma-separated text (`Dramas, Comedies`) is accepted as well, so a
//! value that was already flattened by an upstream export parses to the same
//! tags. Apostrophes inside a plain tag (`Kids' TV`) are ordinary text; a
//! quote only counts as list syntax when it opens a tag. Parsing is
//! idempotent: a parsed set written back as a list literal parses to itself.

use std::collections::BTreeSet;
use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenreListError {
    #[error("list literal is missing its closing bracket")]
    Unbalanced,

    #[error("unterminated quoted tag")]
    UnterminatedString,

    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
}

const BRACKET_CHARS: [char; 4] = ['[', ']', '{', '}'];
const QUOTE_CHARS: [char; 2] = ['\'', '"'];

pub fn parse_genre_list(raw: &str) -> Result<BTreeSet<String>, GenreListError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(BTreeSet::new());
    }

    if let Some(rest) = trimmed.strip_prefix('[') {
        let body = rest.strip_suffix(']').ok_or(GenreListError::Unbalanced)?;
        return parse_literal_body(body);
    }

    parse_plain(trimmed)
}

fn parse_plain(text: &str) -> Result<BTreeSet<String>, GenreListError> {
    if let Some(c) = text.chars().find(|c| BRACKET_CHARS.contains(c)) {
        return Err(GenreListError::UnexpectedCharacter(c));
    }

    let mut tags = BTreeSet::new();
    for tag in text.split(',').map(str::trim).filter(|tag| !tag.is_empty()) {
        // A leading quote means a bracketless literal, not a plain tag
        if let Some(quote) = tag.chars().next().filter(|c| QUOTE_CHARS.contains(c)) {
            return Err(GenreListError::UnexpectedCharacter(quote));
        }
        tags.insert(tag.to_string());
    }
    Ok(tags)
}

fn parse_literal_body(body: &str) -> Result<BTreeSet<String>, GenreListError> {
    let mut tags = BTreeSet::new();
    let mut chars = body.chars().peekable();

    loop {
        skip_whitespace(&mut chars);

        let quote = match chars.next() {
            None => return Ok(tags),
            Some(q @ ('\'' | '"')) => q,
            Some(c) => return Err(GenreListError::UnexpectedCharacter(c)),
        };

        let tag = read_quoted(&mut chars, quote)?;
        let tag = tag.trim();
        if !tag.is_empty() {
            tags.insert(tag.to_string());
        }

        skip_whitespace(&mut chars);
        match chars.next() {
            None => return Ok(tags),
            Some(',') => continue,
            Some(c) => return Err(GenreListError::UnexpectedCharacter(c)),
        }
    }
}

fn read_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Result<String, GenreListError> {
    let mut tag = String::new();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => tag.push(escaped),
                None => return Err(GenreListError::UnterminatedString),
            },
            c if c == quote => return Ok(tag),
            c => tag.push(c),
        }
    }

    Err(GenreListError::UnterminatedString)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}
