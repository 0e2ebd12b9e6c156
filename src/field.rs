//! Field level parsers.
//!
//! Every parser takes the unconsumed part of a paragraph as a `&mut &str`
//! stream, parses a value from its start and leaves the stream positioned
//! at the remainder, ready for the next parser.

use winnow::combinator::{opt, peek, preceded, repeat, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{take_till, take_until};

use crate::dependency::Dependency;
use crate::description::Description;
use crate::error::{Error, Result};
use crate::package_name::PackageName;

/// Value of a single field, typed according to the field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Any field without a dedicated grammar. Multi-line values are kept
    /// with one trimmed line per `\n`.
    Text(String),
    /// `Description`.
    Description(Description),
    /// `Depends`.
    Depends(Vec<Dependency>),
    /// `Package`.
    Package(PackageName),
}

/// A `Name: value` entry of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name, without the `:`.
    pub name: String,
    /// Parsed value.
    pub value: FieldValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Package,
    Description,
    Depends,
    Other,
}

impl FieldKind {
    fn of(name: &str) -> FieldKind {
        match name {
            "Package" => FieldKind::Package,
            "Description" => FieldKind::Description,
            "Depends" => FieldKind::Depends,
            _ => FieldKind::Other,
        }
    }
}

impl Field {
    /// Parse one field from the start of `input`, advancing it past the
    /// field and all its continuation lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use dpkg_status::{Field, FieldValue};
    ///
    /// let mut input = "Priority: optional\nSection: java\n";
    /// let field = Field::parse(&mut input).unwrap();
    /// assert_eq!(field.name, "Priority");
    /// assert_eq!(field.value, FieldValue::Text("optional".to_string()));
    /// assert_eq!(input, "Section: java\n");
    /// ```
    pub fn parse(input: &mut &str) -> Result<Field> {
        let start = *input;
        let malformed = |_: ErrMode<ContextError>| Error::MalformedField(first_line(start));

        let name = parse_name(input)?;
        let value = match FieldKind::of(name) {
            FieldKind::Package => {
                let value = simple_value.parse_next(input).map_err(malformed)?;
                FieldValue::Package(value.parse()?)
            }
            FieldKind::Description => {
                let lines = multiline_value.parse_next(input).map_err(malformed)?;
                FieldValue::Description(Description::from_lines(&lines)?)
            }
            FieldKind::Depends => {
                let value = simple_value.parse_next(input).map_err(malformed)?;
                FieldValue::Depends(Dependency::parse_list(value))
            }
            FieldKind::Other if is_continued(*input) => {
                let lines = multiline_value.parse_next(input).map_err(malformed)?;
                FieldValue::Text(
                    lines
                        .iter()
                        .map(|l| l.trim())
                        .collect::<Vec<_>>()
                        .join("\n")
                        .trim()
                        .to_string(),
                )
            }
            FieldKind::Other => {
                let value = simple_value.parse_next(input).map_err(malformed)?;
                FieldValue::Text(value.to_string())
            }
        };

        Ok(Field {
            name: name.to_string(),
            value,
        })
    }
}

/// Parse a field name up to and including the `:`.
///
/// Names are non-empty, use only printable ASCII except `:` and must not
/// start with `#` or `-`.
pub(crate) fn parse_name<'s>(input: &mut &'s str) -> Result<&'s str> {
    let start = *input;
    let name = until(':')
        .parse_next(input)
        .map_err(|_| Error::MalformedField(first_line(start)))?;

    if name.is_empty()
        || name.starts_with(['#', '-'])
        || !name.chars().all(is_field_name_char)
    {
        return Err(Error::InvalidFieldName(name.to_string()));
    }

    Ok(name)
}

fn is_field_name_char(c: char) -> bool {
    matches!(c, '\u{21}'..='\u{39}' | '\u{3b}'..='\u{7e}')
}

// Winnow parsers

/// Everything before the first `target`, consuming the `target` itself.
fn until<'s>(target: char) -> impl Parser<&'s str, &'s str, ErrMode<ContextError>> {
    terminated(take_until(0.., target), target)
}

/// One line up to `\n`, which is consumed but not returned. A stray `\r`
/// is ordinary text. A last line with no trailing newline is accepted and
/// has its trailing whitespace trimmed.
fn line<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (take_till(0.., '\n'), opt('\n'))
        .map(|(text, end): (&'s str, Option<char>)| match end {
            Some(_) => text,
            None => text.trim_end(),
        })
        .parse_next(input)
}

fn simple_value<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    line.map(str::trim).parse_next(input)
}

fn continuation_line<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded(peek(' '), line).parse_next(input)
}

/// The rest of the current line plus every following continuation line,
/// untrimmed.
fn multiline_value<'s>(input: &mut &'s str) -> ModalResult<Vec<&'s str>> {
    let first = line.parse_next(input)?;
    let continued: Vec<&'s str> = repeat(0.., continuation_line).parse_next(input)?;

    let mut lines = Vec::with_capacity(continued.len() + 1);
    lines.push(first);
    lines.extend(continued);
    Ok(lines)
}

/// Whether the line after the current one is a continuation line.
fn is_continued(input: &str) -> bool {
    let mut rest = input;
    line.parse_next(&mut rest).is_ok() && rest.starts_with(' ')
}

fn first_line(s: &str) -> String {
    s.lines().next().unwrap_or_default().trim().to_string()
}
