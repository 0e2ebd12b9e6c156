use crate::error::{Error, Result};

/// A package description split into synopsis and extended text.
///
/// The extended text is re-flowed from the continuation lines of the
/// `Description` field:
///
/// - a line consisting of a single space and a full stop (` .`) is a
///   paragraph break,
/// - a line starting with two or more spaces is kept verbatim on a line of
///   its own,
/// - other lines are joined with single spaces into word-wrapped paragraphs.
///
/// See [Debian Policy 5.6.13](https://www.debian.org/doc/debian-policy/ch-controlfields.html#description).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    /// Single line summary following `Description:`.
    pub synopsis: String,
    /// Re-flowed extended description, may be empty.
    pub description: String,
}

impl Description {
    /// Build a description from the raw lines of a `Description` field.
    ///
    /// The first line is the synopsis, the remaining lines are continuation
    /// lines still carrying their leading space.
    ///
    /// # Examples
    ///
    /// ```
    /// use dpkg_status::Description;
    ///
    /// let d = Description::from_lines(&[
    ///     " Linux Standard Base version reporting utility",
    ///     " The Linux Standard Base is a standard",
    ///     " core system.",
    ///     " .",
    ///     "  lsb_release -a",
    /// ]).unwrap();
    /// assert_eq!(d.synopsis, "Linux Standard Base version reporting utility");
    /// assert_eq!(d.description, "The Linux Standard Base is a standard core system.\n\nlsb_release -a");
    /// ```
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Description> {
        let (first, rest) = lines.split_first().ok_or(Error::EmptyDescription)?;
        let synopsis = first.as_ref().trim().to_string();
        let description = reflow(rest.iter().map(AsRef::as_ref));

        if synopsis.is_empty() && description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        Ok(Description {
            synopsis,
            description,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Last {
    Nothing,
    Text,
    Break,
}

fn reflow<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    let mut last = Last::Nothing;

    for line in lines {
        if line.trim_end() == " ." {
            if last != Last::Nothing {
                while !out.ends_with("\n\n") {
                    out.push('\n');
                }
                last = Last::Break;
            }
        } else if line.starts_with("  ") {
            if last == Last::Text {
                out.push('\n');
            }
            out.push_str(line.trim_start().trim_end());
            out.push('\n');
            last = Last::Break;
        } else {
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            if last == Last::Text {
                out.push(' ');
            }
            out.push_str(text);
            last = Last::Text;
        }
    }

    out.truncate(out.trim_end_matches('\n').len());
    out
}
