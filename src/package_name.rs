use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A validated binary package name.
///
/// Package names are at least two characters long, start with an
/// alphanumeric character and consist only of lowercase letters, digits
/// and `+`, `-`, `.`.
///
/// See [Debian Policy 5.6.1](https://www.debian.org/doc/debian-policy/ch-controlfields.html#source).
///
/// # Examples
///
/// ```
/// use dpkg_status::PackageName;
///
/// let name: PackageName = "libc6".parse().unwrap();
/// assert_eq!(name.as_str(), "libc6");
/// assert!("-foo".parse::<PackageName>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageName(String);

impl PackageName {
    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '-' | '.')
}

impl FromStr for PackageName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let valid_start = s
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());

        if s.len() < 2 || !valid_start || !s.chars().all(is_name_char) {
            return Err(Error::InvalidPackageName(s.to_string()));
        }

        Ok(PackageName(s.to_string()))
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PackageName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PackageName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        for s in ["lsb-release", "libstdc++6", "python2.7", "0ad", "g++"] {
            let name: PackageName = s.parse().unwrap();
            assert_eq!(name.to_string(), s);
        }
    }

    #[test]
    fn too_short() {
        assert!("a".parse::<PackageName>().is_err());
        assert!("".parse::<PackageName>().is_err());
    }

    #[test]
    fn bad_start() {
        assert!("+foo".parse::<PackageName>().is_err());
        assert!(".foo".parse::<PackageName>().is_err());
        assert!("-foo".parse::<PackageName>().is_err());
    }

    #[test]
    fn bad_chars() {
        assert!("Foo".parse::<PackageName>().is_err());
        assert!("foo_bar".parse::<PackageName>().is_err());
        assert!("foo bar".parse::<PackageName>().is_err());
        assert!("fóo".parse::<PackageName>().is_err());
    }

    #[test]
    fn error_carries_value() {
        let err = "Foo".parse::<PackageName>().unwrap_err();
        assert!(matches!(err, Error::InvalidPackageName(ref n) if n == "Foo"));
    }

    #[test]
    fn compare_with_str() {
        let name: PackageName = "apt".parse().unwrap();
        assert_eq!(name, "apt");
        assert_eq!(name.as_ref(), "apt");
    }
}
