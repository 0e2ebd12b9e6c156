use crate::dependency::Dependency;
use crate::description::Description;
use crate::error::{Error, Result};
use crate::field::{Field, FieldValue};
use crate::package_name::PackageName;
use crate::util::{find_duplicates, is_blank};

/// One package record of a status file, before cross-referencing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Value of the `Package` field.
    pub name: PackageName,
    /// Value of the `Description` field.
    pub description: Description,
    /// Value of the `Depends` field, empty when absent.
    pub depends: Vec<Dependency>,
}

impl Paragraph {
    /// Parse the text of a single paragraph.
    ///
    /// Fails on the first malformed field, on repeated field names and when
    /// `Package` or `Description` is missing. A blank `Description` (no
    /// synopsis and no extended text) is [`Error::EmptyDescription`] and so
    /// fails the whole status file. Fields other than `Package`,
    /// `Description` and `Depends` are parsed but not retained.
    ///
    /// # Examples
    ///
    /// ```
    /// use dpkg_status::Paragraph;
    ///
    /// let input = "\
    /// Package: lsb-release
    /// Depends: python2.7, python (>= 2.7.1-0ubuntu2)
    /// Description: Linux Standard Base version reporting utility
    /// ";
    /// let paragraph = Paragraph::parse(input).unwrap();
    /// assert_eq!(paragraph.name.as_str(), "lsb-release");
    /// assert_eq!(paragraph.depends.len(), 2);
    /// ```
    pub fn parse(text: &str) -> Result<Paragraph> {
        let mut rest = text;
        let mut fields = Vec::new();
        while !is_blank(rest) {
            fields.push(Field::parse(&mut rest)?);
        }

        let duplicates = find_duplicates(&fields, |f| f.name.as_str());
        if !duplicates.is_empty() {
            return Err(Error::DuplicateFields(
                duplicates.into_iter().map(str::to_string).collect(),
            ));
        }

        let mut name = None;
        let mut description = None;
        let mut depends = Vec::new();
        for field in fields {
            match field.value {
                FieldValue::Package(value) => name = Some(value),
                FieldValue::Description(value) => description = Some(value),
                FieldValue::Depends(value) => depends = value,
                FieldValue::Text(_) => {}
            }
        }

        let name = name.ok_or_else(|| Error::MissingField("Package".to_string()))?;
        let description =
            description.ok_or_else(|| Error::MissingField("Description".to_string()))?;

        Ok(Paragraph {
            name,
            description,
            depends,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIBWS: &str = "\
Package: libws-commons-util-java
Status: install ok installed
Priority: optional
Section: java
Installed-Size: 101
Maintainer: Ubuntu Developers <ubuntu-devel-discuss@lists.ubuntu.com>
Architecture: all
Version: 1.0.1-7
Description: Common utilities from the Apache Web Services Project
 This is a small collection of utility classes, that allow high
 performance XML processing based on SAX.
Original-Maintainer: Debian Java Maintainers <pkg-java-maintainers@lists.alioth.debian.org>
Homepage: http://ws.apache.org/commons/util/
Conffiles:
 /etc/modprobe.d/blacklist-ath_pci.conf d1da9bb08c2b0f56f3be93fd0e37946b
 /etc/modprobe.d/blacklist-firewire.conf 9cc07a17e8e64f9cd35ff59c29debe69
 /etc/modprobe.d/blacklist-framebuffer.conf 96f2f501cc646b598263693c8976ddd1";

    #[test]
    fn parse_full_paragraph() {
        let p = Paragraph::parse(LIBWS).unwrap();
        assert_eq!(p.name, "libws-commons-util-java");
        assert_eq!(
            p.description.synopsis,
            "Common utilities from the Apache Web Services Project"
        );
        assert_eq!(
            p.description.description,
            "This is a small collection of utility classes, that allow high \
             performance XML processing based on SAX."
        );
        assert!(p.depends.is_empty());
    }

    #[test]
    fn duplicate_keys() {
        let input = "\
Package: libws-commons-util-java
Description: Common utilities from the Apache Web Services Project
 This is a small collection of utility classes, that allow high
 performance XML processing based on SAX.
Package: duplicate-key";
        let err = Paragraph::parse(input).unwrap_err();
        assert!(matches!(err, Error::DuplicateFields(ref keys) if keys == &["Package"]));
        assert_eq!(err.to_string(), "duplicate keys found: Package");
    }

    #[test]
    fn several_duplicate_keys() {
        let input = "\
Version: 1
Package: foo
Version: 2
Description: x
Package: foo";
        let err = Paragraph::parse(input).unwrap_err();
        assert_eq!(err.to_string(), "duplicate keys found: Version, Package");
    }

    #[test]
    fn missing_package() {
        let input = "Version: 1.0\nDescription: something\n";
        let err = Paragraph::parse(input).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref f) if f == "Package"));
    }

    #[test]
    fn missing_description() {
        let input = "Package: foo\nVersion: 1.0\n";
        let err = Paragraph::parse(input).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref f) if f == "Description"));
    }

    #[test]
    fn blank_description() {
        let input = "Package: foo\nDescription:\nVersion: 1.0\n";
        let err = Paragraph::parse(input).unwrap_err();
        assert!(matches!(err, Error::EmptyDescription));
    }

    #[test]
    fn field_error_short_circuits() {
        let input = "Package: foo\n#Comment: nope\nDescription: x\n";
        let err = Paragraph::parse(input).unwrap_err();
        assert!(matches!(err, Error::InvalidFieldName(ref n) if n == "#Comment"));
    }

    #[test]
    fn depends_kept() {
        let input = "\
Package: lsb-release
Depends: python2.7, python (>= 2.7.1-0ubuntu2), python (<< 2.8)
Description: Linux Standard Base version reporting utility
";
        let p = Paragraph::parse(input).unwrap();
        let names: Vec<&str> = p.depends.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["python", "python2.7"]);
    }

    #[test]
    fn trailing_blank_lines() {
        let input = "Package: foo\nDescription: bar\n\n  \n";
        let p = Paragraph::parse(input).unwrap();
        assert_eq!(p.description.synopsis, "bar");
    }
}
