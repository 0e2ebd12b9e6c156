use std::fmt;

use crate::util::dedup_by_key_keep_last;

/// A single clause of a `Depends` field.
///
/// `name` is the preferred package; `alternatives` are the packages listed
/// after it with `|`, in order. Version constraints are not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Primary package name.
    pub name: String,
    /// Ordered alternative package names.
    pub alternatives: Vec<String>,
}

impl Dependency {
    /// Parse the value of a `Depends` field.
    ///
    /// Clauses are separated by `,` and alternatives by `|`. Anything after
    /// the first space of a name (e.g. `(>= 2.6)`) is dropped. When the same
    /// primary name appears twice the last clause wins. The result is sorted
    /// by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use dpkg_status::Dependency;
    ///
    /// let deps = Dependency::parse_list("python (>= 2.6), default-jre-headless | java2-runtime-headless");
    /// assert_eq!(deps.len(), 2);
    /// assert_eq!(deps[0].name, "default-jre-headless");
    /// assert_eq!(deps[0].alternatives, vec!["java2-runtime-headless"]);
    /// assert_eq!(deps[1].name, "python");
    /// ```
    pub fn parse_list(input: &str) -> Vec<Dependency> {
        let clauses = input
            .split(',')
            .filter_map(Dependency::parse_clause)
            .collect::<Vec<_>>();

        let mut deps = dedup_by_key_keep_last(clauses, |d| d.name.clone());
        deps.sort_by(|a, b| a.name.cmp(&b.name));
        deps
    }

    fn parse_clause(clause: &str) -> Option<Dependency> {
        let mut names = clause.split('|').map(strip_version);
        let name = names.next().filter(|n| !n.is_empty())?;
        Some(Dependency {
            name: name.to_string(),
            alternatives: names
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

/// Drop a trailing version constraint: `python (>= 2.6)` -> `python`.
fn strip_version(s: &str) -> &str {
    s.trim().split(' ').next().unwrap_or_default()
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for alt in &self.alternatives {
            write!(f, " | {alt}")?;
        }
        Ok(())
    }
}
