use crate::description::Description;
use crate::package_name::PackageName;

/// An installed package, cross-referenced with the rest of the status file.
///
/// `depends` and `dependants` are sorted by name and contain no duplicate
/// names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Package name, unique within a status file.
    pub name: PackageName,

    /// Synopsis and extended description.
    pub description: Description,

    /// Packages this package depends on.
    pub depends: Vec<Reference>,

    /// Packages that depend on this package. Never carry alternatives.
    pub dependants: Vec<Reference>,
}

impl Package {
    /// Look up a dependency by its primary name.
    pub fn find_dependency(&self, name: &str) -> Option<&Reference> {
        self.depends
            .binary_search_by(|r| r.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.depends[i])
    }

    /// `true` if no installed package depends on this one.
    pub fn is_leaf(&self) -> bool {
        self.dependants.is_empty()
    }
}

/// A dependency or dependant edge, annotated with whether the target is
/// part of the same status file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Referenced package name.
    pub name: String,
    /// Whether `name` is a package of the same status file.
    pub installed: bool,
    /// Ordered alternatives to `name`.
    pub alternatives: Vec<Alternative>,
}

/// An alternative of a [`Reference`]. Alternatives do not nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    /// Referenced package name.
    pub name: String,
    /// Whether `name` is a package of the same status file.
    pub installed: bool,
}
