use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::package::{Alternative, Package, Reference};
use crate::paragraph::Paragraph;
use crate::util::is_blank;

/// Parse a complete status file into cross-referenced packages.
///
/// Paragraphs are separated by a blank line. The result is sorted by
/// package name; every dependency is marked `installed` when the file
/// contains a package of that name, and every package lists the packages
/// depending on it as `dependants`.
///
/// Parsing is all-or-nothing: the first invalid paragraph fails the whole
/// file. Two paragraphs declaring the same package are rejected.
///
/// # Examples
///
/// ```
/// use dpkg_status::parse_status;
///
/// let input = "\
/// Package: lsb-release
/// Description: Linux Standard Base version reporting utility
///
/// Package: python-pkg-resources
/// Depends: lsb-release, python (>= 2.6)
/// Description: Package Discovery and Resource Access using pkg_resources
/// ";
/// let packages = parse_status(input).unwrap();
/// assert_eq!(packages[0].name.as_str(), "lsb-release");
/// assert_eq!(packages[0].dependants[0].name, "python-pkg-resources");
/// assert!(packages[1].depends[0].installed);
/// assert!(!packages[1].depends[1].installed);
/// ```
pub fn parse_status(input: &str) -> Result<Vec<Package>> {
    let mut paragraphs = input
        .split("\n\n")
        .map(|chunk| chunk.trim_start_matches('\n'))
        .filter(|chunk| !is_blank(chunk))
        .map(Paragraph::parse)
        .collect::<Result<Vec<_>>>()?;

    paragraphs.sort_by(|a, b| a.name.cmp(&b.name));

    if let Some(pair) = paragraphs.windows(2).find(|pair| pair[0].name == pair[1].name) {
        return Err(Error::DuplicatePackage(pair[0].name.to_string()));
    }

    let installed: HashSet<String> = paragraphs
        .iter()
        .map(|p| p.name.as_str().to_string())
        .collect();

    // Paragraphs are sorted, so every dependant list comes out sorted too.
    let mut dependants: HashMap<String, Vec<String>> = HashMap::new();
    for p in &paragraphs {
        for dep in &p.depends {
            dependants
                .entry(dep.name.clone())
                .or_default()
                .push(p.name.as_str().to_string());
        }
    }

    let reference = |name: String, alternatives: Vec<Alternative>| Reference {
        installed: installed.contains(&name),
        name,
        alternatives,
    };

    let packages: Vec<Package> = paragraphs
        .into_iter()
        .map(|p| {
            let depends = p
                .depends
                .into_iter()
                .map(|dep| {
                    let alternatives = dep
                        .alternatives
                        .into_iter()
                        .map(|name| Alternative {
                            installed: installed.contains(&name),
                            name,
                        })
                        .collect();
                    reference(dep.name, alternatives)
                })
                .collect();
            let dependants = dependants
                .remove(p.name.as_str())
                .unwrap_or_default()
                .into_iter()
                .map(|name| reference(name, Vec::new()))
                .collect();
            Package {
                name: p.name,
                description: p.description,
                depends,
                dependants,
            }
        })
        .collect();

    tracing::debug!(packages = packages.len(), "parsed status file");
    Ok(packages)
}
