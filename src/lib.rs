//! Parser and dependency graph for the dpkg [status database].
//!
//! This crate reads the `status` file that Debian-family package managers
//! keep in `/var/lib/dpkg/status` and turns it into a list of installed
//! packages with their descriptions, dependencies and reverse dependencies.
//!
//! [status database]: https://man7.org/linux/man-pages/man5/deb822.5.html
//!
//! # Overview
//!
//! The file is a sequence of paragraphs separated by blank lines. Each
//! paragraph is a run of `Name: value` fields, values may continue on
//! following lines that start with a space. Parsing happens in two passes:
//!
//! 1. every paragraph is parsed on its own into a [`Paragraph`]
//!    (`Package`, `Description`, `Depends`),
//! 2. the paragraphs are sorted and cross-referenced into [`Package`]s,
//!    resolving which dependencies are installed and which packages depend
//!    on each one.
//!
//! [`Repository`] wraps this with a load-once cache.
//!
//! # Examples
//!
//! ```
//! use dpkg_status::parse_status;
//!
//! let input = "\
//! Package: libws-commons-util-java
//! Version: 1.0.1-7
//! Description: Common utilities from the Apache Web Services Project
//!  This is a small collection of utility classes, that allow high
//!  performance XML processing based on SAX.
//!
//! Package: lsb-release
//! Depends: python2.7, python (>= 2.7.1-0ubuntu2)
//! Description: Linux Standard Base version reporting utility
//! ";
//! let packages = parse_status(input).unwrap();
//! assert_eq!(packages.len(), 2);
//! assert_eq!(
//!     packages[0].description.synopsis,
//!     "Common utilities from the Apache Web Services Project"
//! );
//! assert_eq!(packages[1].depends[0].name, "python");
//! assert!(!packages[1].depends[0].installed);
//! ```

mod config;
mod dependency;
mod description;
mod error;
mod field;
mod package;
mod package_name;
mod paragraph;
mod repository;
mod status;
mod util;

// Re-export public types
pub use config::{Config, DEFAULT_STATUS_PATH, STATUS_PATH_ENV};
pub use dependency::Dependency;
pub use description::Description;
pub use error::{Error, ErrorKind, Result};
pub use field::{Field, FieldValue};
pub use package::{Alternative, Package, Reference};
pub use package_name::PackageName;
pub use paragraph::Paragraph;
pub use repository::{Repository, StatusFile, StatusSource};
pub use status::parse_status;
