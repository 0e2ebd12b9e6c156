use std::fs;
use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::package::Package;
use crate::status::parse_status;

/// Where a [`Repository`] reads the status text from.
pub trait StatusSource {
    /// Read the full text of the status file.
    fn read(&self) -> Result<String>;
}

/// A status file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFile {
    path: PathBuf,
}

impl StatusFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StatusFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatusSource for StatusFile {
    fn read(&self) -> Result<String> {
        let text = fs::read_to_string(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "read status file");
        Ok(text)
    }
}

/// Lazily loaded, cached view of the installed packages.
///
/// The status text is read and parsed on first use. A successful result is
/// kept for the lifetime of the repository; a failed load is not cached, so
/// the next query tries again.
///
/// # Examples
///
/// ```no_run
/// use dpkg_status::Repository;
///
/// let repo = Repository::open("/var/lib/dpkg/status");
/// for package in repo.list_packages()? {
///     println!("{}", package.name);
/// }
/// match repo.find_package("lsb-release")? {
///     Some(package) => println!("{}", package.description.synopsis),
///     None => println!("not installed"),
/// }
/// # Ok::<(), dpkg_status::Error>(())
/// ```
#[derive(Debug)]
pub struct Repository<S = StatusFile> {
    source: S,
    packages: OnceCell<Vec<Package>>,
}

impl Repository<StatusFile> {
    /// Repository backed by the status file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Repository::new(StatusFile::new(path))
    }

    /// Repository backed by the status file named in `config`.
    pub fn from_config(config: &Config) -> Self {
        Repository::open(config.status_path.clone())
    }
}

impl<S: StatusSource> Repository<S> {
    pub fn new(source: S) -> Self {
        Repository {
            source,
            packages: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// All packages, sorted by name.
    pub fn list_packages(&self) -> Result<&[Package]> {
        if let Some(packages) = self.packages.get() {
            tracing::trace!("serving packages from cache");
            return Ok(packages.as_slice());
        }

        let packages = self
            .packages
            .get_or_try_init(|| self.source.read().and_then(|text| parse_status(&text)))
            .map_err(|err| {
                tracing::warn!(error = %err, "failed to load status file");
                err
            })?;

        tracing::info!(packages = packages.len(), "loaded status file");
        Ok(packages.as_slice())
    }

    /// The package named `name`, or `None` when it is not installed.
    pub fn find_package(&self, name: &str) -> Result<Option<&Package>> {
        let packages = self.list_packages()?;
        Ok(packages
            .binary_search_by(|p| p.name.as_str().cmp(name))
            .ok()
            .map(|i| &packages[i]))
    }
}
