use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use wildeast_tours::{
    BootError, ContactConfig, EmbeddedData, Site, SiteDataSource, TourCatalog,
};

/// Catalog and contact data read from disk, falling back to the copies
/// embedded from the web assets.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    pub catalog: Option<PathBuf>,
    pub contact: Option<PathBuf>,
}

fn read(path: &Path) -> Result<String, BootError> {
    fs::read_to_string(path).map_err(|source| BootError::Read {
        path: path.display().to_string(),
        source,
    })
}

impl SiteDataSource for FileSource {
    type Error = BootError;

    fn load_catalog(&self) -> Result<TourCatalog, Self::Error> {
        match &self.catalog {
            Some(path) => Ok(TourCatalog::from_json(&read(path)?)?),
            None => EmbeddedData.load_catalog(),
        }
    }

    fn load_contact(&self) -> Result<ContactConfig, Self::Error> {
        match &self.contact {
            Some(path) => Ok(ContactConfig::from_json(&read(path)?)?),
            None => EmbeddedData.load_contact(),
        }
    }
}

/// Boot the site the same way the landing page does, so configuration
/// errors surface here before any scenario runs.
pub fn load_site(source: &FileSource, recipient: Option<&str>) -> Result<Site> {
    Site::boot(source, recipient).context("invalid catalog or contact configuration")
}
