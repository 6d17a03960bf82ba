//! Configuration file loading and writing.

use crate::config::document::ConfigDocument;
use crate::config::raptor::RaptorConfig;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Reads and writes `swissRailRaptor` configuration files.
///
/// # Examples
///
/// ```no_run
/// use raptor_config::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("raptor.yaml")).unwrap();
/// println!("{} parameter sets", config.registry().len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the YAML is invalid, or
    /// the document does not describe a valid configuration.
    pub fn load_file(path: &Path) -> Result<RaptorConfig> {
        let contents = fs::read_to_string(path)?;
        let config = Self::load_str(&contents)?;
        log::debug!(
            "Loaded {} parameter sets from {}",
            config.registry().len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse a YAML configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or the document does not
    /// describe a valid configuration.
    pub fn load_str(yaml: &str) -> Result<RaptorConfig> {
        let document = ConfigDocument::from_yaml_str(yaml)?;
        RaptorConfig::from_document(&document)
    }

    /// Write a configuration as YAML, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn write_file(config: &RaptorConfig, path: &Path) -> Result<()> {
        let yaml = config.to_document().to_yaml_string()?;
        fs::write(path, yaml)?;
        log::debug!("Wrote configuration to {}", path.display());
        Ok(())
    }
}
