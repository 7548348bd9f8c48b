//! Configuration for frxdocs.
//!
//! A site is described by `frxdocs.toml`:
//!
//! ```toml
//! [site]
//! name = "frx"
//! repository = "${FRX_REPOSITORY:-https://github.com/crazyfrankie/frx}"
//!
//! [content]
//! dir = "content"
//! output = "data/docs.json"
//!
//! [[versions]]
//! id = "v0.0.2"
//! latest = true
//! ```
//!
//! Relative paths resolve against the directory holding the file. When no
//! path is given, [`Config::load`] walks up from the working directory looking
//! for `frxdocs.toml` and falls back to defaults if none exists.
//!
//! `server.host` and `site.repository` accept `${VAR}` and `${VAR:-default}`.

mod expand;
mod version;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use version::{Version, VersionList};

const FILE_NAME: &str = "frxdocs.toml";
const DEFAULT_CONTENT_DIR: &str = "content";
const DEFAULT_OUTPUT: &str = "data/docs.json";

/// Values passed on the command line. Set fields win over the file.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub content_dir: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

impl CliSettings {
    fn apply_to(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.content_dir {
            config.content_resolved.dir.clone_from(dir);
        }
        if let Some(output) = &self.output_path {
            config.content_resolved.output_path.clone_from(output);
        }
    }
}

/// Resolved site configuration.
#[derive(Debug)]
pub struct Config {
    pub site: SiteConfig,
    pub server: ServerConfig,
    /// Content directory and artifact path, absolute once loaded from a file.
    pub content_resolved: ContentConfig,
    /// Published versions in file order.
    pub versions: VersionList,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults_in(Path::new("."))
    }
}

/// `[site]` table.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Project name, used in page titles and default document titles.
    pub name: String,
    /// One-line description shown on the landing page.
    pub tagline: String,
    /// Source repository URL linked from the sidebar.
    pub repository: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "frx".to_owned(),
            tagline: "Convenient Go coding encapsulation libraries".to_owned(),
            repository: None,
        }
    }
}

/// `[server]` table.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Where Markdown sources live and where the artifact is written.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Directory holding `<version>.md` files.
    pub dir: PathBuf,
    /// Path of the generated `docs.json` artifact.
    pub output_path: PathBuf,
}

/// `frxdocs.toml` as written on disk.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    site: SiteConfig,
    server: ServerConfig,
    content: FileContent,
    versions: Vec<FileVersion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileContent {
    dir: Option<String>,
    output: Option<String>,
}

/// One `[[versions]]` entry.
#[derive(Debug, Deserialize)]
struct FileVersion {
    id: String,
    label: Option<String>,
    #[serde(default)]
    latest: bool,
}

impl FileVersion {
    fn into_version(self) -> Version {
        let id = self.id.trim().to_owned();
        Version {
            label: self.label.unwrap_or_else(|| id.clone()),
            id,
            is_latest: self.latest,
        }
    }
}

impl FileConfig {
    fn resolve(self, base_dir: &Path) -> Config {
        let content_resolved = ContentConfig {
            dir: base_dir.join(self.content.dir.as_deref().unwrap_or(DEFAULT_CONTENT_DIR)),
            output_path: base_dir.join(self.content.output.as_deref().unwrap_or(DEFAULT_OUTPUT)),
        };
        Config {
            site: self.site,
            server: self.server,
            content_resolved,
            versions: VersionList::new(
                self.versions
                    .into_iter()
                    .map(FileVersion::into_version)
                    .collect(),
            ),
            config_path: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly named file does not exist.
    #[error("config file {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid frxdocs.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is not acceptable.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// A `${VAR}` reference could not be substituted.
    #[error("cannot expand {field}: {message}")]
    EnvVar { field: String, message: String },
}

impl Config {
    /// Load configuration, then apply command-line overrides.
    ///
    /// With `config_path`, that file must exist. Without it, the nearest
    /// `frxdocs.toml` in the working directory or its parents is used, and
    /// defaults rooted at the working directory apply if there is none.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => find_upwards(),
        };

        let mut config = match file {
            Some(path) => Self::read(&path)?,
            None => Self::defaults_in(&std::env::current_dir().unwrap_or_default()),
        };
        if let Some(settings) = cli_settings {
            settings.apply_to(&mut config);
        }
        Ok(config)
    }

    /// Parse TOML text, resolving relative paths against `base_dir`.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut file: FileConfig = toml::from_str(content)?;
        file.server.host = expand::expand_env(&file.server.host, "server.host")?;
        if let Some(repository) = file.site.repository.take() {
            file.site.repository = Some(expand::expand_env(&repository, "site.repository")?);
        }

        let config = file.resolve(base_dir);
        config.validate()?;
        Ok(config)
    }

    /// The version list, failing when the file declares none.
    pub fn require_versions(&self) -> Result<&VersionList, ConfigError> {
        if self.versions.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[versions]] entry is required".to_owned(),
            ));
        }
        Ok(&self.versions)
    }

    /// Check server settings and version ids.
    ///
    /// Version ids are used as file stems and URL segments, so they must be
    /// unique, non-blank and free of path separators.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(invalid("server.host must not be empty"));
        }
        if self.server.port == 0 {
            return Err(invalid("server.port must be between 1 and 65535"));
        }

        let mut seen = HashSet::new();
        for id in self.versions.ids() {
            if id.is_empty() {
                return Err(invalid("versions.id must not be empty"));
            }
            if id.contains(['/', '\\']) || id.chars().all(|c| c == '.') {
                return Err(invalid(format!(
                    "versions.id {id:?} cannot be used as a file name"
                )));
            }
            if !seen.insert(id) {
                return Err(invalid(format!("version {id:?} is listed twice")));
            }
        }
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text, path.parent().unwrap_or(Path::new(".")))?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn defaults_in(base_dir: &Path) -> Self {
        FileConfig::default().resolve(base_dir)
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation(message.into())
}

/// Nearest `frxdocs.toml` in the working directory or an ancestor.
fn find_upwards() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(FILE_NAME))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(toml: &str) -> Result<Config, ConfigError> {
        Config::from_toml_str(toml, Path::new("/project"))
    }

    #[test]
    fn test_defaults() {
        let config = Config::defaults_in(Path::new("/srv/site"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.site.name, "frx");
        assert_eq!(config.content_resolved.dir, PathBuf::from("/srv/site/content"));
        assert_eq!(
            config.content_resolved.output_path,
            PathBuf::from("/srv/site/data/docs.json")
        );
        assert!(config.versions.is_empty());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.server.port, 7979);
        assert_eq!(
            config.content_resolved.dir,
            PathBuf::from("/project/content")
        );
    }

    #[test]
    fn test_versions_keep_file_order() {
        let config = parse(
            r#"
[[versions]]
id = "v0.0.2"
label = "v0.0.2 (latest)"
latest = true

[[versions]]
id = "v0.0.1"
"#,
        )
        .unwrap();

        assert_eq!(
            config.versions.all(),
            &[
                Version {
                    id: "v0.0.2".to_owned(),
                    label: "v0.0.2 (latest)".to_owned(),
                    is_latest: true,
                },
                Version {
                    id: "v0.0.1".to_owned(),
                    label: "v0.0.1".to_owned(),
                    is_latest: false,
                },
            ]
        );
    }

    #[test]
    fn test_content_paths_resolve_against_base() {
        let config = parse(
            r#"
[content]
dir = "docs/md"
output = "src/data/docs.json"
"#,
        )
        .unwrap();
        assert_eq!(
            config.content_resolved.dir,
            PathBuf::from("/project/docs/md")
        );
        assert_eq!(
            config.content_resolved.output_path,
            PathBuf::from("/project/src/data/docs.json")
        );
    }

    #[test]
    fn test_site_table() {
        let config = parse(
            r#"
[site]
name = "frx"
tagline = "toolkits for go"
repository = "https://github.com/crazyfrankie/frx"
"#,
        )
        .unwrap();
        assert_eq!(config.site.tagline, "toolkits for go");
        assert_eq!(
            config.site.repository.as_deref(),
            Some("https://github.com/crazyfrankie/frx")
        );
    }

    #[test]
    fn test_repository_default_expansion() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FRXDOCS_TEST_REPO");
        }
        let config =
            parse("[site]\nrepository = \"${FRXDOCS_TEST_REPO:-https://example.com/frx}\"")
                .unwrap();
        assert_eq!(
            config.site.repository.as_deref(),
            Some("https://example.com/frx")
        );
    }

    #[test]
    fn test_versions_must_be_a_table_array() {
        let err = parse("versions = \"v1\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_version_without_id() {
        let err = parse("[[versions]]\nlabel = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_duplicate_version_ids() {
        let err = parse("[[versions]]\nid = \"v1\"\n[[versions]]\nid = \"v1\"").unwrap_err();
        assert!(err.to_string().contains("listed twice"), "got {err}");
    }

    #[test]
    fn test_version_id_with_separator() {
        let err = parse("[[versions]]\nid = \"../etc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_blank_version_id() {
        let err = parse("[[versions]]\nid = \"  \"").unwrap_err();
        assert!(err.to_string().contains("versions.id must not be empty"));
    }

    #[test]
    fn test_port_zero() {
        let err = parse("[server]\nport = 0").unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_blank_host() {
        let err = parse("[server]\nhost = \" \"").unwrap_err();
        assert!(err.to_string().contains("server.host"));
    }

    #[test]
    fn test_require_versions() {
        assert!(Config::defaults_in(Path::new("/srv")).require_versions().is_err());

        let config = parse("[[versions]]\nid = \"v1\"").unwrap();
        assert_eq!(config.require_versions().unwrap().len(), 1);
    }

    #[test]
    fn test_cli_settings_override() {
        let mut config = Config::defaults_in(Path::new("/srv"));
        CliSettings {
            port: Some(9000),
            output_path: Some(PathBuf::from("/out/docs.json")),
            ..Default::default()
        }
        .apply_to(&mut config);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(
            config.content_resolved.output_path,
            PathBuf::from("/out/docs.json")
        );
        assert_eq!(config.content_resolved.dir, PathBuf::from("/srv/content"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/frxdocs.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_records_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frxdocs.toml");
        std::fs::write(&path, "[[versions]]\nid = \"v1\"\nlatest = true\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.content_resolved.dir, dir.path().join("content"));
        assert_eq!(config.versions.latest().unwrap().id, "v1");
    }
}
