//! Build orchestration: read sources, assemble documents, write the artifact.

use std::collections::HashSet;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use frxdocs_config::{Config, ConfigError, VersionList};
use frxdocs_document::{DocsBundle, Document, MAIN_SECTION_ID, NavItem, Section};
use frxdocs_renderer::HtmlRenderer;

use crate::front_matter::{FrontMatterError, split_front_matter};
use crate::split::{extract_toc, split_sections};

/// Inputs of a build.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Directory holding `<version>.md` files.
    pub content_dir: PathBuf,
    /// Path of the generated `docs.json`.
    pub output_path: PathBuf,
    /// Project name used for default document titles.
    pub site_name: String,
}

/// Error returned by the documentation builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed front-matter in {}: {source}", path.display())]
    FrontMatter {
        path: PathBuf,
        source: FrontMatterError,
    },
    #[error("Failed to serialize documentation: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of a successful [`DocsBuilder::build_and_write`].
#[derive(Debug)]
pub struct BuildSummary {
    /// Number of documents written.
    pub documents: usize,
    /// Total number of sections across all documents.
    pub sections: usize,
    /// Where the artifact was written.
    pub output_path: PathBuf,
}

/// Builds the documentation bundle for every configured version.
pub struct DocsBuilder {
    config: BuildConfig,
    versions: VersionList,
}

impl DocsBuilder {
    /// Create a builder for the given versions.
    #[must_use]
    pub fn new(config: BuildConfig, versions: VersionList) -> Self {
        Self { config, versions }
    }

    /// Create a builder from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] if no versions are configured.
    pub fn from_config(config: &Config) -> Result<Self, BuildError> {
        let versions = config.require_versions()?.clone();
        Ok(Self::new(
            BuildConfig {
                content_dir: config.content_resolved.dir.clone(),
                output_path: config.content_resolved.output_path.clone(),
                site_name: config.site.name.clone(),
            },
            versions,
        ))
    }

    /// Build configuration in use.
    #[must_use]
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build all documents in memory.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable source or malformed front-matter.
    pub fn build(&self) -> Result<DocsBundle, BuildError> {
        let mut bundle = DocsBundle::new();

        for version in self.versions.ids() {
            let path = self.config.content_dir.join(format!("{version}.md"));
            let source = std::fs::read_to_string(&path).map_err(|source| BuildError::Read {
                path: path.clone(),
                source,
            })?;

            let document = build_document(version, &source, &self.config.site_name)
                .map_err(|source| BuildError::FrontMatter { path, source })?;
            tracing::info!(
                version,
                sections = document.sections.len(),
                "Built document"
            );
            bundle.insert(document);
        }

        Ok(bundle)
    }

    /// Build all documents and atomically replace the output artifact.
    ///
    /// Nothing is written unless every document builds.
    ///
    /// # Errors
    ///
    /// Returns the first build error, or a write error.
    pub fn build_and_write(&self) -> Result<BuildSummary, BuildError> {
        let bundle = self.build()?;
        let json = to_json(&bundle)?;
        write_atomic(&self.config.output_path, json.as_bytes())?;

        let sections = self
            .versions
            .ids()
            .filter_map(|id| bundle.get(id))
            .map(|doc| doc.sections.len())
            .sum();
        tracing::info!(path = %self.config.output_path.display(), "Wrote documentation artifact");

        Ok(BuildSummary {
            documents: bundle.len(),
            sections,
            output_path: self.config.output_path.clone(),
        })
    }
}

/// Build the document for one version from its Markdown source.
///
/// # Errors
///
/// Returns an error if the front-matter is malformed.
pub fn build_document(
    version: &str,
    source: &str,
    site_name: &str,
) -> Result<Document, FrontMatterError> {
    let (front_matter, body) = split_front_matter(source)?;
    let title = front_matter
        .title
        .unwrap_or_else(|| format!("{site_name} {version}"));

    let mut renderer = HtmlRenderer::new();
    let raw_sections = split_sections(body);

    let sections: Vec<Section> = if raw_sections.is_empty() {
        tracing::debug!(version, "No level-2 headings, using whole document");
        vec![Section {
            id: MAIN_SECTION_ID.to_owned(),
            title: title.clone(),
            content: renderer.render_markdown(body).html,
            level: 1,
            toc: Vec::new(),
        }]
    } else {
        raw_sections
            .iter()
            .map(|raw| {
                let rendered = renderer.render_markdown(&raw.markdown());
                warn_duplicate_anchors(version, &raw.id, &rendered.headings);
                tracing::debug!(version, section = %raw.id, "Rendered section");
                Section {
                    id: raw.id.clone(),
                    title: raw.title.to_owned(),
                    content: rendered.html,
                    level: 2,
                    toc: extract_toc(&raw.lines),
                }
            })
            .collect()
    };

    warn_duplicate_sections(version, &sections);

    let navigation = sections
        .iter()
        .map(|section| NavItem::for_section(version, section))
        .collect();

    Ok(Document {
        title,
        version: version.to_owned(),
        sections,
        navigation,
    })
}

/// Serialize a bundle as pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(bundle: &DocsBundle) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(bundle)?;
    json.push('\n');
    Ok(json)
}

/// Write `contents` to a temporary file next to `path`, then rename it over
/// `path`.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), BuildError> {
    let write_err = |source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_err)?;

    let mut file = tempfile::NamedTempFile::new_in(parent).map_err(write_err)?;
    file.write_all(contents).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

fn warn_duplicate_sections(version: &str, sections: &[Section]) {
    let mut seen = HashSet::new();
    for section in sections {
        if !seen.insert(section.id.as_str()) {
            tracing::warn!(
                version,
                section = %section.id,
                "Duplicate section id, only the first is reachable"
            );
        }
    }
}

fn warn_duplicate_anchors(
    version: &str,
    section: &str,
    headings: &[frxdocs_renderer::HeadingEntry],
) {
    let mut seen = HashSet::new();
    for heading in headings {
        if !seen.insert(heading.id.as_str()) {
            tracing::warn!(version, section, anchor = %heading.id, "Duplicate heading anchor");
        }
    }
}
