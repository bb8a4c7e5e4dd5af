use super::Config;
use crate::cli::Cli;
use crate::constants::{
    DEFAULT_EXTENSIONS, DEFAULT_OUTPUT_FILE, DEFAULT_SRC_DIR,
};
use crate::errors::Result;
use crate::filtering::{ExclusionSet, ExtensionFilter};
use std::path::PathBuf;

/// A builder for creating a `Config` programmatically or from the CLI.
///
/// Unset options fall back to the CLI defaults: scan `.`, write `bundle.js`,
/// collect `js jsx ts tsx`, and skip the built-in exclusion list.
///
/// # Examples
///
/// ```
/// use srcbundle::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .src_dir("my-app")
///     .output_file("out/app.bundle.js")
///     .extensions(vec!["TS".to_string(), "tsx".to_string()])
///     .exclude_dirs(vec!["vendor".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.extensions.extensions().collect::<Vec<_>>(), vec!["ts", "tsx"]);
/// assert!(config.exclusions.names().any(|n| n == "vendor"));
/// assert!(config.exclusions.names().any(|n| n == "node_modules"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    src_dir: Option<String>,
    output_file: Option<String>,
    extensions: Option<Vec<String>>,
    exclude_dirs: Option<Vec<String>>,
    no_default_excludes: Option<bool>,
    dry_run: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new builder with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            src_dir: Some(cli.src),
            output_file: Some(cli.out),
            extensions: cli.extensions,
            exclude_dirs: cli.exclude_dirs,
            no_default_excludes: Some(cli.no_default_excludes),
            dry_run: Some(cli.dry_run),
        }
    }

    /// Sets the directory to scan.
    pub fn src_dir(mut self, path: impl Into<String>) -> Self {
        self.src_dir = Some(path.into());
        self
    }

    /// Sets the output file path.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Sets the extensions to collect. Replaces the defaults.
    pub fn extensions(mut self, exts: Vec<String>) -> Self {
        self.extensions = Some(exts);
        self
    }

    /// Adds directory names to the exclusion set.
    pub fn exclude_dirs(mut self, names: Vec<String>) -> Self {
        self.exclude_dirs = Some(names);
        self
    }

    /// Drops the built-in exclusion list.
    pub fn no_default_excludes(mut self, yes: bool) -> Self {
        self.no_default_excludes = Some(yes);
        self
    }

    /// Lists collected files instead of bundling them.
    pub fn dry_run(mut self, yes: bool) -> Self {
        self.dry_run = Some(yes);
        self
    }

    /// Validates the options and builds the `Config`.
    ///
    /// The source directory is not touched here; the collector resolves it and
    /// reports a filesystem error if it is missing.
    ///
    /// # Errors
    /// Returns `Error::Config` if an extension is empty after normalisation.
    pub fn build(self) -> Result<Config> {
        let extensions = match self.extensions {
            Some(exts) => ExtensionFilter::new(exts)?,
            None => ExtensionFilter::new(DEFAULT_EXTENSIONS)?,
        };

        let base = if self.no_default_excludes.unwrap_or(false) {
            ExclusionSet::empty()
        } else {
            ExclusionSet::default()
        };
        let exclusions = base.with_extra(self.exclude_dirs.unwrap_or_default());

        let config = Config {
            src_dir: PathBuf::from(self.src_dir.unwrap_or_else(|| DEFAULT_SRC_DIR.to_string())),
            output_file: PathBuf::from(
                self.output_file
                    .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
            ),
            extensions,
            exclusions,
            dry_run: self.dry_run.unwrap_or(false),
        };
        log::debug!("Built configuration: {:?}", config);
        Ok(config)
    }
}
