//! Build provenance for the running binary.
//!
//! `build.rs` embeds the main version and VCS state at compile time. This
//! module reads them back as [`BuildMetadata`], and defines [`BuildInfo`],
//! the resolved value the commands display.
//!
//! Absence of metadata is a normal outcome (for example when the crate is
//! compiled without its build script) and is reported as `None`, never as
//! an error.

/// Sentinel main version used when no released version could be determined.
pub const DEVEL_VERSION: &str = "(devel)";

/// Fallback used for any piece of provenance that is not known.
pub const UNKNOWN: &str = "unknown";

/// Setting key: whether the working tree had uncommitted changes.
pub const VCS_MODIFIED: &str = "vcs.modified";

/// Setting key: full commit hash of the build.
pub const VCS_REVISION: &str = "vcs.revision";

/// Setting key: commit time, RFC3339.
pub const VCS_TIME: &str = "vcs.time";

/// One key/value pair of build settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSetting {
    pub key: String,
    pub value: String,
}

impl BuildSetting {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Provenance embedded in the binary at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    /// Version of the main module, or [`DEVEL_VERSION`].
    pub main_version: String,
    /// Build settings in the order they were recorded.
    pub settings: Vec<BuildSetting>,
}

impl BuildMetadata {
    pub fn new(main_version: impl Into<String>) -> Self {
        Self {
            main_version: main_version.into(),
            settings: Vec::new(),
        }
    }

    /// Append a setting. Duplicate keys are kept; readers take the last one.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.push(BuildSetting::new(key, value));
        self
    }

    fn last(&self, key: &str) -> Option<&str> {
        self.settings
            .iter()
            .rev()
            .find(|s| s.key == key)
            .map(|s| s.value.as_str())
    }

    /// Commit hash, `"unknown"` when not recorded.
    pub fn vcs_revision(&self) -> &str {
        self.last(VCS_REVISION).unwrap_or(UNKNOWN)
    }

    /// Whether the working tree was dirty at build time.
    pub fn vcs_modified(&self) -> bool {
        self.last(VCS_MODIFIED) == Some("true")
    }

    /// Raw commit timestamp, if recorded.
    pub fn vcs_time(&self) -> Option<&str> {
        self.last(VCS_TIME)
    }
}

/// Read the provenance embedded by the build script.
///
/// Returns `None` when the binary carries no build metadata.
pub fn read_build_metadata() -> Option<BuildMetadata> {
    let main_version = option_env!("GIT_BUG_MAIN_VERSION")?;

    let mut metadata = BuildMetadata::new(main_version);
    if let Some(revision) = option_env!("GIT_BUG_VCS_REVISION") {
        metadata = metadata.with_setting(VCS_REVISION, revision);
    }
    if let Some(time) = option_env!("GIT_BUG_VCS_TIME") {
        metadata = metadata.with_setting(VCS_TIME, time);
    }
    if let Some(modified) = option_env!("GIT_BUG_VCS_MODIFIED") {
        metadata = metadata.with_setting(VCS_MODIFIED, modified);
    }

    Some(metadata)
}

/// Version of the compiler that built this binary, when known.
pub fn rustc_version() -> &'static str {
    option_env!("GIT_BUG_RUSTC_VERSION").unwrap_or(UNKNOWN)
}

/// Resolved, displayable build information.
///
/// Computed by the root command's pre-run hook and handed to commands
/// through the execution environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    /// Human-readable version string. Never empty.
    pub version: String,
    /// Full commit hash the binary was built from.
    pub git_commit: String,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: UNKNOWN.to_string(),
            git_commit: UNKNOWN.to_string(),
        }
    }
}
