//! Version resolution from build metadata.
//!
//! The displayed version follows one of these shapes:
//!
//! - no build metadata: `unknown`
//! - released build: `<main-version>`
//! - development build: `dev-<YYMMDDhhmmss>-<revision[:12]>`
//!
//! Either of the last two gains a ` (modified)` suffix when the working tree
//! was dirty at build time.

use crate::build_info::{
    BuildInfo, BuildMetadata, DEVEL_VERSION, UNKNOWN, VCS_MODIFIED, VCS_REVISION, VCS_TIME,
};
use chrono::{DateTime, FixedOffset};

/// Compact timestamp layout used in development versions.
const TIMESTAMP_FORMAT: &str = "%y%m%d%H%M%S";

/// Number of revision characters kept in development versions.
const REVISION_PREFIX_LEN: usize = 12;

const MODIFIED_SUFFIX: &str = " (modified)";

/// Strict RFC3339: an uppercase `T` separator and an uppercase `Z` for UTC.
///
/// chrono alone also takes a space or lowercase `t`/`z`.
fn parse_commit_time(value: &str) -> Option<DateTime<FixedOffset>> {
    if value.as_bytes().get(10) != Some(&b'T') || value.ends_with('z') {
        return None;
    }
    DateTime::parse_from_rfc3339(value).ok()
}

/// Resolve the display version and commit hash from optional build metadata.
pub fn resolve(metadata: Option<&BuildMetadata>) -> BuildInfo {
    let Some(metadata) = metadata else {
        tracing::debug!("no build metadata available");
        return BuildInfo::default();
    };

    let mut modified = false;
    let mut revision: Option<&str> = None;
    let mut timestamp = UNKNOWN.to_string();

    // Single forward pass: a later duplicate key overwrites an earlier one.
    for setting in &metadata.settings {
        match setting.key.as_str() {
            VCS_MODIFIED => modified = setting.value == "true",
            VCS_REVISION => revision = Some(setting.value.as_str()),
            VCS_TIME => match parse_commit_time(&setting.value) {
                Some(t) => timestamp = t.format(TIMESTAMP_FORMAT).to_string(),
                None => tracing::debug!(value = %setting.value, "unparsable vcs.time"),
            },
            _ => {}
        }
    }

    let mut version = metadata.main_version.clone();
    if version.is_empty() {
        version = UNKNOWN.to_string();
    } else if version == DEVEL_VERSION {
        let short: String = revision.unwrap_or("").chars().take(REVISION_PREFIX_LEN).collect();
        version = format!("dev-{}-{}", timestamp, short);
    }
    if modified {
        version.push_str(MODIFIED_SUFFIX);
    }

    tracing::debug!(%version, "resolved version");

    BuildInfo {
        version,
        git_commit: revision.unwrap_or(UNKNOWN).to_string(),
    }
}

/// Resolve only the display version string.
pub fn resolve_version(metadata: Option<&BuildMetadata>) -> String {
    resolve(metadata).version
}
