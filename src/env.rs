//! Execution environment passed to pre-run hooks and run functions.

use crate::build_info::{BuildInfo, BuildMetadata};
use std::io::{self, Write};

/// Root command name, used in help, usage lines and generated docs.
pub const ROOT_COMMAND_NAME: &str = "git-bug";

/// Everything a command may touch outside its own arguments.
pub struct ExecEnv {
    /// Command output (help, version, listings).
    pub out: Box<dyn Write>,
    /// Error reporting.
    pub err: Box<dyn Write>,
    /// Provenance read once at process start.
    pub metadata: Option<BuildMetadata>,
    /// Filled in by the root pre-run hook.
    pub build_info: BuildInfo,
}

impl ExecEnv {
    /// Environment bound to the process's stdout and stderr.
    pub fn new(metadata: Option<BuildMetadata>) -> Self {
        Self::with_writers(metadata, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn with_writers(
        metadata: Option<BuildMetadata>,
        out: Box<dyn Write>,
        err: Box<dyn Write>,
    ) -> Self {
        Self {
            out,
            err,
            metadata,
            build_info: BuildInfo::default(),
        }
    }
}
