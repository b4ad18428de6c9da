//! Build script for git-bug.
//!
//! Captures build provenance (main version, VCS revision, commit time and
//! working tree state) so the binary can report where it came from.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .env("TZ", "UTC0")
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
}

fn main() {
    let pkg_version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let revision = git(&["rev-parse", "HEAD"]);

    let main_version = match std::env::var("GIT_BUG_VERSION") {
        Ok(v) if !v.is_empty() => v,
        _ => match &revision {
            // No checkout: treat the package version as released.
            None => pkg_version.clone(),
            Some(_) => {
                let tag = format!("v{}", pkg_version);
                match git(&["describe", "--tags", "--exact-match", "HEAD"]) {
                    Some(found) if found == tag => pkg_version.clone(),
                    _ => "(devel)".to_string(),
                }
            }
        },
    };
    println!("cargo:rustc-env=GIT_BUG_MAIN_VERSION={}", main_version);

    if let Some(revision) = revision {
        println!("cargo:rustc-env=GIT_BUG_VCS_REVISION={}", revision);

        if let Some(time) = git(&[
            "log",
            "-1",
            "--format=%cd",
            "--date=format-local:%Y-%m-%dT%H:%M:%SZ",
        ]) {
            println!("cargo:rustc-env=GIT_BUG_VCS_TIME={}", time);
        }

        if let Some(status) = git(&["status", "--porcelain"]) {
            println!("cargo:rustc-env=GIT_BUG_VCS_MODIFIED={}", !status.is_empty());
        }
    }

    // rustc version for `git-bug version --all`
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    if let Some(version) = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
    {
        println!("cargo:rustc-env=GIT_BUG_RUSTC_VERSION={}", version.trim());
    }

    println!("cargo:rerun-if-env-changed=GIT_BUG_VERSION");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
    println!("cargo:rerun-if-changed=.git/index");
}
