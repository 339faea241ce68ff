//! Build script to inject the schedule API base URL and git SHA at compile time.
//!
//! Environment variables (set by CI or fall back to defaults):
//! - JADWAL_BASE_URL: Schedule API base URL (falls back to VITE_BASE_URL, then the public
//!   data mirror)
//! - JADWAL_GIT_SHA: Git commit SHA (defaults to GITHUB_SHA or git rev-parse)

use std::process::Command;

const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/lakuapik/jadwalsholatorg/master/adzan";

fn main() {
    // Base URL: prefer JADWAL_BASE_URL, then the legacy VITE_BASE_URL used by the old web bundle
    let base_url = std::env::var("JADWAL_BASE_URL")
        .or_else(|_| std::env::var("VITE_BASE_URL"))
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.into());
    println!("cargo:rustc-env=JADWAL_BASE_URL={}", base_url);

    // Git SHA: prefer JADWAL_GIT_SHA, then GITHUB_SHA, then try git command
    let git_sha = std::env::var("JADWAL_GIT_SHA")
        .or_else(|_| std::env::var("GITHUB_SHA").map(|s| s.chars().take(7).collect()))
        .unwrap_or_else(|_| get_git_sha());
    println!("cargo:rustc-env=JADWAL_GIT_SHA={}", git_sha);

    println!("cargo:rerun-if-env-changed=JADWAL_BASE_URL");
    println!("cargo:rerun-if-env-changed=VITE_BASE_URL");
    println!("cargo:rerun-if-env-changed=JADWAL_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
}

fn get_git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".into())
}
