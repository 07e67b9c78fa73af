//! Host and platform snapshot
//!
//! Every lookup that can fail falls back to a documented default
//! (`"unknown"` or `0`) instead of failing the request.

use serde::Serialize;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Placeholder for values the host does not report
pub const UNKNOWN: &str = "unknown";

/// Host/system facts computed per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemSnapshot {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
    pub cpu_count: usize,
    /// Version of the Rust toolchain that built this binary
    pub rust_version: String,
}

impl SystemSnapshot {
    /// Query the host for a fresh snapshot
    pub fn collect() -> Self {
        let platform = platform_name(std::env::consts::OS);
        let architecture = std::env::consts::ARCH.to_string();
        let kernel = System::kernel_version();

        Self {
            hostname: hostname(System::host_name()),
            platform_version: platform_version(&platform, kernel.as_deref(), &architecture),
            platform,
            architecture,
            cpu_count: logical_cpu_count(),
            rust_version: env!("RUST_VERSION").to_string(),
        }
    }
}

/// OS family name as conventionally reported (`Linux`, `Darwin`, `Windows`)
pub fn platform_name(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        other => other.to_string(),
    }
}

/// `<platform>-<kernel release>-<arch>`, skipping an unknown kernel release
pub fn platform_version(platform: &str, kernel: Option<&str>, architecture: &str) -> String {
    match kernel.map(str::trim).filter(|k| !k.is_empty()) {
        Some(kernel) => format!("{}-{}-{}", platform, kernel, architecture),
        None => format!("{}-{}", platform, architecture),
    }
}

fn hostname(reported: Option<String>) -> String {
    reported
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Logical CPU count, `0` when the platform does not expose it
fn logical_cpu_count() -> usize {
    let sys = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
    sys.cpus().len()
}
