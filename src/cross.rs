//! Cross compilation through `go build`.
//!
//! Target selection is done the way the Go toolchain expects it: through the
//! `GOOS`, `GOARCH` and `CGO_ENABLED` variables of the build process.

use std::env;

use crate::error::{GrowlError, Result};
use crate::process::{EnvMap, Invocation};

/// Operating systems the Go toolchain knows about
pub const KNOWN_OS: &[&str] = &[
    "aix", "android", "darwin", "dragonfly", "freebsd", "hurd", "illumos", "ios", "js", "linux",
    "nacl", "netbsd", "openbsd", "plan9", "solaris", "wasip1", "windows", "zos",
];

/// CPU architectures the Go toolchain knows about
pub const KNOWN_ARCH: &[&str] = &[
    "386", "amd64", "amd64p32", "arm", "armbe", "arm64", "arm64be", "loong64", "mips", "mipsle",
    "mips64", "mips64le", "mips64p32", "mips64p32le", "ppc", "ppc64", "ppc64le", "riscv",
    "riscv64", "s390", "s390x", "sparc", "sparc64", "wasm",
];

/// Host OS in GOOS spelling
pub fn host_os() -> String {
    go_os(env::consts::OS).to_string()
}

/// Host architecture in GOARCH spelling
pub fn host_arch() -> String {
    go_arch(env::consts::ARCH).to_string()
}

fn go_os(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

fn go_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        "powerpc" => "ppc",
        "powerpc64" => "ppc64",
        "loongarch64" => "loong64",
        "riscv64gc" => "riscv64",
        other => other,
    }
}

/// Whether the parent environment already enables cgo
pub fn cgo_from_env() -> bool {
    env::var("CGO_ENABLED").map(|v| v == "1").unwrap_or(false)
}

/// Settings for one cross build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossOptions {
    pub os: String,
    pub arch: String,
    /// Linker flags given by the user, before growl adds its own
    pub ldflags: String,
    /// Output path; `bin/<os>-<arch>` when unset
    pub out: Option<String>,
    pub static_link: bool,
    /// Strip symbol tables and DWARF (`-w -s`)
    pub light: bool,
    pub cgo: bool,
    /// Windows GUI subsystem (`-H=windowsgui`)
    pub noconsole: bool,
    /// Extra arguments passed through to `go build`
    pub args: Vec<String>,
}

impl Default for CrossOptions {
    fn default() -> Self {
        Self {
            os: host_os(),
            arch: host_arch(),
            ldflags: String::new(),
            out: None,
            static_link: false,
            light: false,
            cgo: cgo_from_env(),
            noconsole: false,
            args: Vec::new(),
        }
    }
}

impl CrossOptions {
    /// Final `-ldflags` value
    pub fn link_flags(&self) -> String {
        let mut ld = self.ldflags.clone();
        if self.static_link {
            ld.push_str(" -extldflags=-static");
        }
        if self.light {
            ld.push_str(" -w -s");
        }
        if self.noconsole {
            ld.push_str(" -H=windowsgui");
        }
        ld.trim().to_string()
    }

    /// Final `-o` value
    pub fn output_path(&self) -> String {
        let mut out = match &self.out {
            Some(out) if !out.is_empty() => out.clone(),
            _ => format!("bin/{}-{}", self.os, self.arch),
        };
        if self.os == "windows" && !out.ends_with(".exe") {
            out.push_str(".exe");
        }
        out
    }

    /// Variables selecting the target for the build process
    pub fn environment(&self) -> EnvMap {
        let mut env = EnvMap::new();
        env.insert("GOOS".to_string(), self.os.clone());
        env.insert("GOARCH".to_string(), self.arch.clone());
        if self.cgo {
            env.insert("CGO_ENABLED".to_string(), "1".to_string());
        }
        env
    }

    /// The `go build` invocation for these options
    pub fn invocation(&self) -> Invocation {
        Invocation::new("go")
            .arg("build")
            .arg(format!("-ldflags={}", self.link_flags()))
            .arg(format!("-o={}", self.output_path()))
            .args(self.args.iter().cloned())
            .envs(&self.environment())
    }

    /// Human-readable summary printed before building
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("os", self.os.clone()),
            ("arch", self.arch.clone()),
            ("ldflags", self.link_flags()),
            ("cgo", self.cgo.to_string()),
            ("out", self.output_path()),
        ]
    }

    fn warn_unknown_target(&self) {
        if !KNOWN_OS.contains(&self.os.as_str()) {
            log::warn!("unknown target OS '{}' (see growl cross list)", self.os);
        }
        if !KNOWN_ARCH.contains(&self.arch.as_str()) {
            log::warn!("unknown target architecture '{}' (see growl cross list)", self.arch);
        }
    }

    /// Run `go build` for the target
    pub fn build(&self) -> Result<()> {
        self.warn_unknown_target();

        let inv = self.invocation();
        log::debug!("go {:?} with {:?}", inv.get_args(), inv.get_env());

        let status = inv.status()?;
        if !status.success() {
            return Err(GrowlError::BuildFailed(status));
        }
        Ok(())
    }
}
