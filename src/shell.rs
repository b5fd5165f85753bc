use crate::error::{GrowlError, Result};

/// The shell command lines are handed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shell {
    /// `cmd /C`
    Cmd,
    /// `bash -c`
    Bash,
    /// A shell string from growl.yaml, already split into program and args
    Custom { program: String, args: Vec<String> },
}

impl Shell {
    /// Pick the configured shell, or the host default when none is set
    pub fn resolve(configured: Option<&str>) -> Result<Self> {
        match configured.map(str::trim) {
            Some(shell) if !shell.is_empty() => Self::parse(shell),
            _ => Ok(Self::host_default()),
        }
    }

    pub fn host_default() -> Self {
        if cfg!(windows) {
            Shell::Cmd
        } else {
            Shell::Bash
        }
    }

    /// Split a shell string such as "zsh -c" on whitespace
    pub fn parse(shell: &str) -> Result<Self> {
        let mut parts = shell.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(GrowlError::EmptyShell)?;
        Ok(Shell::Custom {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        match self {
            Shell::Cmd => "cmd",
            Shell::Bash => "bash",
            Shell::Custom { program, .. } => program,
        }
    }

    /// Whether this is cmd.exe, which must receive the command line unquoted
    pub fn is_cmd(&self) -> bool {
        match self {
            Shell::Cmd => true,
            Shell::Bash => false,
            Shell::Custom { program, .. } => {
                let name = program.rsplit(['/', '\\']).next().unwrap_or(program);
                name.eq_ignore_ascii_case("cmd") || name.eq_ignore_ascii_case("cmd.exe")
            }
        }
    }

    /// Arguments placed before the command line
    pub fn args(&self) -> Vec<String> {
        match self {
            Shell::Cmd => vec!["/C".to_string()],
            Shell::Bash => vec!["-c".to_string()],
            Shell::Custom { args, .. } => args.clone(),
        }
    }
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program())?;
        for arg in self.args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_shell_wins() {
        let shell = Shell::resolve(Some("zsh -e -c")).unwrap();
        assert_eq!(shell.program(), "zsh");
        assert_eq!(shell.args(), vec!["-e", "-c"]);
        assert_eq!(shell.to_string(), "zsh -e -c");
    }

    #[test]
    fn blank_shell_falls_back_to_host() {
        assert_eq!(Shell::resolve(None).unwrap(), Shell::host_default());
        assert_eq!(Shell::resolve(Some("   ")).unwrap(), Shell::host_default());
    }

    #[test]
    fn host_default_matches_platform() {
        if cfg!(windows) {
            assert_eq!(Shell::host_default().to_string(), "cmd /C");
        } else {
            assert_eq!(Shell::host_default().to_string(), "bash -c");
        }
    }

    #[test]
    fn recognizes_cmd() {
        assert!(Shell::Cmd.is_cmd());
        assert!(!Shell::Bash.is_cmd());
        assert!(Shell::parse("CMD.EXE /C").unwrap().is_cmd());
        assert!(Shell::parse(r"C:\Windows\System32\cmd.exe /C").unwrap().is_cmd());
        assert!(!Shell::parse("pwsh -Command").unwrap().is_cmd());
    }

    #[test]
    fn parse_rejects_empty_string() {
        assert!(matches!(Shell::parse(""), Err(GrowlError::EmptyShell)));
    }
}
