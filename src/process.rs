use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{GrowlError, Result};

/// Variables layered on top of the inherited environment of a child process
pub type EnvMap = BTreeMap<String, String>;

/// A subprocess to run with the parent's standard streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    /// Appended unquoted on Windows, where `cmd /C` parses its own command line
    raw_arg: Option<String>,
    env: EnvMap,
    current_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            raw_arg: None,
            env: EnvMap::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Final argument, passed through without Windows argv quoting.
    /// Elsewhere it is an ordinary argument.
    pub fn raw_arg(mut self, arg: impl Into<String>) -> Self {
        self.raw_arg = Some(arg.into());
        self
    }

    pub fn envs(mut self, env: &EnvMap) -> Self {
        self.env.extend(env.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_raw_arg(&self) -> Option<&str> {
        self.raw_arg.as_deref()
    }

    pub fn get_env(&self) -> &EnvMap {
        &self.env
    }

    /// Run to completion with stdin, stdout and stderr inherited
    pub fn status(&self) -> Result<ExitStatus> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .envs(&self.env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(raw) = &self.raw_arg {
            #[cfg(windows)]
            {
                use std::os::windows::process::CommandExt;
                cmd.raw_arg(raw);
            }
            #[cfg(not(windows))]
            cmd.arg(raw);
        }

        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        log::debug!("spawning {} {:?} {:?}", self.program, self.args, self.raw_arg);

        cmd.status().map_err(|source| GrowlError::Spawn {
            program: self.program.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_args_and_env() {
        let mut env = EnvMap::new();
        env.insert("A".to_string(), "1".to_string());

        let inv = Invocation::new("go").arg("build").args(["-o", "out"]).envs(&env);

        assert_eq!(inv.program(), "go");
        assert_eq!(inv.get_args(), &["build", "-o", "out"]);
        assert_eq!(inv.get_env().get("A").map(String::as_str), Some("1"));
    }

    #[cfg(unix)]
    #[test]
    fn raw_arg_is_an_ordinary_argument_on_unix() {
        let status = Invocation::new("sh")
            .arg("-c")
            .raw_arg(r#"test "$0" = sh"#)
            .status()
            .unwrap();
        assert!(status.success());
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let err = Invocation::new("growl-test-no-such-program").status().unwrap_err();
        assert!(matches!(err, GrowlError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn reports_exit_status() {
        let ok = Invocation::new("sh").args(["-c", "exit 0"]).status().unwrap();
        let failed = Invocation::new("sh").args(["-c", "exit 3"]).status().unwrap();

        assert!(ok.success());
        assert_eq!(failed.code(), Some(3));
    }
}
