use std::path::PathBuf;

use crate::config::{CommandDef, EnvEntry, GrowlConfig};
use crate::error::{GrowlError, Result};
use crate::process::{EnvMap, Invocation};
use crate::shell::Shell;
use crate::template;

/// Merge global and command-scoped variables; later entries win
pub fn environment(global: &[EnvEntry], scoped: &[EnvEntry]) -> EnvMap {
    global
        .iter()
        .chain(scoped)
        .map(|entry| (entry.name.clone(), entry.value.clone()))
        .collect()
}

/// Runs named commands from a loaded growl.yaml
pub struct Dispatcher<'a> {
    config: &'a GrowlConfig,
    shell: Shell,
    current_dir: Option<PathBuf>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a GrowlConfig) -> Result<Self> {
        let shell = Shell::resolve(config.shell.as_deref())?;
        log::debug!("using shell: {}", shell);

        Ok(Self {
            config,
            shell,
            current_dir: None,
        })
    }

    /// Run commands from `dir` instead of the current directory
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Look up the command named by the first argument
    pub fn lookup(&self, name: &str) -> Result<&'a CommandDef> {
        self.config
            .find_command(name)
            .ok_or_else(|| GrowlError::CommandNotFound(name.to_string()))
    }

    /// Environment a command's subprocesses see on top of the inherited one
    pub fn environment_for(&self, command: &CommandDef) -> EnvMap {
        environment(&self.config.env, &command.env)
    }

    /// Build the subprocess for one already-rendered command line
    pub fn invocation(&self, line: &str, env: &EnvMap) -> Invocation {
        let inv = Invocation::new(self.shell.program())
            .args(self.shell.args())
            .envs(env);
        let inv = if self.shell.is_cmd() {
            inv.raw_arg(line)
        } else {
            inv.arg(line)
        };

        match &self.current_dir {
            Some(dir) => inv.current_dir(dir),
            None => inv,
        }
    }

    /// Run `args[0]` with `args[1..]` as positional parameters.
    ///
    /// Lines run in declared order. Each line is checked for unresolved
    /// placeholders just before it runs, and the first failure stops the rest.
    pub fn run(&self, args: &[String]) -> Result<()> {
        let (name, params) = args
            .split_first()
            .ok_or_else(|| GrowlError::CommandNotFound(String::new()))?;

        let command = self.lookup(name)?;
        let env = self.environment_for(command);
        log::debug!("environment for '{}': {:?}", name, env);

        for line in command.lines() {
            let line = template::render(line, params)?;
            log::info!("running: {}", line);

            let status = self.invocation(&line, &env).status()?;
            if !status.success() {
                return Err(GrowlError::CommandFailed { line, status });
            }
        }

        Ok(())
    }
}
