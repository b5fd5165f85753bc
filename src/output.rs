use crossterm::style::Stylize;
use std::io::{self, Write};

use crate::config::CommandDef;
use crate::cross::{CrossOptions, KNOWN_ARCH, KNOWN_OS};

/// Print the configured commands, extra lines indented beneath each
pub fn write_commands<W: Write>(out: &mut W, commands: &[CommandDef]) -> io::Result<()> {
    writeln!(out, "{}", "Commands:".green())?;
    for cmd in commands {
        writeln!(out, "{} - {}", cmd.name.as_str().blue(), cmd.command)?;
        for line in &cmd.extra {
            writeln!(out, "    {}", line)?;
        }
    }
    Ok(())
}

/// The `cross list` catalog
pub fn write_catalog<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Available OS:".green())?;
    for os in KNOWN_OS {
        writeln!(out, "{}", os)?;
    }
    writeln!(out, "{}", "Available CPU architectures:".green())?;
    for arch in KNOWN_ARCH {
        writeln!(out, "{}", arch)?;
    }
    Ok(())
}

/// Resolved cross build flags, shown before `go build` starts
pub fn write_cross_flags<W: Write>(out: &mut W, opts: &CrossOptions) -> io::Result<()> {
    writeln!(out, "{}", "Flags:".green())?;
    for (name, value) in opts.summary() {
        writeln!(out, "{} {}", format!("- {}", name).blue(), value)?;
    }
    writeln!(out, "{}", "Building...".green())
}

pub fn print_commands(commands: &[CommandDef]) -> io::Result<()> {
    write_commands(&mut io::stdout().lock(), commands)
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrowlConfig;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lists_every_command_and_extra_line() {
        let config = GrowlConfig::from_yaml(
            "commands:\n  - name: test\n    command: go test\n    extra: [go vet]\n  - name: run\n    command: go run .\n",
        )
        .unwrap();
        let text = render(|buf| write_commands(buf, &config.commands));

        assert!(text.contains("Commands:"));
        assert!(text.contains("test"));
        assert!(text.contains(" - go test\n"));
        assert!(text.contains("    go vet\n"));
        assert!(text.contains(" - go run .\n"));
    }

    #[test]
    fn catalog_lists_os_then_arch() {
        let text = render(|buf| write_catalog(buf));
        let os = text.find("Available OS:").unwrap();
        let arch = text.find("Available CPU architectures:").unwrap();

        assert!(os < arch);
        assert!(text.contains("\nwindows\n"));
        assert!(text.ends_with("wasm\n"));
    }

    #[test]
    fn cross_flags_show_resolved_values() {
        let opts = CrossOptions {
            os: "linux".to_string(),
            arch: "amd64".to_string(),
            light: true,
            ..CrossOptions::default()
        };
        let text = render(|buf| write_cross_flags(buf, &opts));

        assert!(text.contains("- os"));
        assert!(text.contains(" linux\n"));
        assert!(text.contains(" -w -s\n"));
        assert!(text.contains(" bin/linux-amd64\n"));
        assert!(text.contains("Building..."));
    }
}
