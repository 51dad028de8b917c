use std::process::Command as ProcessCommand;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use crate::cli::Cli;
use crate::config::HostsConfig;
use crate::error::CommandError;
use crate::layout::Layout;
use crate::tasks::{self, CommandSpec};

/// Exit code and combined stdout/stderr of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub code: Option<i32>,
    pub output: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Seam between the bootstrap plan and the operating system.
pub trait ProcessRunner {
    fn run(&mut self, spec: &CommandSpec) -> Result<ProcessOutput, CommandError>;
}

/// Runs commands with `std::process`, blocking until each exits.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, spec: &CommandSpec) -> Result<ProcessOutput, CommandError> {
        let mut command = ProcessCommand::new(&spec.program);
        command.args(&spec.args);
        if let Some(dir) = &spec.cwd {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|source| CommandError::Spawn {
            command: format_command(&spec.argv()),
            source,
        })?;

        // stdout first, then stderr; the two streams are captured separately.
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ProcessOutput {
            code: output.status.code(),
            output: combined,
        })
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let layout = Layout::from_env()?;
    let hosts_path = layout.hosts_path();
    debug!(path = %hosts_path, "loading gh hosts config");
    let hosts = HostsConfig::load_from_path(&hosts_path)?;

    bootstrap(&layout, &hosts, &cli.id, &mut SystemRunner)
}

/// Create, clone, initialize and push repository `id` for the configured
/// GitHub user. Stops at the first failing command; nothing is undone.
pub fn bootstrap(
    layout: &Layout,
    hosts: &HostsConfig,
    id: &str,
    runner: &mut dyn ProcessRunner,
) -> Result<()> {
    tasks::validate_identifier(id)?;
    let user = hosts.github_user()?;
    info!(user, id, config = %hosts.path(), hosts = hosts.len(), "resolved github user");

    let plan = tasks::bootstrap_plan(layout, user, id);
    execute_commands(&plan, runner)?;

    println!(
        "Repository github.com/{}/{} ready at {}",
        user,
        id,
        layout.repo_dir(user, id)
    );
    Ok(())
}

fn execute_commands(commands: &[CommandSpec], runner: &mut dyn ProcessRunner) -> Result<()> {
    let total = commands.len();
    for (idx, spec) in commands.iter().enumerate() {
        let render = format_command(&spec.argv());
        println!("[{}/{}] {} :: {}", idx + 1, total, spec.label, render);
        debug!(cwd = ?spec.cwd, command = %render, "spawning");

        let start = Instant::now();
        let outcome = runner
            .run(spec)
            .with_context(|| format!("step `{}` failed", spec.label))?;

        if !outcome.success() {
            error!(step = spec.label, code = ?outcome.code, "command failed");
            let failure = CommandError::Failed {
                command: render,
                code: outcome.code,
                output: outcome.output,
            };
            return Err(
                anyhow::Error::new(failure).context(format!("step `{}` failed", spec.label))
            );
        }

        debug!(output = %outcome.output.trim_end(), "captured output");
        info!(step = spec.label, elapsed = ?start.elapsed(), "completed");
    }
    Ok(())
}

fn format_command(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            if arg.is_empty() || arg.chars().any(|c| c.is_whitespace()) {
                let escaped = arg.replace('"', "\\\"");
                format!("\"{}\"", escaped)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
