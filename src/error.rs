use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures while locating or interpreting the `gh` host configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to determine home directory")]
    HomeDir,

    #[error("reading hosts config {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing hosts config {path}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Exactly one authenticated host is supported.
    #[error("expected exactly one host in {path}, found {count}")]
    HostCount { path: Utf8PathBuf, count: usize },

    #[error("non-github host `{host}` in {path}")]
    NonGithubHost { path: Utf8PathBuf, host: String },

    #[error("invalid repository name `{id}`: use only letters, digits, `.`, `-` and `_`")]
    InvalidIdentifier { id: String },
}

/// Failure of a single external command in the bootstrap plan.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("executing `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Rendered as `<status>: <command>: <combined output>`.
    #[error("{}: {}: {}", describe_exit(.code), .command, .output)]
    Failed {
        command: String,
        code: Option<i32>,
        output: String,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_owned(),
    }
}
