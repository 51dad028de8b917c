use clap::Parser;

/// Create a public GitHub repository, clone it under `~/src/github.com/<user>`,
/// initialize a Go module, register it with the Go workspace, and push an
/// initial commit.
#[derive(Parser, Debug)]
#[command(name = "mkrepo", version, about = "Bootstrap a new GitHub-hosted Go module")]
pub struct Cli {
    /// Repository name; also the clone directory and the module path suffix.
    pub id: String,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
