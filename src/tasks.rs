use std::sync::LazyLock;

use camino::Utf8PathBuf;
use regex::Regex;

use crate::error::ConfigError;
use crate::layout::{Layout, module_path};

const LICENSE: &str = "gpl-3.0";
const COMMIT_MESSAGE: &str = "Init";

static REPO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("valid repository name pattern"));

/// One external command in the bootstrap plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub label: &'static str,
    pub program: String,
    pub args: Vec<String>,
    /// `None` runs in the caller's working directory.
    pub cwd: Option<Utf8PathBuf>,
}

impl CommandSpec {
    fn new(label: &'static str, program: &str, args: &[&str]) -> Self {
        Self {
            label,
            program: program.to_owned(),
            args: args.iter().map(|arg| (*arg).to_owned()).collect(),
            cwd: None,
        }
    }

    fn in_dir(mut self, dir: Utf8PathBuf) -> Self {
        self.cwd = Some(dir);
        self
    }

    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// Reject names gh would refuse (or that would escape the clone directory)
/// before anything is created remotely.
pub fn validate_identifier(id: &str) -> Result<(), ConfigError> {
    if id == "." || id == ".." || !REPO_NAME.is_match(id) {
        return Err(ConfigError::InvalidIdentifier { id: id.to_owned() });
    }
    Ok(())
}

/// The ordered commands that create, clone, initialize and push `id`.
pub fn bootstrap_plan(layout: &Layout, user: &str, id: &str) -> Vec<CommandSpec> {
    let pkg = module_path(user, id);
    let repo_dir = layout.repo_dir(user, id);

    vec![
        CommandSpec::new(
            "create remote",
            "gh",
            &["repo", "create", id, "--public", "--license", LICENSE],
        ),
        CommandSpec::new("clone", "gh", &["repo", "clone", id]).in_dir(layout.owner_dir(user)),
        CommandSpec::new("init module", "go", &["mod", "init", pkg.as_str()])
            .in_dir(repo_dir.clone()),
        CommandSpec::new("register workspace", "go", &["work", "use", "."])
            .in_dir(repo_dir.clone()),
        CommandSpec::new("stage", "git", &["add", "--all"]).in_dir(repo_dir.clone()),
        CommandSpec::new("commit", "git", &["commit", "-m", COMMIT_MESSAGE])
            .in_dir(repo_dir.clone()),
        CommandSpec::new("push", "git", &["push"]).in_dir(repo_dir),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> Vec<CommandSpec> {
        bootstrap_plan(&Layout::new("/home/alice"), "alice", "myproj")
    }

    #[test]
    fn plan_has_seven_steps_in_order() {
        let argvs: Vec<String> = plan().iter().map(|spec| spec.argv().join(" ")).collect();
        assert_eq!(
            argvs,
            vec![
                "gh repo create myproj --public --license gpl-3.0",
                "gh repo clone myproj",
                "go mod init github.com/alice/myproj",
                "go work use .",
                "git add --all",
                "git commit -m Init",
                "git push",
            ]
        );
    }

    #[test]
    fn module_init_receives_module_path() {
        let init = &plan()[2];
        assert_eq!(init.program, "go");
        assert_eq!(init.args.last().map(String::as_str), Some("github.com/alice/myproj"));
    }

    #[test]
    fn working_directories_follow_layout() {
        let plan = plan();
        assert_eq!(plan[0].cwd, None);
        assert_eq!(
            plan[1].cwd.as_deref(),
            Some(camino::Utf8Path::new("/home/alice/src/github.com/alice"))
        );
        for spec in &plan[2..] {
            assert_eq!(
                spec.cwd.as_deref(),
                Some(camino::Utf8Path::new("/home/alice/src/github.com/alice/myproj")),
                "{}",
                spec.label
            );
        }
    }

    #[test]
    fn accepts_typical_repository_names() {
        for id in ["demo", "my-proj", "my_proj", "v2.api", ".github"] {
            assert!(validate_identifier(id).is_ok(), "{id}");
        }
    }

    #[test]
    fn rejects_names_that_are_not_plain_repository_names() {
        for id in ["", ".", "..", "a/b", "../escape", "has space", "émoji"] {
            assert!(
                matches!(
                    validate_identifier(id),
                    Err(ConfigError::InvalidIdentifier { .. })
                ),
                "{id:?}"
            );
        }
    }
}
