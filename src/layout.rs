use camino::Utf8PathBuf;

use crate::error::ConfigError;

pub const GITHUB_HOST: &str = "github.com";
const HOSTS_FILE: &str = "hosts.yml";

/// Filesystem locations derived from the user's home directory.
///
/// Clones live at `<home>/src/github.com/<user>/<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    home: Utf8PathBuf,
}

impl Layout {
    pub fn new(home: impl Into<Utf8PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDir)?;
        let home = Utf8PathBuf::from_path_buf(home).map_err(|_| ConfigError::HomeDir)?;
        Ok(Self::new(home))
    }

    /// Directory `gh repo clone` runs in.
    pub fn owner_dir(&self, user: &str) -> Utf8PathBuf {
        self.home.join("src").join(GITHUB_HOST).join(user)
    }

    pub fn repo_dir(&self, user: &str, id: &str) -> Utf8PathBuf {
        self.owner_dir(user).join(id)
    }

    /// `hosts.yml` following gh's lookup order, reading the environment.
    pub fn hosts_path(&self) -> Utf8PathBuf {
        self.hosts_path_with(
            std::env::var("GH_CONFIG_DIR").ok(),
            std::env::var("XDG_CONFIG_HOME").ok(),
        )
    }

    /// `$GH_CONFIG_DIR`, then `$XDG_CONFIG_HOME/gh`, then `<home>/.config/gh`.
    /// Empty values count as unset.
    pub fn hosts_path_with(
        &self,
        gh_config_dir: Option<String>,
        xdg_config_home: Option<String>,
    ) -> Utf8PathBuf {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        let dir = if let Some(dir) = non_empty(gh_config_dir) {
            Utf8PathBuf::from(dir)
        } else if let Some(xdg) = non_empty(xdg_config_home) {
            Utf8PathBuf::from(xdg).join("gh")
        } else {
            self.home.join(".config").join("gh")
        };
        dir.join(HOSTS_FILE)
    }
}

/// Go module path for a repository. Always `/`-separated.
pub fn module_path(user: &str, id: &str) -> String {
    format!("{GITHUB_HOST}/{user}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_path_joins_host_user_and_id() {
        assert_eq!(module_path("alice", "myproj"), "github.com/alice/myproj");
    }

    #[test]
    fn repo_dir_nests_under_src_tree() {
        let layout = Layout::new("/home/alice");
        assert_eq!(
            layout.owner_dir("alice"),
            Utf8PathBuf::from("/home/alice/src/github.com/alice")
        );
        assert_eq!(
            layout.repo_dir("alice", "demo"),
            Utf8PathBuf::from("/home/alice/src/github.com/alice/demo")
        );
    }

    #[test]
    fn hosts_path_defaults_to_home_config() {
        let layout = Layout::new("/home/alice");
        assert_eq!(
            layout.hosts_path_with(None, None),
            Utf8PathBuf::from("/home/alice/.config/gh/hosts.yml")
        );
    }

    #[test]
    fn hosts_path_prefers_gh_config_dir() {
        let layout = Layout::new("/home/alice");
        let path = layout.hosts_path_with(Some("/etc/gh".to_owned()), Some("/xdg".to_owned()));
        assert_eq!(path, Utf8PathBuf::from("/etc/gh/hosts.yml"));
    }

    #[test]
    fn hosts_path_falls_back_to_xdg_config_home() {
        let layout = Layout::new("/home/alice");
        let path = layout.hosts_path_with(Some(String::new()), Some("/xdg".to_owned()));
        assert_eq!(path, Utf8PathBuf::from("/xdg/gh/hosts.yml"));
    }

    #[test]
    fn empty_xdg_config_home_is_ignored() {
        let layout = Layout::new("/home/alice");
        let path = layout.hosts_path_with(None, Some(String::new()));
        assert_eq!(path, Utf8PathBuf::from("/home/alice/.config/gh/hosts.yml"));
    }
}
