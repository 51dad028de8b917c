use std::collections::BTreeMap;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::layout::GITHUB_HOST;

/// One entry of gh's `hosts.yml`. Other keys gh writes (tokens, protocol,
/// per-user tables) are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Host {
    pub user: String,
}

/// Parsed `hosts.yml`: hostname to authenticated user.
#[derive(Debug, Clone)]
pub struct HostsConfig {
    path: Utf8PathBuf,
    hosts: BTreeMap<String, Host>,
}

impl HostsConfig {
    /// Read and parse the hosts file at `path`.
    pub fn load_from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_yaml(path, &raw)
    }

    /// Parse already-read contents. `path` is only used in error messages.
    pub fn from_yaml(path: &Utf8Path, raw: &str) -> Result<Self, ConfigError> {
        let hosts: BTreeMap<String, Host> =
            serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
                path: path.to_owned(),
                source,
            })?;
        Ok(Self {
            path: path.to_owned(),
            hosts,
        })
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// The single configured host must be `github.com`; its user is returned.
    pub fn github_user(&self) -> Result<&str, ConfigError> {
        let mut entries = self.hosts.iter();
        let (Some((name, host)), None) = (entries.next(), entries.next()) else {
            return Err(ConfigError::HostCount {
                path: self.path.clone(),
                count: self.hosts.len(),
            });
        };

        if name != GITHUB_HOST {
            return Err(ConfigError::NonGithubHost {
                path: self.path.clone(),
                host: name.clone(),
            });
        }
        Ok(&host.user)
    }
}
