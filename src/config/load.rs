use crate::config::types::{Config, JOBS_ENV_VAR};
use anyhow::{Context, Result, bail};
use std::env;
use std::path::PathBuf;

impl Config {
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self {
            root,
            max_jobs: None,
        }
    }

    #[must_use]
    pub fn with_max_jobs(mut self, max_jobs: Option<usize>) -> Self {
        self.max_jobs = max_jobs;
        self
    }

    /// 以目前工作目錄為根目錄，並從環境變數讀取執行緒上限
    pub fn from_current_dir() -> Result<Self> {
        let root = env::current_dir().context("Error getting working directory")?;
        let max_jobs = Self::load_max_jobs()?;
        Ok(Self::new(root).with_max_jobs(max_jobs))
    }

    fn load_max_jobs() -> Result<Option<usize>> {
        match env::var(JOBS_ENV_VAR) {
            Ok(value) => parse_max_jobs(&value).map(Some),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(e).with_context(|| format!("invalid {JOBS_ENV_VAR}")),
        }
    }
}

fn parse_max_jobs(value: &str) -> Result<usize> {
    let jobs: usize = value
        .trim()
        .parse()
        .with_context(|| format!("invalid {JOBS_ENV_VAR} value: {value:?}"))?;
    if jobs == 0 {
        bail!("{JOBS_ENV_VAR} must be greater than 0");
    }
    Ok(jobs)
}
