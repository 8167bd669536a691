use std::path::PathBuf;

/// 限制搬移執行緒數量的環境變數
pub const JOBS_ENV_VAR: &str = "FILE_ORGANIZER_JOBS";

#[derive(Debug, Clone)]
pub struct Config {
    /// 要整理的根目錄，整個執行過程中不變
    pub root: PathBuf,
    /// 搬移執行緒上限，`None` 時使用 rayon 預設值
    pub max_jobs: Option<usize>,
}
