use crate::tools::{FileInfo, match_extension, walk_files};
use anyhow::{Context, Result};
use console::style;
use log::{debug, info};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 單一檔案搬移的結果
#[derive(Debug)]
pub enum MoveOutcome {
    Moved,
    /// 目標位置已有檔案，不覆寫
    Skipped,
    /// 來源就是目標位置（已整理過）
    AlreadySorted,
    Failed(io::Error),
}

/// 搬移任務：來源路徑與 `root/<ext>/<檔名>` 目標路徑
#[derive(Debug, Clone)]
pub struct RelocationTask {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl RelocationTask {
    #[must_use]
    pub fn new(root: &Path, extension: &str, file: FileInfo) -> Self {
        let destination = root.join(extension).join(&file.name);
        Self {
            source: file.path,
            destination,
        }
    }

    /// 先檢查目標是否存在再 rename。
    ///
    /// 檢查與 rename 之間沒有鎖：同一輪中兩個同名同副檔名的檔案可能同時通過檢查，
    /// 此時後 rename 的會覆蓋先到的。
    pub fn execute(&self) -> MoveOutcome {
        if self.source == self.destination {
            return MoveOutcome::AlreadySorted;
        }

        match fs::symlink_metadata(&self.destination) {
            Ok(_) => return MoveOutcome::Skipped,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return MoveOutcome::Failed(e),
        }

        match fs::rename(&self.source, &self.destination) {
            Ok(()) => MoveOutcome::Moved,
            Err(e) => MoveOutcome::Failed(e),
        }
    }

    fn report(&self, outcome: &MoveOutcome) {
        let source = self.source.display();
        let destination = self.destination.display();

        match outcome {
            MoveOutcome::Moved => {
                info!("moved {source} -> {destination}");
                println!("{}", style(format!("Moved {source} to {destination}")).green());
            }
            MoveOutcome::Skipped => {
                debug!("destination exists, skipping {source}");
                println!(
                    "{}",
                    style(format!(
                        "File {source} already exists in destination {destination}, not overwriting"
                    ))
                    .yellow()
                );
            }
            MoveOutcome::AlreadySorted => {
                debug!("already sorted: {source}");
            }
            MoveOutcome::Failed(e) => {
                debug!("failed to move {source} -> {destination}: {e}");
                println!(
                    "{}",
                    style(format!("Error moving {source} to {destination}: {e}")).red()
                );
            }
        }
    }
}

/// 搬移統計
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RelocationReport {
    pub moved: usize,
    pub skipped: usize,
    pub already_sorted: usize,
    pub failed: usize,
    /// 不符合任何已知副檔名、保留原處的檔案
    pub unmatched: usize,
}

impl RelocationReport {
    /// 已排程的搬移任務數
    #[must_use]
    pub const fn scheduled(&self) -> usize {
        self.moved + self.skipped + self.already_sorted + self.failed
    }

    /// 第二次走訪看到的非資料夾項目總數
    #[must_use]
    pub const fn total_files(&self) -> usize {
        self.scheduled() + self.unmatched
    }
}

#[derive(Default)]
struct Counters {
    moved: AtomicUsize,
    skipped: AtomicUsize,
    already_sorted: AtomicUsize,
    failed: AtomicUsize,
    unmatched: AtomicUsize,
}

impl Counters {
    fn record(&self, outcome: &MoveOutcome) {
        let counter = match outcome {
            MoveOutcome::Moved => &self.moved,
            MoveOutcome::Skipped => &self.skipped,
            MoveOutcome::AlreadySorted => &self.already_sorted,
            MoveOutcome::Failed(_) => &self.failed,
        };
        counter.fetch_add(1, Ordering::SeqCst);
    }

    fn into_report(self) -> RelocationReport {
        RelocationReport {
            moved: self.moved.into_inner(),
            skipped: self.skipped.into_inner(),
            already_sorted: self.already_sorted.into_inner(),
            failed: self.failed.into_inner(),
            unmatched: self.unmatched.into_inner(),
        }
    }
}

/// 並行搬移器
///
/// 第二次走訪目錄樹，每個符合副檔名的檔案都排成一個獨立的搬移任務。
/// 走訪本身不等待任務完成；`relocate` 只在所有任務結束後才返回。
pub struct ConcurrentRelocator<'a> {
    root: &'a Path,
    extensions: &'a [String],
    pool: ThreadPool,
}

impl<'a> ConcurrentRelocator<'a> {
    /// `max_jobs` 為 `None` 時使用 rayon 預設執行緒數
    pub fn new(root: &'a Path, extensions: &'a [String], max_jobs: Option<usize>) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(max_jobs.unwrap_or(0))
            .thread_name(|i| format!("relocate-{i}"))
            .build()
            .context("failed to build relocation thread pool")?;

        Ok(Self {
            root,
            extensions,
            pool,
        })
    }

    pub fn relocate(&self) -> Result<RelocationReport> {
        let counters = Counters::default();

        // scope 結束即為完成屏障：所有 spawn 出去的任務都跑完才會返回
        self.pool.scope(|scope| {
            let counters = &counters;
            walk_files(self.root, |file| {
                let Some(extension) = match_extension(&file.name, self.extensions) else {
                    counters.unmatched.fetch_add(1, Ordering::SeqCst);
                    return Ok(());
                };

                let task = RelocationTask::new(self.root, extension, file);
                scope.spawn(move |_| {
                    let outcome = task.execute();
                    task.report(&outcome);
                    counters.record(&outcome);
                });
                Ok(())
            })
            .with_context(|| format!("Error walking directory {}", self.root.display()))
        })?;

        let report = counters.into_report();
        info!(
            "relocation finished - moved: {}, skipped: {}, failed: {}",
            report.moved, report.skipped, report.failed
        );
        Ok(report)
    }
}
