use super::relocator::{ConcurrentRelocator, RelocationReport};
use super::scanner::ExtensionScanner;
use crate::config::Config;
use crate::tools::validate_directory_exists;
use anyhow::Result;
use console::style;
use log::info;

/// 依副檔名整理檔案元件
pub struct ExtensionSorter {
    config: Config,
}

impl ExtensionSorter {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// 依序執行掃描與搬移，兩個階段之間不重疊
    pub fn run(&self) -> Result<RelocationReport> {
        let root = self.config.root.as_path();
        println!("Sorting: {}", style(root.display()).cyan());

        validate_directory_exists(root)?;

        let extensions = ExtensionScanner::new(root).scan()?;
        info!("extensions: {extensions:?}");

        let relocator = ConcurrentRelocator::new(root, &extensions, self.config.max_jobs)?;
        let report = relocator.relocate()?;

        Self::print_result(&report);
        println!("{}", style("Sorting complete.").green().bold());

        Ok(report)
    }

    fn print_result(report: &RelocationReport) {
        if report.scheduled() == 0 {
            return;
        }

        println!(
            "  files: {}, moved: {}, skipped: {}, failed: {}, unmatched: {}",
            report.total_files(),
            style(report.moved).green(),
            style(report.skipped).yellow(),
            style(report.failed).red(),
            report.unmatched
        );
    }
}
