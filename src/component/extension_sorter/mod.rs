//! 依副檔名整理檔案元件
//!
//! 先掃描出所有副檔名並建立對應資料夾，再並行把檔案搬進去

mod main;
mod relocator;
mod scanner;

pub use main::ExtensionSorter;
pub use relocator::{ConcurrentRelocator, MoveOutcome, RelocationReport, RelocationTask};
pub use scanner::ExtensionScanner;
