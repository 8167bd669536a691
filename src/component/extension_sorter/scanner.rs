use crate::tools::{ensure_directory_exists, extract_extension, walk_files};
use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::HashSet;
use std::path::Path;

/// 副檔名掃描器
///
/// 單執行緒走訪整棵目錄樹一次，收集所有不重複的副檔名，
/// 再於根目錄下為每個副檔名建立一個資料夾。
pub struct ExtensionScanner<'a> {
    root: &'a Path,
}

impl<'a> ExtensionScanner<'a> {
    pub const fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// 掃描並建立副檔名資料夾，回傳依發現順序排列的副檔名清單
    pub fn scan(&self) -> Result<Vec<String>> {
        let extensions = self.discover_extensions()?;
        self.create_extension_directories(&extensions)?;
        Ok(extensions)
    }

    /// 走訪目錄樹，依第一次出現的順序收集副檔名
    pub fn discover_extensions(&self) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        let mut extensions = Vec::new();

        walk_files(self.root, |file| {
            if let Some(ext) = extract_extension(&file.name) {
                if seen.insert(ext.to_string()) {
                    debug!("discovered extension {ext} from {}", file.path.display());
                    extensions.push(ext.to_string());
                }
            }
            Ok(())
        })
        .with_context(|| format!("Error walking directory {}", self.root.display()))?;

        info!("found {} distinct extensions", extensions.len());
        Ok(extensions)
    }

    /// 為每個副檔名建立 `root/<ext>`，已存在的資料夾會直接沿用
    pub fn create_extension_directories(&self, extensions: &[String]) -> Result<()> {
        for ext in extensions {
            let directory = self.root.join(ext);
            ensure_directory_exists(&directory)
                .with_context(|| format!("Error creating directory {ext}"))?;
        }
        Ok(())
    }
}
