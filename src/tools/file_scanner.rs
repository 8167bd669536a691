use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 走訪時看到的非資料夾項目（一般檔案或符號連結本身）
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    /// 原始檔名，不要求是 UTF-8
    pub name: OsString,
}

/// 依檔名排序遞迴走訪目錄，對每個非資料夾項目呼叫 `visit`
///
/// 資料夾本身不會交給 `visit`，但仍會往下走訪。不跟隨符號連結，
/// 連結本身當作檔案處理。任何走訪錯誤都會立即中止並回傳；`visit` 回傳的錯誤也一樣。
pub fn walk_files<F>(directory: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(FileInfo) -> Result<()>,
{
    for entry in WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;

        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_os_string();
        visit(FileInfo {
            path: entry.into_path(),
            name,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn collect_names(directory: &Path) -> Result<Vec<OsString>> {
        let mut names = Vec::new();
        walk_files(directory, |file| {
            names.push(file.name);
            Ok(())
        })?;
        Ok(names)
    }

    #[test]
    fn test_walk_files_sorted() {
        let temp_dir = TempDir::new().unwrap();

        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("nested").join("c.jpg"), "c").unwrap();

        let names = collect_names(temp_dir.path()).unwrap();

        // 資料夾不列入，且依檔名排序
        assert_eq!(names, vec!["a.txt", "b.txt", "c.jpg"]);
    }

    #[test]
    fn test_walk_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(collect_names(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_walk_missing_directory_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        assert!(collect_names(&missing).is_err());
    }

    #[test]
    fn test_walk_propagates_visitor_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();

        let result = walk_files(temp_dir.path(), |_| anyhow::bail!("stop"));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_yields_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let name = std::ffi::OsStr::from_bytes(b"\xffbad.txt");
        fs::write(temp_dir.path().join(name), "bad").unwrap();

        let names = collect_names(temp_dir.path()).unwrap();
        assert_eq!(names, vec![name.to_os_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_yields_symlinks_without_following() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("inside.txt"), "x").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("link.pdf")).unwrap();

        let names = collect_names(temp_dir.path()).unwrap();

        // 連結到資料夾的符號連結也當作檔案，且不會走進去重複列出
        assert_eq!(names, vec!["link.pdf", "inside.txt"]);
    }
}
