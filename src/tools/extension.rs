use std::ffi::OsStr;

/// 副檔名分隔字元
pub const EXTENSION_SEPARATOR: char = '.';

/// 取出檔名的副檔名（包含開頭的分隔字元）
///
/// 只有當最後一個分隔字元不在檔名開頭，且其後至少還有一個字元時才算有副檔名，
/// 所以 `.bashrc`、`README`、`archive.` 都回傳 `None`。
/// 檔名本身不必是 UTF-8，但副檔名要拿來當資料夾名稱，必須是合法的 UTF-8。
#[must_use]
pub fn extract_extension(file_name: &OsStr) -> Option<&str> {
    let bytes = file_name.as_encoded_bytes();
    let index = bytes
        .iter()
        .rposition(|&b| char::from(b) == EXTENSION_SEPARATOR)?;
    if index == 0 || bytes.len() - index < 2 {
        return None;
    }

    std::str::from_utf8(&bytes[index..]).ok()
}

/// 依序比對已知副檔名，回傳第一個符合的後綴
///
/// 以原始位元組比對：檔名必須比副檔名長，且結尾需完全相同（區分大小寫）。
#[must_use]
pub fn match_extension<'a>(file_name: &OsStr, extensions: &'a [String]) -> Option<&'a str> {
    let bytes = file_name.as_encoded_bytes();
    extensions
        .iter()
        .map(String::as_str)
        .find(|ext| bytes.len() > ext.len() && bytes.ends_with(ext.as_bytes()))
}
