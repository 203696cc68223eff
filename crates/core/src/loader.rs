use crate::entry::FileEntry;
use std::path::PathBuf;

/// 呼び出し元から渡されたパス列をそのままの順序でエントリ化する。
/// ディレクトリ走査はしない。名前の再取得もこれ以降行わない。
pub fn entries_from_paths(paths: &[PathBuf]) -> Vec<FileEntry> {
    paths
        .iter()
        .map(|path| FileEntry::from_path(path))
        .collect()
}
