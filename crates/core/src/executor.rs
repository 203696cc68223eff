use crate::entry::{FileEntry, Note};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ApplyResult {
    pub applied: usize,
    pub unchanged: usize,
}

/// プレビュー確定後の実リネーム。エラー note が残っている間は開始しない。
/// 1件ずつ fs::rename するだけで、トランザクションは張らない。
pub fn execute(entries: &[FileEntry]) -> Result<ApplyResult> {
    if let Some(entry) = entries
        .iter()
        .find(|e| e.note.map(Note::is_error).unwrap_or(false))
    {
        bail!(
            "エラーが解消されるまでリネームできません: {}",
            entry.original_full_name()
        );
    }

    let mut result = ApplyResult::default();
    for entry in entries {
        if entry.is_unchanged() {
            result.unchanged += 1;
            continue;
        }

        let parent = entry.path.parent().unwrap_or_else(|| Path::new("."));
        let target = parent.join(entry.proposed_full_name());
        if target.exists() {
            bail!("リネーム先が既に存在します: {}", target.display());
        }

        fs::rename(&entry.path, &target).with_context(|| {
            format!(
                "リネームに失敗しました: {} -> {}",
                entry.path.display(),
                target.display()
            )
        })?;
        result.applied += 1;
    }

    Ok(result)
}
