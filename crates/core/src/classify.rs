use crate::entry::{FileEntry, Note};
use std::collections::HashMap;

/// バッチ全体を判定して各エントリの note を付け直す。
/// 戻り値はバッチコード: エントリ順で最初のエラー、警告のみなら None。
pub fn classify(entries: &mut [FileEntry]) -> Option<Note> {
    let mut counts = HashMap::<String, usize>::new();
    for entry in entries.iter() {
        *counts.entry(entry.proposed_full_name()).or_insert(0) += 1;
    }

    let mut batch = None;
    for entry in entries.iter_mut() {
        let proposed_full = entry.proposed_full_name();
        let original_full = entry.original_full_name();
        let colliding = counts.get(&proposed_full).copied().unwrap_or(0) > 1;

        entry.note = if entry.proposed_name.is_empty() {
            Some(Note::EmptyName)
        } else if colliding && proposed_full != original_full {
            // 自分の元の名前のまま (no-op) のエントリは衝突扱いにしない
            Some(Note::DuplicateName)
        } else if entry.proposed_name.starts_with('.') && !entry.original_name.starts_with('.') {
            Some(Note::HiddenFile)
        } else {
            None
        };

        if batch.is_none() {
            if let Some(note) = entry.note {
                if note.is_error() {
                    batch = Some(note);
                }
            }
        }
    }

    batch
}
