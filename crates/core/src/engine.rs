use crate::classify::classify;
use crate::entry::{FileEntry, Note};
use crate::replace::{render_replace, validate_replacement, MatchSpan};
use crate::template::{parse_template, render_template, RuleError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RenameRule {
    Template { template: String },
    Replace { search: String, replace: String },
}

/// ルールを全エントリに適用して note を付け直し、バッチコードを返す。
/// ルール不正の場合はエントリを一切変更せずにエラーを返す。
pub fn apply(entries: &mut [FileEntry], rule: &RenameRule) -> Result<Option<Note>, RuleError> {
    match rule {
        RenameRule::Template { template } => {
            let parts = parse_template(template)?;
            for (index, entry) in entries.iter_mut().enumerate() {
                entry.proposed_name = render_template(&parts, index, &entry.original_name);
                entry.matches.clear();
            }
        }
        RenameRule::Replace { search, replace } => {
            validate_replacement(replace)?;
            for entry in entries.iter_mut() {
                let (proposed, matches) = render_replace(search, replace, &entry.original_name);
                entry.proposed_name = proposed;
                entry.matches = matches;
            }
        }
    }

    Ok(classify(entries))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRow {
    pub original: String,
    pub proposed: String,
    pub note: Option<Note>,
    pub matches: Vec<MatchSpan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewReport {
    pub rows: Vec<PreviewRow>,
    pub status: Option<Note>,
}

pub fn preview_rows(entries: &[FileEntry]) -> Vec<PreviewRow> {
    entries
        .iter()
        .map(|entry| PreviewRow {
            original: entry.original_full_name(),
            proposed: entry.proposed_full_name(),
            note: entry.note,
            matches: entry.matches.clone(),
        })
        .collect()
}

pub fn preview_report(entries: &[FileEntry], status: Option<Note>) -> PreviewReport {
    PreviewReport {
        rows: preview_rows(entries),
        status,
    }
}

/// 確定した旧名→新名の対応 (変更のあるエントリのみ)。
/// エラー note が残っている間は None。
pub fn rename_mapping(entries: &[FileEntry]) -> Option<Vec<(String, String)>> {
    if entries
        .iter()
        .any(|e| e.note.map(Note::is_error).unwrap_or(false))
    {
        return None;
    }

    Some(
        entries
            .iter()
            .filter(|e| !e.is_unchanged())
            .map(|e| (e.original_full_name(), e.proposed_full_name()))
            .collect(),
    )
}
