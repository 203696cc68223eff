mod classify;
mod config;
mod engine;
mod entry;
mod executor;
mod loader;
mod replace;
mod template;

pub use classify::classify;
pub use config::{app_paths, load_config, save_config, AppConfig, AppPaths};
pub use engine::{
    apply, preview_report, preview_rows, rename_mapping, PreviewReport, PreviewRow, RenameRule,
};
pub use entry::{FileEntry, Note, Severity};
pub use executor::{execute, ApplyResult};
pub use loader::entries_from_paths;
pub use replace::{render_replace, validate_replacement, MatchSpan};
pub use template::{
    parse_template, render_template, validate_template, RuleError, TemplatePart,
    ORIGINAL_NAME_TOKEN,
};
