use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use renametool_core::{
    app_paths, apply, entries_from_paths, execute, load_config, preview_report, validate_template,
    Note, PreviewReport, RenameRule,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "renametool-cli")]
#[command(about = "ファイル名の一括リネームをプレビュー付きで行います")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Rename(RenameArgs),
    Replace(ReplaceArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    Show,
}

#[derive(Debug, Args)]
struct RenameArgs {
    #[arg(required = true)]
    files: Vec<PathBuf>,
    #[arg(long)]
    template: Option<String>,
    #[arg(long, default_value_t = false)]
    apply: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Debug, Args)]
struct ReplaceArgs {
    #[arg(required = true)]
    files: Vec<PathBuf>,
    #[arg(long)]
    search: String,
    #[arg(long)]
    replace: String,
    #[arg(long, default_value_t = false)]
    apply: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rename(args) => cmd_rename(args),
        Commands::Replace(args) => cmd_replace(args),
        Commands::Config(config) => match config.action {
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

fn cmd_rename(args: RenameArgs) -> Result<()> {
    let template = match args.template {
        Some(template) => template,
        None => load_config()?.template,
    };
    validate_template(&template)?;

    run_preview(
        &args.files,
        RenameRule::Template { template },
        args.apply,
        args.output,
    )
}

fn cmd_replace(args: ReplaceArgs) -> Result<()> {
    run_preview(
        &args.files,
        RenameRule::Replace {
            search: args.search,
            replace: args.replace,
        },
        args.apply,
        args.output,
    )
}

fn run_preview(
    files: &[PathBuf],
    rule: RenameRule,
    apply_requested: bool,
    output: OutputFormat,
) -> Result<()> {
    let mut entries = entries_from_paths(files);
    let status = apply(&mut entries, &rule)?;
    let report = preview_report(&entries, status);

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            print_table(&report);
        }
    }

    if apply_requested {
        if let Some(note) = status {
            anyhow::bail!("エラーがあるため適用できません: {}", note_label(note));
        }
        let result = execute(&entries)?;
        eprintln!(
            "適用完了: {}件 (変更なし {}件)",
            result.applied, result.unchanged
        );
    } else {
        eprintln!("dry-runモード: 実ファイルは変更していません。適用するには --apply を指定してください。");
    }

    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    let paths = app_paths()?;
    println!("設定ファイル: {}", paths.config_path.display());
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn print_table(report: &PreviewReport) {
    println!("元ファイル -> 新ファイル");
    for row in &report.rows {
        match row.note {
            Some(note) => println!("{} -> {} [{}]", row.original, row.proposed, note_label(note)),
            None => println!("{} -> {}", row.original, row.proposed),
        }
    }

    match report.status {
        Some(note) => println!("\n状態: {}", note_label(note)),
        None => println!("\n状態: 問題なし"),
    }
}

fn note_label(note: Note) -> &'static str {
    match note {
        Note::EmptyName => "名前が空になります",
        Note::DuplicateName => "名前が重複しています",
        Note::HiddenFile => "隠しファイルになります",
    }
}
