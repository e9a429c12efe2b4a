// ==========================================
// 教师任课分配引擎 - 命令行入口
// ==========================================
// 职责: 读取学校快照 JSON，调用引擎，输出结果
// 红线: 命令行只做读写与参数转换，规则全部在库内
// ==========================================

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use school_assign::config::{default_config_path, ConfigManager};
use school_assign::engine::CurriculumOptions;
use school_assign::{
    logging, AssignmentConfigReader, AssignmentDistributor, AssignmentWorkbench,
    DistributionConfig, Phase, RosterImportConfig, RosterImporter, SchoolSnapshot,
};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

// 命令行操作的日志操作人
const CLI_ACTOR: &str = "cli";

#[derive(Parser)]
#[command(
    name = "school-assign",
    version,
    about = "Teacher assignment engine: automatic distribution, roster import, load reports",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (JSON object of key/value pairs)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log format
    #[arg(long, global = true, value_enum, default_value = "text")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill unassigned slots of one phase automatically
    Distribute {
        /// School snapshot file
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Target phase (elementary, middle, high, kindergarten, other, or the Arabic label)
        #[arg(short, long)]
        phase: Phase,

        /// Write the updated snapshot here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import teachers from a CSV / Excel roster
    ImportRoster {
        /// School snapshot file
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Roster file (.csv, .xlsx, .xls)
        #[arg(short, long)]
        file: PathBuf,

        /// Write the updated snapshot here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print teacher loads and class coverage
    Report {
        /// School snapshot file
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Restrict coverage to one phase
        #[arg(short, long)]
        phase: Option<Phase>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.log_format {
        LogFormat::Text => logging::init(),
        LogFormat::Json => logging::init_json(),
    }
    tracing::info!(version = school_assign::VERSION, "{} 启动", school_assign::APP_NAME);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Distribute {
            snapshot,
            phase,
            output,
        } => run_distribute(&config, &snapshot, phase, output.as_deref()),
        Commands::ImportRoster {
            snapshot,
            file,
            output,
        } => run_import(&config, &snapshot, &file, output.as_deref()),
        Commands::Report { snapshot, phase } => run_report(&config, &snapshot, phase),
    }
}

fn load_config(path: Option<&Path>) -> Result<ConfigManager> {
    if let Some(path) = path {
        return ConfigManager::from_file(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()));
    }
    match default_config_path() {
        Some(path) if path.exists() => ConfigManager::from_file(&path)
            .with_context(|| format!("读取配置文件失败: {}", path.display())),
        _ => Ok(ConfigManager::new()),
    }
}

fn read_snapshot(path: &Path) -> Result<SchoolSnapshot> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("读取快照失败: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("快照格式错误: {}", path.display()))
}

fn write_snapshot(path: &Path, snapshot: &SchoolSnapshot) -> Result<()> {
    let text = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, text).with_context(|| format!("写入快照失败: {}", path.display()))?;
    tracing::info!(path = %path.display(), "快照已写入");
    Ok(())
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_distribute(
    config: &ConfigManager,
    snapshot_path: &Path,
    phase: Phase,
    output: Option<&Path>,
) -> Result<()> {
    let snapshot = read_snapshot(snapshot_path)?;
    let distributor = AssignmentDistributor::new(DistributionConfig::from_reader(config)?);

    let mut bench = AssignmentWorkbench::with_assignments(CLI_ACTOR, snapshot.assignments)?;
    let result = bench.run_distribution(&distributor, &snapshot.roster, phase)?;
    bench.apply_distribution(&result)?;

    print_json(&json!({
        "assignedCount": result.assigned_count,
        "unassignedCount": result.unassigned_count,
        "added": result.added,
        "unassignedSlots": result.unassigned_slots,
    }))?;

    if let Some(output) = output {
        let updated = SchoolSnapshot {
            roster: snapshot.roster,
            assignments: bench.into_assignments(),
        };
        write_snapshot(output, &updated)?;
    }
    Ok(())
}

fn run_import(
    config: &ConfigManager,
    snapshot_path: &Path,
    roster_file: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let mut snapshot = read_snapshot(snapshot_path)?;
    let importer = RosterImporter::new(RosterImportConfig::from_reader(config)?);

    let report = importer.import_file(roster_file, &snapshot.roster.specializations)?;
    report.merge_into(&mut snapshot.roster);
    print_json(&serde_json::to_value(&report)?)?;

    if let Some(output) = output {
        write_snapshot(output, &snapshot)?;
    }
    Ok(())
}

fn run_report(config: &ConfigManager, snapshot_path: &Path, phase: Option<Phase>) -> Result<()> {
    let snapshot = read_snapshot(snapshot_path)?;
    let options = CurriculumOptions {
        include_archived: config.get_include_archived_subjects()?,
    };

    let bench = AssignmentWorkbench::with_assignments(CLI_ACTOR, snapshot.assignments)?;
    let loads = bench.load_summaries(&snapshot.roster);
    let coverage = bench.class_coverage(&snapshot.roster, phase, &options);

    print_json(&json!({
        "teacherLoads": loads,
        "classCoverage": coverage,
    }))
}
