//! questwalk-audit - audits a persisted game-state snapshot.
//!
//! Usage: `questwalk-audit <snapshot.json> [--constants <constants.json>]`
//!
//! Prints the audit report as pretty JSON and exits with status 2 when
//! blocking problems were found.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use questwalk_engine::{
    load_constants, run_audit, BusinessLogicValidator, ClockPort, GameStateSnapshot,
    InputValidator, QuestProgressCalculator, SystemClock,
};

struct Args {
    snapshot: PathBuf,
    constants: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut snapshot = None;
    let mut constants = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--constants" | "-c" => {
                let path = args.next().context("--constants requires a path")?;
                constants = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with('-') => bail!("Unknown option: {}", other),
            other => {
                if snapshot.is_some() {
                    bail!("Only one snapshot file may be given");
                }
                snapshot = Some(PathBuf::from(other));
            }
        }
    }

    let Some(snapshot) = snapshot else {
        print_usage();
        bail!("Missing snapshot file");
    };
    Ok(Args {
        snapshot,
        constants,
    })
}

fn print_usage() {
    eprintln!("Usage: questwalk-audit <snapshot.json> [--constants <constants.json>]");
    eprintln!();
    eprintln!("Environment overrides:");
    eprintln!("  QUESTWALK_BASE_XP_MULTIPLIER, QUESTWALK_XP_CURVE_EXPONENT,");
    eprintln!("  QUESTWALK_PROGRESS_TOLERANCE, QUESTWALK_STEPS_PER_DISTANCE_UNIT,");
    eprintln!("  QUESTWALK_COMBAT_HEART_RATE");
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "questwalk_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args()?;

    let constants = load_constants(args.constants.as_deref())
        .context("Failed to load game constants")?;
    let raw = std::fs::read_to_string(&args.snapshot)
        .with_context(|| format!("Failed to read {}", args.snapshot.display()))?;
    let snapshot: GameStateSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", args.snapshot.display()))?;

    tracing::info!(
        snapshot = %args.snapshot.display(),
        player_id = %snapshot.player.id,
        quests = snapshot.active_quests.len(),
        "Auditing snapshot"
    );

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let validator = BusinessLogicValidator::new(InputValidator::new(constants.clone(), clock));
    let calculator = QuestProgressCalculator::new(constants);

    let report = run_audit(&validator, &calculator, &snapshot);
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to render report")?
    );

    if report.is_blocking() {
        std::process::exit(2);
    }
    Ok(())
}
