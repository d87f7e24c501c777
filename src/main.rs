use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use growthkit::data::Role;
use growthkit::report::html::render_summary_html;
use growthkit::report::text::{render_competency_table, render_rubric};
use growthkit::session::EvalSession;
use growthkit::{exchange, tui};

#[derive(Debug, Parser)]
#[command(name = "growthkit", version)]
#[command(about = "Staff self-review toolkit: competency scoring and radar-chart reports.")]
struct Cli {
    /// Directory holding competency and rubric resources.
    #[arg(long, global = true, default_value = "data")]
    data: PathBuf,

    /// Role identifier (unknown values fall back to the default role).
    #[arg(long, global = true, default_value = "project-manager")]
    role: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the known roles.
    Roles,
    /// Print the competency framework and scoring rubric.
    Show,
    /// Render the radar chart to a PNG file.
    Chart {
        /// Comma-separated self scores (0..=5), applied in competency order.
        #[arg(long)]
        scores: Option<String>,
        /// Peer score document to overlay.
        #[arg(long)]
        peer: Option<PathBuf>,
        #[arg(long, default_value = "radar-chart.png")]
        out: PathBuf,
        #[arg(long, default_value_t = 640)]
        width: u32,
        #[arg(long, default_value_t = 640)]
        height: u32,
    },
    /// Export self scores as a portable JSON document.
    Export {
        #[arg(long)]
        scores: Option<String>,
        #[arg(long, default_value = exchange::DEFAULT_EXPORT_FILE)]
        out: PathBuf,
    },
    /// Write the printable evaluation summary (chart plus score table).
    Summary {
        #[arg(long)]
        scores: Option<String>,
        #[arg(long)]
        peer: Option<PathBuf>,
        #[arg(long, default_value = "evaluation-summary.html")]
        out: PathBuf,
        #[arg(long, default_value_t = 640)]
        width: u32,
        #[arg(long, default_value_t = 640)]
        height: u32,
    },
    /// Interactive slider panel with a live radar chart.
    Tui {
        /// Peer score document, imported at startup and on demand.
        #[arg(long)]
        peer: Option<PathBuf>,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let role = Role::parse(&cli.role);

    match cli.command {
        Command::Roles => {
            for candidate in Role::ALL {
                let marker = if candidate == Role::default() {
                    " (default)"
                } else {
                    ""
                };
                println!("{}{}  {}", candidate.id(), marker, candidate.display_name());
            }
            Ok(())
        }
        Command::Show => {
            let session = loaded_session(&cli.data, role, None, None)?;
            print!(
                "{}",
                render_competency_table(role.display_name(), session.state().competencies())
            );
            println!();
            print!("{}", render_rubric(session.rubric()));
            Ok(())
        }
        Command::Chart {
            scores,
            peer,
            out,
            width,
            height,
        } => {
            let session = loaded_session(&cli.data, role, scores.as_deref(), peer.as_deref())?;
            let png = session.chart_png(width, height).map_err(|e| e.to_string())?;
            std::fs::write(&out, png).map_err(|e| e.to_string())?;
            info!(path = %out.display(), "chart written");
            Ok(())
        }
        Command::Export { scores, out } => {
            let session = loaded_session(&cli.data, role, scores.as_deref(), None)?;
            let json = session.export_self().map_err(|e| e.to_string())?;
            std::fs::write(&out, json).map_err(|e| e.to_string())?;
            info!(path = %out.display(), "scores exported");
            Ok(())
        }
        Command::Summary {
            scores,
            peer,
            out,
            width,
            height,
        } => {
            let session = loaded_session(&cli.data, role, scores.as_deref(), peer.as_deref())?;
            let summary = session.summary(width, height).map_err(|e| e.to_string())?;
            std::fs::write(&out, render_summary_html(&summary)).map_err(|e| e.to_string())?;
            info!(path = %out.display(), "summary written");
            Ok(())
        }
        Command::Tui { peer } => tui::run(tui::TuiOptions {
            data_dir: cli.data,
            role,
            peer_path: peer,
        })
        .map_err(|e| e.to_string()),
    }
}

/// Loads the role and applies optional batch inputs: positional self scores
/// and a peer document.
fn loaded_session(
    data_dir: &std::path::Path,
    role: Role,
    scores: Option<&str>,
    peer: Option<&std::path::Path>,
) -> Result<EvalSession, String> {
    let mut session = EvalSession::new(data_dir);
    session.load_role(role);

    if let Some(csv) = scores {
        let values = parse_scores(csv)?;
        if values.len() > session.state().len() {
            return Err(format!(
                "too many scores: expected at most {}, got {}",
                session.state().len(),
                values.len()
            ));
        }
        for (index, value) in values.into_iter().enumerate() {
            session.set_self(index, value).map_err(|e| e.to_string())?;
        }
    }

    if let Some(path) = peer {
        let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        session
            .import_peer(&text)
            .map_err(|e| format!("peer import failed: {e}"))?;
    }

    Ok(session)
}

fn parse_scores(csv: &str) -> Result<Vec<u8>, String> {
    csv.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u8>()
                .map_err(|_| format!("invalid score value: {token}"))
        })
        .collect()
}
