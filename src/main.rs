//! Wegpunkt-Digitalisierer.
//!
//! Kommandozeilen-Frontend: spielt Kartenklicks über den Controller nach,
//! legt Wegpunkte an und schreibt die CSV-Exporte.

use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::DVec2;
use std::path::{Path, PathBuf};
use waypoint_digitizer::{
    heading, AppController, AppIntent, AppState, DigitizerOptions, ExportKind,
};

#[derive(Parser)]
#[command(name = "waypoint-digitizer")]
#[command(author, version, about = "Digitalisiert Strecken zu granularen Punkten und Wegpunkten", long_about = None)]
struct Cli {
    /// Optionen-Datei (TOML). Standard: neben der Binary
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Klicks aus einer JSON-Datei (`[[lng, lat], ...]`) nachspielen
    Replay {
        /// JSON-Datei mit Klickkoordinaten
        clicks: PathBuf,
        /// Granulare Indizes, an denen Wegpunkte angelegt werden
        #[arg(short, long = "waypoint", value_delimiter = ',')]
        waypoints: Vec<usize>,
        /// Schrittweite (überschreibt die Optionen)
        #[arg(long)]
        step_length: Option<f64>,
        /// Exportverzeichnis; ohne Angabe wird nichts exportiert
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Strecke zusätzlich als JSON ausgeben
        #[arg(long)]
        json: bool,
    },
    /// Anfangskurs zwischen zwei Koordinaten in Grad
    #[command(allow_negative_numbers = true)]
    Heading {
        from_lng: f64,
        from_lat: f64,
        to_lng: f64,
        to_lat: f64,
    },
    /// Standard-Optionen in eine Datei schreiben
    Options {
        /// Zielpfad; ohne Angabe der `--options`-Pfad bzw. der Standardpfad
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let options_path = cli.options.unwrap_or_else(DigitizerOptions::config_path);

    match cli.command {
        Commands::Replay {
            clicks,
            waypoints,
            step_length,
            output,
            json,
        } => {
            let options = DigitizerOptions::load_from_file(&options_path);
            let state = replay(options, &clicks, &waypoints, step_length, output)?;
            for line in state.status_lines() {
                println!("{line}");
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&state.track)?);
            }
        }
        Commands::Heading {
            from_lng,
            from_lat,
            to_lng,
            to_lat,
        } => {
            let bearing = heading(DVec2::new(from_lng, from_lat), DVec2::new(to_lng, to_lat));
            println!("{bearing:.2}");
        }
        Commands::Options { path } => {
            let path = path.unwrap_or(options_path);
            DigitizerOptions::default().save_to_file(&path)?;
        }
    }

    Ok(())
}

/// Spielt die Klicks nach. Einzelne fehlerhafte Klicks brechen den Lauf nicht ab.
fn replay(
    options: DigitizerOptions,
    clicks_path: &Path,
    waypoints: &[usize],
    step_length: Option<f64>,
    output: Option<PathBuf>,
) -> anyhow::Result<AppState> {
    log::info!(
        "Wegpunkt-Digitalisierer v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let content = std::fs::read_to_string(clicks_path)
        .with_context(|| format!("Klickdatei {} nicht lesbar", clicks_path.display()))?;
    let clicks: Vec<[f64; 2]> =
        serde_json::from_str(&content).context("Klickdatei ist kein [[lng, lat], ...]-Array")?;

    let mut state = AppState::with_options(options)?;
    let mut controller = AppController::new();
    let mut dispatch = |state: &mut AppState, intent: AppIntent| {
        if let Err(e) = controller.handle_intent(state, intent) {
            log::error!("Intent fehlgeschlagen: {:#}", e);
        }
    };

    if let Some(step_length) = step_length {
        dispatch(&mut state, AppIntent::StepLengthChanged { step_length });
    }
    for [lng, lat] in clicks {
        dispatch(
            &mut state,
            AppIntent::MapClicked {
                coordinate: DVec2::new(lng, lat),
            },
        );
    }
    for &index in waypoints {
        dispatch(&mut state, AppIntent::GranularPointClicked { index });
    }
    if let Some(dir) = output {
        state.options.export_dir = dir;
        for kind in ExportKind::ALL {
            dispatch(&mut state, AppIntent::ExportRequested { kind });
        }
    }

    log::info!(
        "{} Commands ausgeführt, davon {} Klicks",
        state.command_log.len(),
        state.command_log.click_count()
    );
    Ok(state)
}
