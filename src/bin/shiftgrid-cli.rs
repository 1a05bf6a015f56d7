#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use shiftgrid::{
    engine::{EngineConfig, RandomSource, SeededSource, ShiftEngine, ThreadRngSource},
    io,
    model::{Schedule, ShiftKind, ShiftRequests},
    storage::{JsonStorage, Storage},
};
#[cfg(any(feature = "logging", feature = "server"))]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning mensuel (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de configuration moteur (roster, mois, quotas, exemptions)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le planning du mois configuré
    Generate {
        /// Souhaits au format CSV `employee,kind,date`
        #[arg(long)]
        requests: Option<String>,
        /// Graine pour une génération reproductible
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Persister le planning généré (JSON atomique)
        #[arg(long)]
        save: Option<String>,
    },

    /// Afficher un planning persisté
    Show {
        #[arg(long, default_value = "schedule.json")]
        schedule: String,
    },

    /// Exporter la configuration par défaut (base d'édition)
    InitConfig {
        #[arg(long, default_value = "config.json")]
        out: String,
    },

    /// Servir l'API HTTP de génération (feature `server`)
    #[cfg(feature = "server")]
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let config = match &cli.config {
        Some(path) => io::load_config_from_file(path)?,
        None => EngineConfig::reference_july_2024(),
    };

    let code = match cli.cmd {
        Commands::Generate {
            requests,
            seed,
            out_json,
            out_csv,
            save,
        } => {
            let engine = ShiftEngine::new(config)?;
            let requests = match requests {
                Some(path) => io::import_requests_csv(path)?,
                None => ShiftRequests::default(),
            };
            let mut rng: Box<dyn RandomSource> = match seed {
                Some(seed) => Box::new(SeededSource::new(seed)),
                None => Box::new(ThreadRngSource),
            };
            let generation = engine.generate(&requests, rng.as_mut())?;

            if let Some(path) = out_json {
                io::export_schedule_json(path, &generation.schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &generation.schedule, &engine.config().roster)?;
            }
            if let Some(path) = save {
                JsonStorage::open(path)?.save(&generation.schedule)?;
            }

            print_schedule(&generation.schedule);

            if generation.report.is_clean() {
                0
            } else {
                eprintln!("Found {} shortfall(s)", generation.report.shortfalls.len());
                for shortfall in &generation.report.shortfalls {
                    eprintln!("{} | {:?}", shortfall.day, shortfall.kind);
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Show { schedule } => {
            let schedule = JsonStorage::open(&schedule)?.load()?;
            print_schedule(&schedule);
            0
        }
        Commands::InitConfig { out } => {
            io::export_config_json(&out, &EngineConfig::reference_july_2024())?;
            println!("Config written to {out}");
            0
        }
        #[cfg(feature = "server")]
        Commands::Serve { addr } => {
            let _ = Subscriber::builder()
                .with_env_filter(EnvFilter::from_default_env())
                .try_init();
            let engine = ShiftEngine::new(config)?;
            let addr: std::net::SocketAddr = addr.parse()?;
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(shiftgrid::server::serve(engine, addr))?;
            0
        }
    };

    std::process::exit(code);
}

/// Impression compacte : un jour par ligne, repos puis rôles.
fn print_schedule(schedule: &Schedule) {
    for (day, row) in schedule.iter() {
        let offs: Vec<&str> = row
            .iter()
            .filter(|(_, cell)| cell.kind == ShiftKind::Off)
            .map(|(employee, _)| employee.as_str())
            .collect();
        let holder = |kind: ShiftKind| {
            row.iter()
                .find(|(_, cell)| cell.kind == kind)
                .map(|(employee, _)| employee.as_str())
                .unwrap_or("-")
        };
        println!(
            "{} | off: {} | early: {} | clean: {} | inspect: {}",
            day,
            offs.join(","),
            holder(ShiftKind::Early),
            holder(ShiftKind::Clean),
            holder(ShiftKind::Inspect),
        );
    }
}
