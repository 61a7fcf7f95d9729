//! src/config.rs
//!
//! Configuration NATIVE : ligne de commande + journalisation.
//! (En wasm32, pas de ligne de commande : la fenêtre démarre directement.)

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Niveau de journalisation (RUST_LOG reste prioritaire s’il est défini).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum NiveauLog {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<NiveauLog> for LevelFilter {
    fn from(n: NiveauLog) -> Self {
        match n {
            NiveauLog::Off => LevelFilter::Off,
            NiveauLog::Error => LevelFilter::Error,
            NiveauLog::Warn => LevelFilter::Warn,
            NiveauLog::Info => LevelFilter::Info,
            NiveauLog::Debug => LevelFilter::Debug,
            NiveauLog::Trace => LevelFilter::Trace,
        }
    }
}

/// Options de lancement.
#[derive(Clone, Debug, Parser)]
#[command(name = "calculatrice_pile", version, about = "Calculatrice entière à deux piles")]
pub struct Config {
    /// Session texte (un jeton par ligne) au lieu de la fenêtre
    #[arg(long)]
    pub terminal: bool,

    /// Verbosité (`off`, `error`, `warn`, `info`, `debug`, `trace`)
    #[arg(long, value_enum, default_value_t = NiveauLog::Warn)]
    pub log_level: NiveauLog,
}

/// Initialise env_logger une seule fois.
pub fn init_logger(niveau: NiveauLog) {
    use env_logger::{Builder, Env};
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // filter_level d’abord, puis RUST_LOG par-dessus
        Builder::new()
            .filter_level(niveau.into())
            .parse_env(Env::default())
            .format_timestamp_secs()
            .try_init()
            .ok(); // déjà initialisé ailleurs : on ignore
    });
}
