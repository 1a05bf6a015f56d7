#![forbid(unsafe_code)]
//! Shiftgrid — génération de planning mensuel d'équipe (sans BD).
//!
//! - Calendrier civil local (clés `YYYY-MM-DD`, jamais dérivées d'UTC).
//! - Souhaits employés : repos demandés (fixés) et jours de travail préférés.
//! - Quotas de repos par jour : 2 en semaine, roster − effectif le week-end.
//! - Rotation aléatoire de trois rôles quotidiens, source d'aléa injectable.
//! - Stockage fichiers (JSON/CSV) ; adaptateur HTTP optionnel (`server`).

pub mod calendar;
pub mod engine;
pub mod grid;
pub mod io;
pub mod model;
#[cfg(feature = "server")]
pub mod server;
pub mod storage;

pub use calendar::{month_days, MonthDay};
pub use engine::{
    EngineConfig, EngineError, Exemptions, Generation, GenerationReport, RandomSource,
    ScriptedSource, SeededSource, ShiftEngine, Shortfall, ShortfallKind, ThreadRngSource,
};
pub use grid::{EditMode, WorkingGrid};
pub use model::{
    DayKey, Employee, Highlight, Roster, Schedule, ShiftCell, ShiftKind, ShiftRequests,
};
pub use storage::{JsonStorage, Storage};
