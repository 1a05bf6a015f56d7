mod preferences;
mod quota;
mod random;
mod roles;
mod types;

pub use random::{RandomSource, ScriptedSource, SeededSource, ThreadRngSource};
pub use types::{
    EngineConfig, EngineError, Exemptions, Generation, GenerationReport, Shortfall, ShortfallKind,
};

use crate::calendar;
use crate::model::{Schedule, ShiftRequests};
use tracing::debug;

/// Moteur d'assignation : fonction pure de
/// (mois, roster, souhaits, source d'aléa) → planning.
///
/// Chaque appel est indépendant et sans état ; la source d'aléa injectée est
/// la seule non-détermination.
#[derive(Debug, Clone)]
pub struct ShiftEngine {
    config: EngineConfig,
}

impl ShiftEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Applique la seule étape de préférences sur un planning existant
    /// (repos demandés fixés, puis souhaits de travail). Idempotente.
    pub fn apply_requests(
        &self,
        schedule: &mut Schedule,
        requests: &ShiftRequests,
    ) -> Result<(), EngineError> {
        let days = calendar::month_days(self.config.year, self.config.month0)?;
        preferences::apply(&self.config, &days, requests, schedule)?;
        Ok(())
    }

    /// Génère un planning complet : calendrier, préférences, quotas de repos,
    /// rotation des rôles. Les quotas inatteignables sont consignés dans le
    /// bilan, jamais traités comme des erreurs.
    pub fn generate(
        &self,
        requests: &ShiftRequests,
        rng: &mut dyn RandomSource,
    ) -> Result<Generation, EngineError> {
        let days = calendar::month_days(self.config.year, self.config.month0)?;
        let mut schedule =
            Schedule::blank(days.iter().map(|d| &d.key), &self.config.roster);

        let offs = preferences::apply(&self.config, &days, requests, &mut schedule)?;
        debug!(days = days.len(), roster = self.config.roster.len(), "requests applied");

        let mut report = GenerationReport::default();
        quota::fill(&self.config, &days, &offs, &mut schedule, rng, &mut report);
        roles::rotate(&self.config, &days, &mut schedule, rng, &mut report);
        debug!(shortfalls = report.shortfalls.len(), "generation finished");

        Ok(Generation { schedule, report })
    }
}
