use crate::model::{DayKey, Employee, Roster, Schedule, ShiftKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Exemptions nominatives, à la place de littéraux câblés dans le moteur.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exemptions {
    /// Employés automatiquement en repos chaque samedi et dimanche du mois.
    #[serde(default)]
    pub weekend_off: BTreeSet<Employee>,
    /// Employés jamais retenus pour les trois rôles quotidiens.
    #[serde(default)]
    pub role_exempt: BTreeSet<Employee>,
    /// Employés dont les repos demandés ne portent pas de surlignage.
    #[serde(default)]
    pub muted_highlight: BTreeSet<Employee>,
}

/// Configuration du moteur : roster, mois cible, quotas et exemptions.
///
/// Tout est paramètre explicite ; les constantes du déploiement de référence
/// (10 employés, juillet 2024) ne vivent que dans [`EngineConfig::reference_july_2024`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub roster: Roster,
    pub year: i32,
    /// Mois indexé depuis 0 (0 = janvier), comme dans l'API de référence.
    pub month0: u32,
    /// Nombre d'employés en repos visé chaque jour de semaine.
    #[serde(default = "default_weekday_off")]
    pub weekday_off: usize,
    /// Nombre d'employés en service visé chaque samedi/dimanche.
    #[serde(default = "default_weekend_on_duty")]
    pub weekend_on_duty: usize,
    #[serde(default)]
    pub exemptions: Exemptions,
}

fn default_weekday_off() -> usize {
    2
}
fn default_weekend_on_duty() -> usize {
    3
}

impl EngineConfig {
    /// Quota de repos d'un samedi/dimanche : tout le roster sauf l'effectif
    /// de service.
    pub fn weekend_off_target(&self) -> usize {
        self.roster.len().saturating_sub(self.weekend_on_duty)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.roster.is_empty() {
            return Err(EngineError::EmptyRoster);
        }
        if self.month0 > 11 {
            return Err(EngineError::InvalidMonth(self.month0));
        }
        for employee in self
            .exemptions
            .weekend_off
            .iter()
            .chain(self.exemptions.role_exempt.iter())
            .chain(self.exemptions.muted_highlight.iter())
        {
            if !self.roster.contains(employee) {
                return Err(EngineError::UnknownEmployee(employee.as_str().to_owned()));
            }
        }
        Ok(())
    }

    /// Configuration du déploiement de référence : 10 employés, juillet 2024,
    /// un employé exempté des rôles et en repos les week-ends.
    pub fn reference_july_2024() -> Self {
        let roster = Roster::from_names([
            "土井", "小川", "猿田", "宮田", "齊藤", "菅原", "渡辺", "藤代", "白鳥", "川村",
        ]);
        let doi: BTreeSet<_> = [Employee::new("土井")].into_iter().collect();
        Self {
            roster,
            year: 2024,
            month0: 6,
            weekday_off: default_weekday_off(),
            weekend_on_duty: default_weekend_on_duty(),
            exemptions: Exemptions {
                weekend_off: doi.clone(),
                role_exempt: doi.clone(),
                muted_highlight: doi,
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("roster is empty")]
    EmptyRoster,
    #[error("month index out of range: {0} (expected 0..=11)")]
    InvalidMonth(u32),
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("invalid day key: {0}")]
    InvalidDayKey(String),
    #[error("day {0} is outside the generation month")]
    DayOutOfMonth(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Déficit constaté pendant la génération (non fatal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortfallKind {
    /// Quota de repos inatteignable : plus aucun employé éligible.
    OffQuota { target: usize, reached: usize },
    /// Rôle non pourvu : plus personne de disponible ce jour-là.
    RoleUnfilled { role: ShiftKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub day: DayKey,
    pub kind: ShortfallKind,
}

/// Bilan d'une génération : les déficits rencontrés, jour par jour.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub shortfalls: Vec<Shortfall>,
}

impl GenerationReport {
    pub fn is_clean(&self) -> bool {
        self.shortfalls.is_empty()
    }
}

/// Résultat complet d'une génération.
#[derive(Debug, Clone)]
pub struct Generation {
    pub schedule: Schedule,
    pub report: GenerationReport,
}
