use super::types::{EngineConfig, EngineError};
use crate::calendar::{self, MonthDay};
use crate::model::{DayKey, Employee, Highlight, Schedule, ShiftCell, ShiftKind, ShiftRequests};
use std::collections::{BTreeMap, BTreeSet};

/// Repos effectifs par employé : les repos demandés, plus les week-ends
/// injectés pour les employés de l'exemption `weekend_off`.
pub(super) type OffMap = BTreeMap<Employee, BTreeSet<DayKey>>;

/// Rejette toute entrée malformée : employé hors roster, clé non parsable,
/// clé hors du mois de génération.
pub(super) fn validate(
    config: &EngineConfig,
    requests: &ShiftRequests,
) -> Result<(), EngineError> {
    let maps = [&requests.preferred_days, &requests.off_days];
    for map in maps {
        for (employee, days) in map {
            if !config.roster.contains(employee) {
                return Err(EngineError::UnknownEmployee(employee.as_str().to_owned()));
            }
            for key in days {
                let date = key
                    .to_date()
                    .ok_or_else(|| EngineError::InvalidDayKey(key.as_str().to_owned()))?;
                if !calendar::in_month(date, config.year, config.month0) {
                    return Err(EngineError::DayOutOfMonth(key.as_str().to_owned()));
                }
            }
        }
    }
    Ok(())
}

pub(super) fn effective_off_days(
    config: &EngineConfig,
    days: &[MonthDay],
    requests: &ShiftRequests,
) -> OffMap {
    let mut offs = requests.off_days.clone();
    for employee in &config.exemptions.weekend_off {
        let entry = offs.entry(employee.clone()).or_default();
        for day in days.iter().filter(|d| d.is_weekend()) {
            entry.insert(day.key.clone());
        }
    }
    offs
}

/// Étape de préférences : pose les repos demandés (fixés) puis les souhaits
/// de travail, sans jamais réécrire une cellule fixée. Idempotente.
pub(super) fn apply(
    config: &EngineConfig,
    days: &[MonthDay],
    requests: &ShiftRequests,
    schedule: &mut Schedule,
) -> Result<OffMap, EngineError> {
    validate(config, requests)?;
    let offs = effective_off_days(config, days, requests);

    for employee in config.roster.iter() {
        if let Some(requested) = offs.get(employee) {
            for day in requested {
                let highlight = if config.exemptions.muted_highlight.contains(employee) {
                    Highlight::None
                } else {
                    Highlight::Off
                };
                if let Some(cell) = schedule.cell_mut(day, employee) {
                    *cell = ShiftCell::off(highlight, true);
                }
            }
        }
        if let Some(preferred) = requests.preferred_days.get(employee) {
            for day in preferred {
                if let Some(cell) = schedule.cell_mut(day, employee) {
                    // Un repos demandé prime sur un souhait de travail.
                    if !cell.fixed {
                        *cell = ShiftCell {
                            kind: ShiftKind::Empty,
                            highlight: Highlight::Preferred,
                            fixed: false,
                        };
                    }
                }
            }
        }
    }
    Ok(offs)
}
