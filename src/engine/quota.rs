use super::preferences::OffMap;
use super::random::RandomSource;
use super::types::{EngineConfig, GenerationReport, Shortfall, ShortfallKind};
use crate::calendar::MonthDay;
use crate::model::{Employee, Highlight, Schedule, ShiftCell};
use tracing::warn;

/// Étape de quota : complète les repos jour par jour, en ordre calendaire,
/// jusqu'à la cible (2 en semaine, roster − effectif de service le week-end).
///
/// Les repos déjà posés par l'étape de préférences comptent dans le quota.
/// Aucun rééquilibrage inter-jours ni comptage hebdomadaire : l'équité sur
/// la semaine est explicitement hors périmètre.
pub(super) fn fill(
    config: &EngineConfig,
    days: &[MonthDay],
    offs: &OffMap,
    schedule: &mut Schedule,
    rng: &mut dyn RandomSource,
    report: &mut GenerationReport,
) {
    for day in days {
        let target = if day.is_weekend() {
            config.weekend_off_target()
        } else {
            config.weekday_off
        };

        let mut reached = schedule.off_count(&day.key);
        while reached < target {
            let eligible: Vec<&Employee> = config
                .roster
                .iter()
                .filter(|e| {
                    let untouched = schedule
                        .cell(&day.key, e)
                        .map(|cell| cell.kind.is_empty())
                        .unwrap_or(false);
                    let requested_off = offs.get(*e).is_some_and(|set| set.contains(&day.key));
                    untouched && !requested_off
                })
                .collect();

            if eligible.is_empty() {
                // Quota inatteignable : on s'arrête, ce n'est pas une erreur.
                warn!(day = %day.key, target, reached, "off quota under-filled");
                report.shortfalls.push(Shortfall {
                    day: day.key.clone(),
                    kind: ShortfallKind::OffQuota { target, reached },
                });
                break;
            }

            let chosen = eligible[rng.pick(eligible.len())].clone();
            if let Some(cell) = schedule.cell_mut(&day.key, &chosen) {
                *cell = ShiftCell::off(Highlight::None, false);
            }
            reached += 1;
        }
    }
}
