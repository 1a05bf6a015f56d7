use super::random::RandomSource;
use super::types::{EngineConfig, GenerationReport, Shortfall, ShortfallKind};
use crate::calendar::MonthDay;
use crate::model::{Employee, Highlight, Schedule, ShiftCell, ShiftKind};
use tracing::warn;

const ROLE_ORDER: [ShiftKind; 3] = [ShiftKind::Early, ShiftKind::Clean, ShiftKind::Inspect];

/// Étape de rotation : pour chaque jour, attribue dans l'ordre fixe
/// matinale → ménage → contrôle un rôle à un employé tiré au sort parmi les
/// présents (ni en repos, ni exempté, cellule encore vide).
///
/// Le tiré quitte la réserve du jour même si sa cellule n'a pas changé :
/// personne ne cumule deux rôles. Réserve vide ⇒ rôle non pourvu ce jour-là.
pub(super) fn rotate(
    config: &EngineConfig,
    days: &[MonthDay],
    schedule: &mut Schedule,
    rng: &mut dyn RandomSource,
    report: &mut GenerationReport,
) {
    for day in days {
        let mut pool: Vec<Employee> = config
            .roster
            .iter()
            .filter(|e| {
                let on_duty = schedule
                    .cell(&day.key, e)
                    .map(|cell| cell.kind != ShiftKind::Off)
                    .unwrap_or(false);
                on_duty && !config.exemptions.role_exempt.contains(*e)
            })
            .cloned()
            .collect();

        for role in ROLE_ORDER {
            let candidates: Vec<usize> = pool
                .iter()
                .enumerate()
                .filter(|(_, e)| {
                    schedule
                        .cell(&day.key, e)
                        .map(|cell| cell.kind.is_empty())
                        .unwrap_or(false)
                })
                .map(|(i, _)| i)
                .collect();

            if candidates.is_empty() {
                warn!(day = %day.key, ?role, "daily role left unfilled");
                report.shortfalls.push(Shortfall {
                    day: day.key.clone(),
                    kind: ShortfallKind::RoleUnfilled { role },
                });
                continue;
            }

            let chosen = pool.remove(candidates[rng.pick(candidates.len())]);
            if let Some(cell) = schedule.cell_mut(&day.key, &chosen) {
                if cell.kind.is_empty() {
                    *cell = ShiftCell {
                        kind: role,
                        highlight: Highlight::None,
                        fixed: false,
                    };
                }
            }
        }
    }
}
