use crate::model::{DayKey, Employee, Highlight, Schedule, ShiftCell, ShiftKind, ShiftRequests};
use std::collections::BTreeMap;

/// Mode d'édition courant de la grille (clic sur une cellule).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Marquer un souhait de travail.
    Preferred,
    /// Marquer un repos demandé.
    Off,
    /// Effacer la cellule.
    Clear,
}

/// Copie de travail côté client : une grille creuse éditée cellule par
/// cellule, indépendante du moteur.
///
/// C'est elle qui extrait les souhaits envoyés à la génération, puis fusionne
/// le planning généré sans écraser les marquages explicites locaux.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingGrid {
    cells: BTreeMap<DayKey, BTreeMap<Employee, ShiftCell>>,
}

impl WorkingGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, day: &DayKey, employee: &Employee) -> Option<&ShiftCell> {
        self.cells.get(day).and_then(|row| row.get(employee))
    }

    /// Réducteur de clic : chaque mode écrit (ou efface) la cellule visée.
    pub fn click(&mut self, employee: &Employee, day: &DayKey, mode: EditMode) {
        match mode {
            EditMode::Preferred => {
                self.cells.entry(day.clone()).or_default().insert(
                    employee.clone(),
                    ShiftCell {
                        kind: ShiftKind::Empty,
                        highlight: Highlight::Preferred,
                        fixed: false,
                    },
                );
            }
            EditMode::Off => {
                self.cells
                    .entry(day.clone())
                    .or_default()
                    .insert(employee.clone(), ShiftCell::off(Highlight::Off, false));
            }
            EditMode::Clear => {
                if let Some(row) = self.cells.get_mut(day) {
                    row.remove(employee);
                    if row.is_empty() {
                        self.cells.remove(day);
                    }
                }
            }
        }
    }

    /// Souhaits portés par la grille, déduits des surlignages : c'est le
    /// corps envoyé à la génération.
    pub fn requests(&self) -> ShiftRequests {
        let mut out = ShiftRequests::default();
        for (day, row) in &self.cells {
            for (employee, cell) in row {
                let bucket = match cell.highlight {
                    Highlight::Preferred => &mut out.preferred_days,
                    Highlight::Off => &mut out.off_days,
                    Highlight::None => continue,
                };
                bucket
                    .entry(employee.clone())
                    .or_default()
                    .insert(day.clone());
            }
        }
        out
    }

    /// Fusionne un planning généré : une cellule locale surlignée (souhait de
    /// travail ou de repos) est conservée, toute autre est remplacée par le
    /// résultat du moteur. Contrat de frontière côté appelant ; le moteur ne
    /// lit jamais cet état.
    pub fn merge_generated(&mut self, generated: &Schedule) {
        for (day, row) in generated.iter() {
            let local = self.cells.entry(day.clone()).or_default();
            for (employee, cell) in row {
                let keep_local = local
                    .get(employee)
                    .map(|c| matches!(c.highlight, Highlight::Preferred | Highlight::Off))
                    .unwrap_or(false);
                if !keep_local {
                    local.insert(employee.clone(), *cell);
                }
            }
        }
    }
}
