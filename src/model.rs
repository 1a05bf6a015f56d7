use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Identifiant fort pour un employé (le nom affiché sert d'identifiant).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Employee(String);

impl Employee {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clé canonique d'une date civile locale, format `YYYY-MM-DD`.
///
/// L'ordre lexicographique coïncide avec l'ordre chronologique (zéro-padding),
/// ce qui rend les `BTreeMap` indexées par `DayKey` triées calendrier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }

    /// Clé dérivée directement de la date civile (jamais d'un timestamp UTC).
    pub fn from_date(date: chrono::NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    /// Re-parse la clé vers la date civile d'origine (aller-retour exact).
    pub fn to_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contenu d'une cellule : repos, l'un des trois rôles, ou rien.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftKind {
    #[default]
    #[serde(rename = "")]
    Empty,
    #[serde(rename = "off")]
    Off,
    #[serde(rename = "early")]
    Early,
    #[serde(rename = "clean")]
    Clean,
    #[serde(rename = "inspect")]
    Inspect,
}

impl ShiftKind {
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
    pub fn is_role(self) -> bool {
        matches!(self, Self::Early | Self::Clean | Self::Inspect)
    }
}

/// Indication de présentation portée par la cellule (surlignage).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "preferred-highlight")]
    Preferred,
    #[serde(rename = "off-highlight")]
    Off,
}

/// État d'une paire (employé, jour).
///
/// `fixed` n'est vrai que pour un repos issu d'un souhait explicite : une
/// telle cellule n'est jamais réécrite par les étapes automatiques.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCell {
    #[serde(rename = "type")]
    pub kind: ShiftKind,
    #[serde(rename = "classname", default)]
    pub highlight: Highlight,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fixed: bool,
}

impl ShiftCell {
    pub fn off(highlight: Highlight, fixed: bool) -> Self {
        Self {
            kind: ShiftKind::Off,
            highlight,
            fixed,
        }
    }
}

/// Liste ordonnée des employés planifiables.
///
/// L'ordre sert d'itération déterministe de repli ; aucune autre propriété.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            employees: names.into_iter().map(Employee::new).collect(),
        }
    }

    pub fn contains(&self, employee: &Employee) -> bool {
        self.employees.contains(employee)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }
}

/// Souhaits soumis par les employés : jours de travail préférés et repos
/// demandés. Un repos demandé prime toujours sur un souhait de travail pour
/// la même paire (employé, jour).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRequests {
    #[serde(default)]
    pub preferred_days: BTreeMap<Employee, BTreeSet<DayKey>>,
    #[serde(default)]
    pub off_days: BTreeMap<Employee, BTreeSet<DayKey>>,
}

impl ShiftRequests {
    pub fn is_empty(&self) -> bool {
        self.preferred_days.is_empty() && self.off_days.is_empty()
    }
}

/// Planning complet : jour → (employé → cellule).
///
/// Invariant : fonction totale — chaque jour du mois porte une cellule pour
/// chaque employé du roster, vide par défaut.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    cells: BTreeMap<DayKey, BTreeMap<Employee, ShiftCell>>,
}

impl Schedule {
    /// Planning vierge couvrant `days` × `roster`.
    pub fn blank<'a, I>(days: I, roster: &Roster) -> Self
    where
        I: IntoIterator<Item = &'a DayKey>,
    {
        let mut cells = BTreeMap::new();
        for day in days {
            let row: BTreeMap<Employee, ShiftCell> = roster
                .iter()
                .map(|e| (e.clone(), ShiftCell::default()))
                .collect();
            cells.insert(day.clone(), row);
        }
        Self { cells }
    }

    pub fn day(&self, day: &DayKey) -> Option<&BTreeMap<Employee, ShiftCell>> {
        self.cells.get(day)
    }

    pub fn cell(&self, day: &DayKey, employee: &Employee) -> Option<&ShiftCell> {
        self.cells.get(day).and_then(|row| row.get(employee))
    }

    pub fn cell_mut(&mut self, day: &DayKey, employee: &Employee) -> Option<&mut ShiftCell> {
        self.cells.get_mut(day).and_then(|row| row.get_mut(employee))
    }

    /// Nombre de cellules `Off` pour un jour (souhaits fixés compris).
    pub fn off_count(&self, day: &DayKey) -> usize {
        self.cells
            .get(day)
            .map(|row| {
                row.values()
                    .filter(|cell| cell.kind == ShiftKind::Off)
                    .count()
            })
            .unwrap_or(0)
    }

    pub fn days(&self) -> impl Iterator<Item = &DayKey> {
        self.cells.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DayKey, &BTreeMap<Employee, ShiftCell>)> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
