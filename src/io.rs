use crate::engine::EngineConfig;
use crate::model::{DayKey, Employee, Roster, Schedule, ShiftKind, ShiftRequests};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de souhaits depuis CSV : header `employee,kind,date` avec
/// `kind` ∈ {preferred, off} et `date` au format `YYYY-MM-DD`.
pub fn import_requests_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<ShiftRequests> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = ShiftRequests::default();
    for rec in rdr.records() {
        let rec = rec?;
        let employee = rec.get(0).context("missing employee")?.trim();
        let kind = rec.get(1).context("missing kind")?.trim();
        let date = rec.get(2).context("missing date")?.trim();
        if employee.is_empty() || date.is_empty() {
            bail!("invalid request row (empty)");
        }
        let key = DayKey::new(date);
        if key.to_date().is_none() {
            bail!("invalid date: {date}");
        }
        let bucket = match kind.to_ascii_lowercase().as_str() {
            "preferred" | "work" => &mut out.preferred_days,
            "off" | "rest" => &mut out.off_days,
            other => bail!("invalid request kind: {other} (expected preferred|off)"),
        };
        bucket
            .entry(Employee::new(employee))
            .or_default()
            .insert(key);
    }
    Ok(out)
}

/// Export JSON du planning (jolie mise en forme).
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Libellé d'affichage d'une cellule, glyphes du déploiement de référence.
pub fn display_label(kind: ShiftKind) -> &'static str {
    match kind {
        ShiftKind::Empty => "",
        ShiftKind::Off => "公",
        ShiftKind::Early => "早",
        ShiftKind::Clean => "★",
        ShiftKind::Inspect => "検",
    }
}

/// Export CSV de la grille : une ligne par employé (ordre du roster), une
/// colonne par jour, cellules en glyphes.
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    schedule: &Schedule,
    roster: &Roster,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;

    let mut header = vec!["employee".to_string()];
    header.extend(schedule.days().map(|d| d.as_str().to_string()));
    w.write_record(&header)?;

    for employee in roster.iter() {
        let mut row = vec![employee.as_str().to_string()];
        for day in schedule.days() {
            let label = schedule
                .cell(day, employee)
                .map(|cell| display_label(cell.kind))
                .unwrap_or("");
            row.push(label.to_string());
        }
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}

/// Charge et valide une configuration moteur depuis un fichier JSON.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<EngineConfig> {
    let data = fs::read(&path)
        .with_context(|| format!("reading config {}", path.as_ref().display()))?;
    let config: EngineConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.as_ref().display()))?;
    config.validate()?;
    Ok(config)
}

/// Export JSON d'une configuration moteur.
pub fn export_config_json<P: AsRef<Path>>(path: P, config: &EngineConfig) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
