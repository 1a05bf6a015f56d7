use crate::model::DayKey;
use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};

/// Un jour du mois cible, avec sa clé canonique et son jour de semaine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDay {
    pub date: NaiveDate,
    pub key: DayKey,
    pub weekday: Weekday,
}

impl MonthDay {
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }
}

/// Énumère tous les jours du mois `month0` (indexé depuis 0) de `year`,
/// du 1er au dernier, en ordre croissant.
///
/// Les clés sont calculées directement depuis la date civile : aucun passage
/// par un timestamp UTC, donc aucun décalage de date possible entre fuseaux.
pub fn month_days(year: i32, month0: u32) -> Result<Vec<MonthDay>> {
    if month0 > 11 {
        bail!("month index out of range: {month0} (expected 0..=11)");
    }
    let month = month0 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("invalid calendar month: {year}-{month:02}"))?;

    let mut out = Vec::new();
    let mut current = first;
    while current.month() == month {
        out.push(MonthDay {
            date: current,
            key: DayKey::from_date(current),
            weekday: current.weekday(),
        });
        current = current.succ_opt().context("date overflow")?;
    }
    Ok(out)
}

/// Vrai si `date` tombe dans le mois cible.
pub fn in_month(date: NaiveDate, year: i32, month0: u32) -> bool {
    date.year() == year && date.month0() == month0
}
