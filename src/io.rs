use crate::duration::parse_minutes;
use crate::error::SchedError;
use crate::model::Shift;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export CSV d'un planning: header `date,startTime,endTime`
pub fn write_schedule_csv<W: Write>(writer: W, schedule: &[Shift]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(writer);
    w.write_record(["date", "startTime", "endTime"])?;
    for s in schedule {
        w.write_record([s.date.as_str(), s.start_time.as_str(), s.end_time.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &[Shift]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_schedule_csv(file, schedule)
}

/// Import de créneaux: header `shiftId,date,startTime,endTime`
pub fn import_shifts_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Shift>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for (idx, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = idx + 2;
        let id = rec.get(0).context("missing shiftId")?.trim();
        let date = rec.get(1).context("missing date")?.trim();
        let start = rec.get(2).context("missing startTime")?.trim();
        let end = rec.get(3).context("missing endTime")?.trim();
        if id.is_empty() {
            bail!("invalid shift row {row} (empty shiftId)");
        }
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| SchedError::InvalidDate(date.to_string()))
            .with_context(|| format!("row {row}, shift {id}"))?;
        parse_minutes(start).with_context(|| format!("row {row}, shift {id}"))?;
        parse_minutes(end).with_context(|| format!("row {row}, shift {id}"))?;
        out.push(Shift::new(id, date, start, end));
    }
    Ok(out)
}

/// Ajoute au catalogue les créneaux dont l'identifiant est inconnu ; les
/// créneaux existants ne sont jamais modifiés. Renvoie le nombre d'ajouts.
pub fn merge_shifts(catalog: &mut Vec<Shift>, incoming: Vec<Shift>) -> usize {
    let mut known: HashSet<_> = catalog.iter().map(|s| s.shift_id.clone()).collect();
    let before = catalog.len();
    for s in incoming {
        if known.insert(s.shift_id.clone()) {
            catalog.push(s);
        } else {
            tracing::debug!(shift = %s.shift_id, "shift already in catalog, skipped");
        }
    }
    catalog.len() - before
}
