//! Indicator CSV loading
//!
//! Rows are deserialized with serde from a header-addressed CSV. `country` and
//! `date` (or `year`) must be present; every metric column is optional and a
//! missing one reads as `None` for all rows. A cell that is not a number reads
//! as `None`, and a row whose key cannot be read is skipped with a warning.

use std::io::Read;
use std::path::Path;

use crate::error::{DashboardError, Result};
use crate::types::{Indicator, IndicatorRecord};

/// Columns without which no row can be keyed
const REQUIRED_COLUMNS: &[&[&str]] = &[&["country"], &["date", "year"]];

/// Load the indicator table from a CSV file
pub fn load_indicators(path: &Path) -> Result<Vec<IndicatorRecord>> {
    let file = super::open_source(path)?;
    read_indicators(file, path)
}

/// Read the indicator table from any reader; `source` is only used in messages
pub fn read_indicators<R: Read>(reader: R, source: &Path) -> Result<Vec<IndicatorRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    check_columns(&headers, source)?;
    rdr.set_headers(year_header(&headers));

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in rdr.deserialize::<IndicatorRecord>() {
        match row {
            Ok(record) => records.push(record.normalize()),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Deserialize { .. }) => {
                tracing::warn!("Skipping unreadable row in {}: {}", source.display(), e);
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!(
        "Read {} indicator rows from {} ({} skipped)",
        records.len(),
        source.display(),
        skipped
    );
    Ok(records)
}

/// Key the year on `date`; a `year` column is only used when `date` is absent
fn year_header(headers: &csv::StringRecord) -> csv::StringRecord {
    let has_date = headers.iter().any(|h| h == "date");
    headers
        .iter()
        .map(|h| match h {
            "year" if has_date => "year_unused",
            "year" => "date",
            other => other,
        })
        .collect()
}

fn check_columns(headers: &csv::StringRecord, source: &Path) -> Result<()> {
    let has = |name: &str| headers.iter().any(|h| h == name);

    for alternatives in REQUIRED_COLUMNS {
        if !alternatives.iter().any(|name| has(name)) {
            return Err(DashboardError::MissingColumn {
                column: alternatives[0].to_string(),
                path: source.to_path_buf(),
            });
        }
    }

    let missing: Vec<&str> = Indicator::all()
        .iter()
        .map(|i| i.column())
        // log_avg_gdp is derived from avg_gdp when absent
        .filter(|column| *column != Indicator::LogAvgGdp.column())
        .filter(|column| !has(column))
        .collect();
    if !missing.is_empty() {
        tracing::warn!(
            "{} has no column(s) {}; their charts will be empty",
            source.display(),
            missing.join(", ")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "country,date,tfr,avg_gdp,log_avg_gdp,gini,population_density,\
primary_education,secondary_education,contraceptive_prevalence,life_expectancy,\
adolescent_fertility_rate,female_male_labor,tfr_diff";

    fn read(text: &str) -> Result<Vec<IndicatorRecord>> {
        read_indicators(text.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_read_full_row() {
        let csv = format!(
            "{HEADER}\nJapan,2020,1.33,40000,10.6,32.9,347,98,99,,84.6,2.9,71.6,-0.8\n"
        );
        let rows = read(&csv).unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.country, "Japan");
        assert_eq!(row.year, 2020);
        assert_eq!(row.tfr, Some(1.33));
        assert_eq!(row.contraceptive_prevalence, None);
        assert_eq!(row.tfr_diff, Some(-0.8));
    }

    #[test]
    fn test_blank_cells_are_none() {
        let csv = format!("{HEADER}\nChad,1970,,,,,,,,,,,,\n");
        let rows = read(&csv).unwrap();
        assert_eq!(rows[0].tfr, None);
        assert_eq!(rows[0].log_avg_gdp, None);
    }

    #[test]
    fn test_year_alias_and_extra_columns() {
        let csv = "country,year,tfr,population,gdp\nPeru,1990,3.8,21000000,26000000000\n";
        let rows = read(csv).unwrap();
        assert_eq!(rows[0].year, 1990);
        assert_eq!(rows[0].tfr, Some(3.8));
        assert_eq!(rows[0].gini, None);
    }

    #[test]
    fn test_missing_country_column_is_fatal() {
        let err = read("name,date,tfr\nPeru,1990,3.8\n").unwrap_err();
        assert!(matches!(err, DashboardError::MissingColumn { ref column, .. } if column == "country"));
    }

    #[test]
    fn test_missing_year_column_is_fatal() {
        let err = read("country,tfr\nPeru,3.8\n").unwrap_err();
        assert!(matches!(err, DashboardError::MissingColumn { ref column, .. } if column == "date"));
    }

    #[test]
    fn test_non_numeric_metric_is_none() {
        let rows = read("country,date,tfr,gini\nPeru,1990,..,lots\nPeru,2000,2.9,49.1\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tfr, None);
        assert_eq!(rows[0].gini, None);
        assert_eq!(rows[1].tfr, Some(2.9));
    }

    #[test]
    fn test_date_and_year_columns_together() {
        let rows = read("country,date,year,tfr\nPeru,1990,1991,3.8\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, 1990);
    }

    #[test]
    fn test_unreadable_year_skips_row() {
        let rows = read("country,date,tfr\nPeru,soon,3.8\nChile,1990,2.6\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country, "Chile");
    }
}
