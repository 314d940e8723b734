//! CSV roster loading.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    EmployeeRecord, NationalityStatus, NineBoxCategory, PerformanceRating, SkillLevel,
};

/// The fixed, consecutive annual review periods carried on the roster.
pub const REVIEW_PERIODS: [&str; 3] = ["2021", "2022", "2023"];

/// Placeholder the source roster uses for missing values.
const NA_PLACEHOLDER: &str = "#n/a";

/// Loads a roster CSV file into typed employee records.
///
/// Rows with neither a personnel ID nor a display name are skipped. All
/// other per-field problems degrade to absent values; the only errors are
/// file-level:
///
/// - [`EngineError::RosterNotFound`] when the file does not exist
/// - [`EngineError::RosterReadError`] when the file cannot be read as
///   delimited records
///
/// # Example
///
/// ```no_run
/// use talent_engine::ingest::load_roster;
///
/// let roster = load_roster("./data/talent_roster.csv").unwrap();
/// println!("Loaded {} employees", roster.len());
/// ```
pub fn load_roster<P: AsRef<Path>>(path: P) -> EngineResult<Vec<EmployeeRecord>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    if !path.exists() {
        return Err(EngineError::RosterNotFound { path: path_str });
    }

    let content = std::fs::read_to_string(path).map_err(|e| EngineError::RosterReadError {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    parse_records(&content, &path_str)
}

/// Parses roster CSV text into typed employee records.
///
/// Same semantics as [`load_roster`], for in-memory sources.
pub fn parse_roster(text: &str) -> EngineResult<Vec<EmployeeRecord>> {
    parse_records(text, "<inline>")
}

fn parse_records(text: &str, source: &str) -> EngineResult<Vec<EmployeeRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| EngineError::RosterReadError {
            path: source.to_string(),
            message: e.to_string(),
        })?
        .clone();
    let columns = ColumnMap::new(&headers);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| EngineError::RosterReadError {
            path: source.to_string(),
            message: e.to_string(),
        })?;

        if let Some(record) = extract_record(&columns, &row) {
            records.push(record);
        }
    }

    Ok(records)
}

/// Maps normalized header names to column indices.
///
/// Normalization trims, lowercases and collapses runs of whitespace, so the
/// source roster's headers ("Department ", "2021 perfromance ") resolve
/// without exact-spelling lookups.
struct ColumnMap {
    indices: HashMap<String, usize>,
}

impl ColumnMap {
    fn new(headers: &csv::StringRecord) -> Self {
        let mut indices = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            // First occurrence wins for duplicated headers
            indices.entry(normalize_header(header)).or_insert(index);
        }
        Self { indices }
    }

    /// Returns the first non-empty, non-placeholder value among the aliases.
    fn field<'a>(&self, row: &'a csv::StringRecord, aliases: &[&str]) -> Option<&'a str> {
        aliases
            .iter()
            .filter_map(|alias| self.indices.get(*alias))
            .filter_map(|&index| row.get(index))
            .map(str::trim)
            .find(|value| !value.is_empty() && value.to_lowercase() != NA_PLACEHOLDER)
    }
}

fn normalize_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn extract_record(columns: &ColumnMap, row: &csv::StringRecord) -> Option<EmployeeRecord> {
    let id = columns.field(row, &["personnel no.", "personnel no", "id"]);
    let name = columns.field(row, &["employee(s)", "employee", "name"]);

    // Analog of the source's skipEmptyLines: a row carrying neither an ID
    // nor a name is not a record
    if id.is_none() && name.is_none() {
        return None;
    }

    let ratings = REVIEW_PERIODS.map(|year| {
        // Both the corrected spelling and the source roster's typo resolve
        let corrected = format!("{} performance", year);
        let original = format!("{} perfromance", year);
        columns
            .field(row, &[corrected.as_str(), original.as_str()])
            .and_then(PerformanceRating::from_label)
    });

    Some(EmployeeRecord {
        id: id.unwrap_or_default().to_string(),
        name: name.unwrap_or_default().to_string(),
        position: columns
            .field(row, &["positions", "position"])
            .unwrap_or_default()
            .to_string(),
        department: columns.field(row, &["department"]).map(str::to_string),
        function: columns.field(row, &["function"]).map(str::to_string),
        team: columns.field(row, &["team"]).map(str::to_string),
        grade: columns.field(row, &["grade"]).map(str::to_string),
        tenure_years: columns
            .field(row, &["years of experience", "tenure"])
            .and_then(parse_tenure),
        entry_date: columns.field(row, &["entry date"]).and_then(parse_entry_date),
        nationality: columns
            .field(row, &["omani/expat", "nationality"])
            .map(NationalityStatus::from_label)
            .unwrap_or_default(),
        nine_box: columns
            .field(row, &["9 box matrix", "9-box", "nine box"])
            .map(NineBoxCategory::from_label)
            .unwrap_or_default(),
        skill_level: columns
            .field(row, &["skill level", "skill"])
            .map(SkillLevel::from_label)
            .unwrap_or_default(),
        is_successor: EmployeeRecord::successor_flag(columns.field(row, &["successor"])),
        succession_target: columns
            .field(row, &["succession position", "succession target"])
            .map(str::to_string),
        ratings,
    })
}

fn parse_tenure(value: &str) -> Option<Decimal> {
    value
        .parse::<Decimal>()
        .ok()
        .filter(|d| !d.is_sign_negative())
}

fn parse_entry_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d.%m.%Y"))
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Personnel no.,Employee(s),Positions,Department ,Grade,Entry Date,Years of experience,Omani/Expat,9 box matrix,Skill level,Successor,succession position,2021 perfromance ,2022 perfromance ,2023 performance
10042,Amina Al Busaidi,Process Engineer,Operations,G5,2019-02-10,6.5,Omani,Hi-Potential,Advanced,YES,Lead Process Engineer,Achieved Target,Exceed Target,Exceptional
10043,Daniel Mwangi,Maintenance Planner,Operations,G6,2021-08-01,4,Expat,Promising,Intermediate,no,,Achieved Target,Achieved Target,Exceed Target
10044,Laila Hassan,HR Analyst,People,G7,2022-01-15,2,Omani,#N/A,,,,Unrated,#N/A,Achieved Target
";

    #[test]
    fn test_parse_roster_row_count() {
        let roster = parse_roster(SAMPLE).unwrap();
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_typed_fields_extracted() {
        let roster = parse_roster(SAMPLE).unwrap();
        let amina = &roster[0];

        assert_eq!(amina.id, "10042");
        assert_eq!(amina.name, "Amina Al Busaidi");
        assert_eq!(amina.position, "Process Engineer");
        assert_eq!(amina.department.as_deref(), Some("Operations"));
        assert_eq!(amina.nationality, NationalityStatus::Local);
        assert_eq!(amina.nine_box, NineBoxCategory::HiPotential);
        assert_eq!(amina.skill_level, SkillLevel::Advanced);
        assert!(amina.is_successor);
        assert_eq!(amina.succession_target.as_deref(), Some("Lead Process Engineer"));
        assert_eq!(amina.tenure_years, Some(Decimal::new(65, 1)));
        assert_eq!(amina.entry_date, NaiveDate::from_ymd_opt(2019, 2, 10));
    }

    #[test]
    fn test_misspelled_and_corrected_rating_headers_both_resolve() {
        let roster = parse_roster(SAMPLE).unwrap();
        assert_eq!(
            roster[0].ratings,
            [
                Some(PerformanceRating::AchievedTarget),
                Some(PerformanceRating::ExceedTarget),
                Some(PerformanceRating::Exceptional),
            ]
        );
    }

    #[test]
    fn test_placeholders_and_blanks_become_absent() {
        let roster = parse_roster(SAMPLE).unwrap();
        let laila = &roster[2];

        assert_eq!(laila.nine_box, NineBoxCategory::Unknown);
        assert_eq!(laila.skill_level, SkillLevel::Unknown);
        assert!(!laila.is_successor);
        assert!(laila.succession_target.is_none());
        // Explicit Unrated is recognized; #N/A is absence
        assert_eq!(laila.ratings[0], Some(PerformanceRating::Unrated));
        assert_eq!(laila.ratings[1], None);
        assert_eq!(laila.ratings[2], Some(PerformanceRating::AchievedTarget));
    }

    #[test]
    fn test_non_yes_successor_is_false() {
        let roster = parse_roster(SAMPLE).unwrap();
        assert!(!roster[1].is_successor);
    }

    #[test]
    fn test_rows_without_id_or_name_are_skipped() {
        let text = "\
Personnel no.,Employee(s),Positions
,,
10050,Omar Said,Technician
";
        let roster = parse_roster(text).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "10050");
    }

    #[test]
    fn test_missing_columns_degrade_to_defaults() {
        let text = "\
Personnel no.,Employee(s)
10060,Sara Nasser
";
        let roster = parse_roster(text).unwrap();
        let sara = &roster[0];
        assert_eq!(sara.position, "");
        assert_eq!(sara.nine_box, NineBoxCategory::Unknown);
        assert_eq!(sara.ratings, [None, None, None]);
        assert!(sara.tenure_years.is_none());
    }

    #[test]
    fn test_negative_tenure_is_rejected() {
        assert_eq!(parse_tenure("-1"), None);
        assert_eq!(parse_tenure("3.5"), Some(Decimal::new(35, 1)));
        assert_eq!(parse_tenure("n/a"), None);
    }

    #[test]
    fn test_entry_date_formats() {
        assert_eq!(
            parse_entry_date("2019-02-10"),
            NaiveDate::from_ymd_opt(2019, 2, 10)
        );
        assert_eq!(
            parse_entry_date("10.02.2019"),
            NaiveDate::from_ymd_opt(2019, 2, 10)
        );
        assert_eq!(parse_entry_date("Feb 2019"), None);
    }

    #[test]
    fn test_load_roster_missing_file_returns_not_found() {
        let result = load_roster("/nonexistent/roster.csv");
        match result {
            Err(EngineError::RosterNotFound { path }) => {
                assert!(path.contains("roster.csv"));
            }
            other => panic!("Expected RosterNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_sample_roster_file() {
        let roster = load_roster("./data/talent_roster.csv").unwrap();
        assert!(!roster.is_empty());
        assert!(roster.iter().any(|r| r.id == "10042"));
    }
}
