//! # Catalog Generation
//!
//! Builds the four-sheet flight-search catalog from hardcoded scenario
//! tables. Each scenario module owns one sheet: the raw scenario data plus
//! the step-text, description, and severity rules that expand it into full
//! records.
//!
//! Generated rows start life with `Execution Result*` of `Not Run`, empty
//! execution fields, and `Created By*` of `Test Automation Team`. The update
//! subsystem only ever touches the execution subset; everything generated
//! here is provenance.

use crate::model::{columns, ColumnSpec, Record, Workbook};

pub mod date_selection;
pub mod filter_sort;
pub mod flight_search;
pub mod multi_city;

pub const CREATED_BY: &str = "Test Automation Team";

/// Scenario importance, derived per sheet from its own heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
        }
    }
}

/// The catalog schema: thirteen columns with the display widths the original
/// spreadsheet used. Shared by all four sheets.
pub fn column_specs() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(columns::TEST_CASE_ID, 14),
        ColumnSpec::new(columns::AREA, 20),
        ColumnSpec::new(columns::TEST_CASE_NAME, 45),
        ColumnSpec::new(columns::DESCRIPTION, 60),
        ColumnSpec::new(columns::STEPS, 70),
        ColumnSpec::new(columns::EXPECTED_RESULTS, 60),
        ColumnSpec::new(columns::EXECUTION_RESULT, 16),
        ColumnSpec::new(columns::OBSERVED_RESULTS, 50),
        ColumnSpec::new(columns::SEVERITY, 18),
        ColumnSpec::new(columns::EXECUTED_BY, 15),
        ColumnSpec::new(columns::EXECUTION_DATE, 16),
        ColumnSpec::new(columns::CREATED_BY, 22),
        ColumnSpec::new(columns::COMMENTS, 40),
    ]
}

/// The full catalog: four sheets, 46 scenarios.
pub fn workbook() -> Workbook {
    Workbook {
        sheets: vec![
            flight_search::sheet(),
            filter_sort::sheet(),
            date_selection::sheet(),
            multi_city::sheet(),
        ],
    }
}

pub(crate) fn scenario_record(
    id: &str,
    area: &str,
    name: &str,
    description: String,
    steps: String,
    expected: String,
    severity: Severity,
    comment: String,
) -> Record {
    let mut record = Record::new(id)
        .with_extra(columns::AREA, area)
        .with_extra(columns::TEST_CASE_NAME, name)
        .with_extra(columns::DESCRIPTION, description)
        .with_extra(columns::STEPS, steps)
        .with_extra(columns::EXPECTED_RESULTS, expected)
        .with_extra(columns::SEVERITY, severity.as_str())
        .with_extra(columns::CREATED_BY, CREATED_BY);
    // Comments is one of the typed execution columns, not an extra.
    record.execution.comments = comment;
    record
}

/// Full airport names for step text; unknown codes fall back to
/// "{code} Airport".
pub(crate) fn airport_name(code: &str) -> String {
    let known = match code {
        "JFK" => "John F. Kennedy International Airport",
        "LAX" => "Los Angeles International Airport",
        "LHR" => "London Heathrow Airport",
        "CDG" => "Paris Charles de Gaulle Airport",
        "SFO" => "San Francisco International Airport",
        "SEA" => "Seattle-Tacoma International Airport",
        "SYD" => "Sydney Kingsford Smith Airport",
        "ORD" => "Chicago O'Hare International Airport",
        "MIA" => "Miami International Airport",
        "NRT" => "Narita International Airport",
        "DEN" => "Denver International Airport",
        "LAS" => "Las Vegas Harry Reid International Airport",
        "BOS" => "Boston Logan International Airport",
        "DCA" => "Ronald Reagan Washington National Airport",
        "FRA" => "Frankfurt Airport",
        "HKG" => "Hong Kong International Airport",
        "DUB" => "Dublin Airport",
        "ATL" => "Hartsfield-Jackson Atlanta International Airport",
        "MCO" => "Orlando International Airport",
        "DFW" => "Dallas/Fort Worth International Airport",
        "FCO" => "Rome Fiumicino Airport",
        "BCN" => "Barcelona-El Prat Airport",
        "SIN" => "Singapore Changi Airport",
        "HND" => "Tokyo Haneda Airport",
        "PHX" => "Phoenix Sky Harbor International Airport",
        _ => return format!("{} Airport", code),
    };
    known.to_string()
}

const US_AIRPORTS: [&str; 14] = [
    "JFK", "LAX", "SFO", "SEA", "ORD", "MIA", "DEN", "LAS", "BOS", "DCA", "ATL", "MCO", "DFW",
    "PHX",
];

/// A route is international unless both endpoints are US airports. Two
/// non-US endpoints also count as international.
pub(crate) fn is_international(origin: &str, destination: &str) -> bool {
    let origin_us = US_AIRPORTS.contains(&origin);
    let dest_us = US_AIRPORTS.contains(&destination);
    origin_us != dest_us || (!origin_us && !dest_us)
}

/// "2 adults, 1 child, 1 infant (lap)" phrasing for step text.
pub(crate) fn passenger_phrase(adults: u8, children: u8, infants: u8) -> String {
    let mut parts = Vec::new();
    if adults > 0 {
        parts.push(format!(
            "{} adult{}",
            adults,
            if adults > 1 { "s" } else { "" }
        ));
    }
    if children > 0 {
        parts.push(format!(
            "{} child{}",
            children,
            if children > 1 { "ren" } else { "" }
        ));
    }
    if infants > 0 {
        parts.push(format!(
            "{} infant{} (lap)",
            infants,
            if infants > 1 { "s" } else { "" }
        ));
    }
    parts.join(", ")
}
