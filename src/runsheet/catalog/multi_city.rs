//! The `MultiCity` sheet: multi-segment itinerary scenarios.

use super::{airport_name, column_specs, scenario_record, Severity};
use crate::model::Sheet;

pub const SHEET_NAME: &str = "MultiCity";
pub const AREA: &str = "Multi-City Booking";

struct Segment {
    origin: String,
    destination: String,
    date: String,
}

struct Scenario {
    id: &'static str,
    name: &'static str,
    /// Up to four slots of "JFK to LAX, +21 days"; a slot can carry several
    /// semicolon-separated legs, and "N/A" marks an unused slot.
    segments: [&'static str; 4],
    expected: &'static str,
    comment: &'static str,
}

#[rustfmt::skip]
const SCENARIOS: [Scenario; 10] = [
    Scenario { id: "MC-001", name: "US Triangle - 3 segments", segments: ["JFK to LAX, +21 days", "LAX to ORD, +25 days", "ORD to JFK, +29 days", "N/A"], expected: "Multi-city search returns options for all 3 segments", comment: "Basic US multi-city triangle" },
    Scenario { id: "MC-002", name: "European Tour - 4 segments", segments: ["LHR to CDG, +30 days", "CDG to FCO, +34 days", "FCO to BCN, +38 days", "BCN to LHR, +42 days"], expected: "Full European itinerary with 4 flights displayed", comment: "European tour itinerary" },
    Scenario { id: "MC-003", name: "Open jaw international - No return to origin", segments: ["SFO to NRT, +28 days", "HND to SIN, +35 days", "SIN to SFO, +42 days", "N/A"], expected: "Open jaw trip allowed, ends at different city than start", comment: "Open jaw routing" },
    Scenario { id: "MC-004", name: "Transatlantic multi-city", segments: ["JFK to LHR, +21 days", "LHR to CDG, +25 days", "CDG to JFK, +30 days", "N/A"], expected: "International multi-city with return to origin", comment: "Transatlantic multi-city" },
    Scenario { id: "MC-005", name: "Same-day connection segments", segments: ["LAX to DEN, +21 days", "DEN to ORD, +21 days", "ORD to JFK, +24 days", "N/A"], expected: "Same-day connections handled, may show tight connection warning", comment: "Same-day segments test" },
    Scenario { id: "MC-006", name: "Large date gaps between segments", segments: ["BOS to MIA, +14 days", "MIA to DEN, +28 days", "DEN to BOS, +42 days", "N/A"], expected: "Large gaps between segments allowed for multi-city", comment: "Large gap multi-city" },
    Scenario { id: "MC-007", name: "Asia-Pacific tour - 4 segments", segments: ["LAX to NRT, +30 days", "NRT to HKG, +35 days", "HKG to SIN, +40 days", "SIN to LAX, +45 days"], expected: "Complex Asia-Pacific routing with return to US", comment: "Asia-Pacific tour" },
    Scenario { id: "MC-008", name: "Mixed domestic and international", segments: ["JFK to LAX, +21 days", "LAX to NRT, +25 days", "NRT to JFK, +35 days", "N/A"], expected: "Mixed routing with domestic and international segments", comment: "Mixed routing test" },
    Scenario { id: "MC-009", name: "Maximum segments test - 5 segments", segments: ["JFK to ORD, +14 days", "ORD to DEN, +17 days", "DEN to LAX, +20 days", "LAX to SEA, +23 days; SEA to JFK, +26 days"], expected: "System handles maximum allowed segments", comment: "Maximum segments boundary" },
    Scenario { id: "MC-010", name: "Remove and add segment", segments: ["ATL to DFW, +21 days", "DFW to PHX, +24 days", "PHX to ATL, +27 days", "N/A"], expected: "Can remove middle segment and add new one without data loss", comment: "Segment modification test" },
];

pub fn sheet() -> Sheet {
    let rows = SCENARIOS
        .iter()
        .map(|s| {
            scenario_record(
                s.id,
                AREA,
                s.name,
                description(s),
                steps(s),
                format!(
                    "{}. All flight segments are searchable and display pricing.",
                    s.expected
                ),
                severity(s),
                s.comment.to_string(),
            )
        })
        .collect();
    Sheet {
        name: SHEET_NAME.to_string(),
        columns: column_specs(),
        rows,
    }
}

fn parse_slot(slot: &str) -> Vec<Segment> {
    if slot == "N/A" {
        return Vec::new();
    }
    slot.split(';')
        .filter_map(|leg| {
            let leg = leg.trim();
            let (origin, rest) = leg.split_once(" to ")?;
            let (destination, date) = rest.split_once(", ")?;
            Some(Segment {
                origin: origin.to_string(),
                destination: destination.to_string(),
                date: date.to_string(),
            })
        })
        .collect()
}

fn all_segments(s: &Scenario) -> Vec<Segment> {
    s.segments.iter().flat_map(|slot| parse_slot(slot)).collect()
}

fn steps(s: &Scenario) -> String {
    let segments = all_segments(s);

    let mut steps = vec![
        "1. Navigate to https://www.google.com/travel/flights".to_string(),
        "2. Click on trip type dropdown and select \"Multi-city\"".to_string(),
        "3. Wait for multi-city form to load".to_string(),
    ];

    let mut n = 4;
    let last = segments.len().saturating_sub(1);
    for (i, seg) in segments.iter().enumerate() {
        steps.push(format!(
            "{}. For segment {}: Click origin field and enter \"{}\"",
            n,
            i + 1,
            seg.origin
        ));
        steps.push(format!(
            "{}. Select \"{}\" from autocomplete",
            n + 1,
            airport_name(&seg.origin)
        ));
        steps.push(format!(
            "{}. Click destination field and enter \"{}\"",
            n + 2,
            seg.destination
        ));
        steps.push(format!(
            "{}. Select \"{}\" from autocomplete",
            n + 3,
            airport_name(&seg.destination)
        ));
        steps.push(format!(
            "{}. Click date field and select date {} from today",
            n + 4,
            seg.date
        ));

        if i < last {
            steps.push(format!("{}. Click \"Add flight\" to add next segment", n + 5));
            n += 6;
        } else {
            n += 5;
        }
    }

    steps.push(format!("{}. Review all segments are correctly entered", n));
    steps.push(format!("{}. Click Search button", n + 1));
    steps.push(format!("{}. Wait for multi-city results to load", n + 2));

    steps.join("\n")
}

fn description(s: &Scenario) -> String {
    format!(
        "Test multi-city flight search functionality with {} flight segments. \
         Verifies that the system correctly handles complex itineraries with multiple \
         origins and destinations.\n\n\
         Pre-requisites:\n- Google Flights is accessible\n- Multi-city option is available\n\
         - All airports in the route are serviceable",
        all_segments(s).len()
    )
}

fn severity(s: &Scenario) -> Severity {
    if s.segments[3] != "N/A" {
        return Severity::Medium;
    }
    if s.name.contains("Same-day") || s.name.contains("Maximum") || s.name.contains("Remove") {
        return Severity::Medium;
    }
    Severity::High
}
