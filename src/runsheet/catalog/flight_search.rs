//! The `BasicFlightSearch` sheet: core search-form scenarios covering trip
//! types, routes, passenger mixes, and cabin classes.

use super::{airport_name, column_specs, is_international, passenger_phrase, scenario_record, Severity};
use crate::model::Sheet;

pub const SHEET_NAME: &str = "BasicFlightSearch";
pub const AREA: &str = "Basic Flight Search";

/// Passenger mixes with infants or more than this many children are treated
/// as complex bookings when grading severity.
const MANY_CHILDREN_THRESHOLD: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TripType {
    RoundTrip,
    OneWay,
}

impl TripType {
    fn label(self) -> &'static str {
        match self {
            TripType::RoundTrip => "Round-trip",
            TripType::OneWay => "One-way",
        }
    }

    fn lower(self) -> &'static str {
        match self {
            TripType::RoundTrip => "round-trip",
            TripType::OneWay => "one-way",
        }
    }
}

struct Scenario {
    id: &'static str,
    name: &'static str,
    trip_type: TripType,
    origin: &'static str,
    destination: &'static str,
    departure: &'static str,
    return_date: Option<&'static str>,
    adults: u8,
    children: u8,
    infants: u8,
    cabin: &'static str,
    comment: &'static str,
}

use TripType::{OneWay, RoundTrip};

#[rustfmt::skip]
const SCENARIOS: [Scenario; 12] = [
    Scenario { id: "BFS-001", name: "Round-trip domestic flight - Solo traveler", trip_type: RoundTrip, origin: "JFK", destination: "LAX", departure: "+21 days", return_date: Some("+28 days"), adults: 1, children: 0, infants: 0, cabin: "Economy", comment: "Standard domestic route test case" },
    Scenario { id: "BFS-002", name: "Round-trip international flight - Couple", trip_type: RoundTrip, origin: "LHR", destination: "JFK", departure: "+30 days", return_date: Some("+37 days"), adults: 2, children: 0, infants: 0, cabin: "Economy", comment: "International transatlantic route" },
    Scenario { id: "BFS-003", name: "One-way domestic short-haul flight", trip_type: OneWay, origin: "SFO", destination: "SEA", departure: "+14 days", return_date: None, adults: 1, children: 0, infants: 0, cabin: "Economy", comment: "Short domestic one-way route" },
    Scenario { id: "BFS-004", name: "Round-trip long-haul flight - Family", trip_type: RoundTrip, origin: "SYD", destination: "LAX", departure: "+45 days", return_date: Some("+60 days"), adults: 2, children: 2, infants: 0, cabin: "Economy", comment: "Long-haul transpacific family trip" },
    Scenario { id: "BFS-005", name: "One-way international flight - Business class", trip_type: OneWay, origin: "JFK", destination: "CDG", departure: "+21 days", return_date: None, adults: 1, children: 0, infants: 0, cabin: "Business", comment: "Premium cabin international" },
    Scenario { id: "BFS-006", name: "Round-trip domestic - Family with infant", trip_type: RoundTrip, origin: "ORD", destination: "MIA", departure: "+28 days", return_date: Some("+35 days"), adults: 2, children: 1, infants: 1, cabin: "Economy", comment: "Tests infant passenger handling" },
    Scenario { id: "BFS-007", name: "Round-trip international - First class", trip_type: RoundTrip, origin: "LAX", destination: "NRT", departure: "+60 days", return_date: Some("+74 days"), adults: 2, children: 0, infants: 0, cabin: "First", comment: "First class premium test" },
    Scenario { id: "BFS-008", name: "One-way domestic - Group travel", trip_type: OneWay, origin: "DEN", destination: "LAS", departure: "+35 days", return_date: None, adults: 4, children: 0, infants: 0, cabin: "Economy", comment: "Group booking test" },
    Scenario { id: "BFS-009", name: "Round-trip short domestic - Premium Economy", trip_type: RoundTrip, origin: "BOS", destination: "DCA", departure: "+10 days", return_date: Some("+12 days"), adults: 1, children: 0, infants: 0, cabin: "Premium Economy", comment: "Premium economy cabin test" },
    Scenario { id: "BFS-010", name: "Round-trip Europe to Asia - Mixed cabin", trip_type: RoundTrip, origin: "FRA", destination: "HKG", departure: "+42 days", return_date: Some("+56 days"), adults: 2, children: 1, infants: 0, cabin: "Business", comment: "Europe-Asia international route" },
    Scenario { id: "BFS-011", name: "One-way transatlantic - Large family", trip_type: OneWay, origin: "DUB", destination: "BOS", departure: "+50 days", return_date: None, adults: 2, children: 3, infants: 0, cabin: "Economy", comment: "Large family booking test" },
    Scenario { id: "BFS-012", name: "Round-trip weekend getaway", trip_type: RoundTrip, origin: "ATL", destination: "MCO", departure: "+7 days", return_date: Some("+9 days"), adults: 2, children: 2, infants: 0, cabin: "Economy", comment: "Short trip weekend booking" },
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
                expected(s),
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

fn steps(s: &Scenario) -> String {
    let mut steps = vec!["1. Navigate to https://www.google.com/travel/flights".to_string()];

    match s.trip_type {
        TripType::OneWay => {
            steps.push("2. Click trip type dropdown and select \"One way\"".to_string())
        }
        TripType::RoundTrip => {
            steps.push("2. Verify trip type is set to \"Round-trip\"".to_string())
        }
    }

    steps.push(format!("3. Click origin field and enter \"{}\"", s.origin));
    steps.push(format!(
        "4. Select \"{}\" from autocomplete",
        airport_name(s.origin)
    ));
    steps.push(format!(
        "5. Click destination field and enter \"{}\"",
        s.destination
    ));
    steps.push(format!(
        "6. Select \"{}\" from autocomplete",
        airport_name(s.destination)
    ));
    steps.push(format!(
        "7. Click departure date field and select a date {} from today",
        s.departure
    ));

    let mut n = 8;
    if s.trip_type == TripType::RoundTrip {
        if let Some(ret) = s.return_date {
            steps.push(format!(
                "8. Click return date field and select a date {} from today",
                ret
            ));
            n = 9;
        }
    }

    let total = s.adults + s.children + s.infants;
    if total > 1 || s.children > 0 || s.infants > 0 {
        steps.push(format!(
            "{}. Click passenger selector and set: {}",
            n,
            passenger_phrase(s.adults, s.children, s.infants)
        ));
    } else {
        steps.push(format!("{}. Verify passenger count is 1 adult", n));
    }

    if s.cabin != "Economy" {
        steps.push(format!(
            "{}. Click cabin class dropdown and select \"{}\"",
            n + 1,
            s.cabin
        ));
    } else {
        steps.push(format!("{}. Verify cabin class is Economy", n + 1));
    }

    steps.push(format!("{}. Click Search button", n + 2));
    steps.push(format!("{}. Wait for results to load", n + 3));

    steps.join("\n")
}

fn description(s: &Scenario) -> String {
    let route_kind = if is_international(s.origin, s.destination) {
        "international"
    } else {
        "domestic"
    };
    format!(
        "Test {} {} flight search functionality. Verifies that the search form accepts valid \
         inputs for {} traveling in {} class and returns flight results.\n\n\
         Pre-requisites:\n- Google Flights is accessible\n- Browser is open\n- No cached search data",
        s.trip_type.lower(),
        route_kind,
        passenger_phrase(s.adults, s.children, s.infants),
        s.cabin
    )
}

fn expected(s: &Scenario) -> String {
    let round_trip_note = if s.trip_type == TripType::RoundTrip {
        " Both outbound and return flights are shown."
    } else {
        ""
    };
    format!(
        "Search executes successfully. Results page displays multiple flight options from {} to {} \
         with prices, airlines, duration, and stop information.{}",
        s.origin, s.destination, round_trip_note
    )
}

fn severity(s: &Scenario) -> Severity {
    if s.trip_type == TripType::RoundTrip && s.adults == 1 && s.cabin == "Economy" {
        return Severity::High;
    }
    if s.infants > 0 || s.children > MANY_CHILDREN_THRESHOLD {
        return Severity::Medium;
    }
    if s.cabin == "First" || s.cabin == "Business" {
        return Severity::Medium;
    }
    Severity::High
}
