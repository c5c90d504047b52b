//! The `DateSelection` sheet: calendar widget scenarios, including the edge
//! cases around past dates, year boundaries, and inverted ranges.

use super::{column_specs, scenario_record, Severity};
use crate::model::Sheet;

pub const SHEET_NAME: &str = "DateSelection";
pub const AREA: &str = "Date Selection";

/// Which date field (or pair) the scenario exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateField {
    Departure,
    Return,
    OneWay,
    DepartureReturn,
}

impl DateField {
    fn lower(self) -> &'static str {
        match self {
            DateField::Departure => "departure",
            DateField::Return => "return",
            DateField::OneWay => "one-way",
            DateField::DepartureReturn => "departure/return",
        }
    }
}

struct Scenario {
    id: &'static str,
    name: &'static str,
    field: DateField,
    value: &'static str,
    expected: &'static str,
    edge_case: bool,
    comment: &'static str,
}

use DateField::{Departure, DepartureReturn, OneWay, Return};

#[rustfmt::skip]
const SCENARIOS: [Scenario; 12] = [
    Scenario { id: "DS-001", name: "Standard departure date selection - 3 weeks out", field: Departure, value: "+21 days", expected: "Date is selectable, calendar highlights selection", edge_case: false, comment: "Standard date selection" },
    Scenario { id: "DS-002", name: "Standard return date selection - 1 week after departure", field: Return, value: "+28 days", expected: "Return date selected, range highlighted in calendar", edge_case: false, comment: "Return date selection" },
    Scenario { id: "DS-003", name: "One-way date selection", field: OneWay, value: "+14 days", expected: "Single date selected, no return date field shown", edge_case: false, comment: "One-way trip date" },
    Scenario { id: "DS-004", name: "Same-day departure and return", field: DepartureReturn, value: "+7 days (same day)", expected: "May allow or show warning about same-day return", edge_case: true, comment: "Same-day trip edge case" },
    Scenario { id: "DS-005", name: "Past date selection attempt", field: Departure, value: "-1 day", expected: "Date should be disabled/grayed out, not selectable", edge_case: true, comment: "Past date validation" },
    Scenario { id: "DS-006", name: "Far future date - 11 months out", field: Departure, value: "+330 days", expected: "Date may be selectable with limited availability warning", edge_case: true, comment: "Far future booking test" },
    Scenario { id: "DS-007", name: "Return date before departure attempt", field: Return, value: "Before departure", expected: "Error message or auto-correction of dates", edge_case: true, comment: "Invalid date order test" },
    Scenario { id: "DS-008", name: "Calendar month navigation - Forward", field: Departure, value: "+60 days", expected: "Calendar navigates to correct month, dates selectable", edge_case: false, comment: "Calendar navigation test" },
    Scenario { id: "DS-009", name: "Calendar month navigation - Year boundary", field: Departure, value: "Dec 31 to Jan 1", expected: "Year increments correctly when crossing year boundary", edge_case: true, comment: "Year boundary edge case" },
    Scenario { id: "DS-010", name: "Today's date selection", field: Departure, value: "Today", expected: "May be selectable for last-minute flights or disabled", edge_case: true, comment: "Same-day booking test" },
    Scenario { id: "DS-011", name: "Weekend trip dates - Fri to Sun", field: DepartureReturn, value: "Next Friday to Sunday", expected: "Short trip dates selected correctly", edge_case: false, comment: "Weekend trip selection" },
    Scenario { id: "DS-012", name: "Extended trip - 30+ days", field: DepartureReturn, value: "+21 days, +52 days", expected: "Long duration trip handled correctly", edge_case: false, comment: "Extended trip selection" },
];

pub fn sheet() -> Sheet {
    let rows = SCENARIOS
        .iter()
        .map(|s| {
            let mut comment = s.comment.to_string();
            if s.edge_case {
                comment.push_str(" (Edge Case)");
            }
            scenario_record(
                s.id,
                AREA,
                s.name,
                description(s),
                steps(s),
                format!(
                    "{}. Calendar component responds appropriately to user interaction.",
                    s.expected
                ),
                severity(s),
                comment,
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
    let mut steps = vec![
        "1. Navigate to https://www.google.com/travel/flights".to_string(),
        "2. Enter origin \"JFK\" and select from autocomplete".to_string(),
        "3. Enter destination \"LAX\" and select from autocomplete".to_string(),
    ];

    match s.field {
        DateField::OneWay => {
            steps.push("4. Click trip type dropdown and select \"One way\"".to_string());
            steps.push("5. Click on departure date field to open calendar".to_string());
            steps.push(format!("6. Navigate calendar to select date: {}", s.value));
            steps.push("7. Verify date is properly selected in the field".to_string());
            steps.push("8. Click Search button".to_string());
            steps.push("9. Verify search proceeds with selected date".to_string());
        }
        DateField::Departure => {
            steps.push("4. Click on departure date field to open calendar".to_string());
            steps.push(format!("5. Navigate calendar to select date: {}", s.value));
            steps.push("6. Verify date is properly selected and highlighted".to_string());
            steps.push("7. Observe system behavior for the selection".to_string());
        }
        DateField::Return => {
            steps.push("4. Select a departure date first (+21 days)".to_string());
            steps.push("5. Click on return date field to open calendar".to_string());
            steps.push(format!("6. Attempt to select return date: {}", s.value));
            steps.push("7. Observe system behavior for the selection".to_string());
        }
        DateField::DepartureReturn => {
            // "+21 days, +52 days" carries both dates; single values fall
            // back to a same/next-day return.
            let (depart, ret) = match s.value.split_once(',') {
                Some((d, r)) => (d.trim(), r.trim()),
                None => (s.value, "same/next day"),
            };
            steps.push("4. Click on departure date field to open calendar".to_string());
            steps.push(format!("5. Select departure date as specified: {}", depart));
            steps.push("6. Click on return date field".to_string());
            steps.push(format!("7. Select return date as specified: {}", ret));
            steps.push("8. Verify both dates are properly selected".to_string());
            steps.push("9. Click Search button and observe results".to_string());
        }
    }

    steps.join("\n")
}

fn description(s: &Scenario) -> String {
    let mut description = format!(
        "Test date selection functionality for {} date field.",
        s.field.lower()
    );

    if s.edge_case {
        description.push_str(&format!(
            " This is an edge case test that verifies system behavior for {}.",
            s.name.to_lowercase()
        ));
    } else {
        description.push_str(&format!(
            " Verifies that the calendar component allows selection of {} and correctly updates the search form.",
            s.value
        ));
    }

    description.push_str(
        "\n\nPre-requisites:\n- Google Flights is accessible\n- Browser is open\n\
         - Calendar widget is functional",
    );
    description
}

fn severity(s: &Scenario) -> Severity {
    if s.edge_case {
        Severity::Medium
    } else {
        Severity::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::columns;

    fn cell(id: &str, header: &str) -> String {
        sheet()
            .rows
            .iter()
            .find(|r| r.id == id)
            .and_then(|r| r.extra.get(header))
            .and_then(|v| v.as_text().map(str::to_string))
            .unwrap_or_else(|| panic!("no text cell {header} on {id}"))
    }

    fn comments(id: &str) -> String {
        sheet()
            .rows
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.execution.comments.clone())
            .unwrap_or_else(|| panic!("no row {id}"))
    }

    #[test]
    fn edge_cases_are_medium_and_tagged_in_comments() {
        assert_eq!(cell("DS-005", columns::SEVERITY), "Medium");
        assert_eq!(comments("DS-005"), "Past date validation (Edge Case)");
        assert_eq!(cell("DS-001", columns::SEVERITY), "High");
        assert_eq!(comments("DS-001"), "Standard date selection");
    }

    #[test]
    fn paired_date_values_split_into_both_fields() {
        let steps = cell("DS-012", columns::STEPS);
        assert!(steps.contains("5. Select departure date as specified: +21 days"));
        assert!(steps.contains("7. Select return date as specified: +52 days"));
    }

    #[test]
    fn single_paired_value_falls_back_to_same_day_return() {
        let steps = cell("DS-011", columns::STEPS);
        assert!(steps.contains("7. Select return date as specified: same/next day"));
    }

    #[test]
    fn return_scenarios_select_departure_first() {
        let steps = cell("DS-007", columns::STEPS);
        assert!(steps.contains("4. Select a departure date first (+21 days)"));
        assert!(steps.contains("6. Attempt to select return date: Before departure"));
    }
}
