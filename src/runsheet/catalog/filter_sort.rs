//! The `FilterAndSort` sheet: result-page filter and sort scenarios.

use super::{column_specs, scenario_record, Severity};
use crate::model::Sheet;

pub const SHEET_NAME: &str = "FilterAndSort";
pub const AREA: &str = "Filtering and Sorting";

struct Scenario {
    id: &'static str,
    name: &'static str,
    /// "JFK to LAX" style route the results were searched for.
    route: &'static str,
    /// One filter kind, "Stops + Price" combinations, or "None".
    filter: &'static str,
    /// Comma-separated values, positionally matched to the filter kinds.
    value: &'static str,
    sort_by: &'static str,
    expected: &'static str,
    comment: &'static str,
}

#[rustfmt::skip]
const SCENARIOS: [Scenario; 12] = [
    Scenario { id: "FS-001", name: "Filter nonstop flights only", route: "JFK to LAX", filter: "Stops", value: "Nonstop", sort_by: "Best", expected: "Only nonstop flights displayed, all results show 0 stops", comment: "Basic stops filter test" },
    Scenario { id: "FS-002", name: "Filter by 1 stop flights", route: "JFK to LAX", filter: "Stops", value: "1 stop", sort_by: "Best", expected: "Only flights with exactly 1 stop displayed", comment: "1-stop filter test" },
    Scenario { id: "FS-003", name: "Filter by price range - Budget", route: "SFO to SEA", filter: "Price", value: "Under $200", sort_by: "Price", expected: "All displayed flights priced under $200", comment: "Budget price filter test" },
    Scenario { id: "FS-004", name: "Filter by single airline", route: "ORD to DFW", filter: "Airline", value: "United Airlines", sort_by: "Best", expected: "Only United Airlines flights displayed", comment: "Single airline filter" },
    Scenario { id: "FS-005", name: "Filter by multiple airlines", route: "JFK to LAX", filter: "Airline", value: "Delta, American", sort_by: "Best", expected: "Only Delta and American Airlines flights displayed", comment: "Multiple airline filter" },
    Scenario { id: "FS-006", name: "Filter by morning departure time", route: "BOS to MIA", filter: "Time", value: "Departure before 12 PM", sort_by: "Duration", expected: "All flights depart before noon", comment: "Departure time filter" },
    Scenario { id: "FS-007", name: "Filter by evening arrival time", route: "LAX to JFK", filter: "Time", value: "Arrival 6 PM - midnight", sort_by: "Best", expected: "All flights arrive in the evening hours", comment: "Arrival time filter" },
    Scenario { id: "FS-008", name: "Filter by maximum duration", route: "JFK to LAX", filter: "Duration", value: "Under 6 hours", sort_by: "Duration", expected: "All flights have total duration under 6 hours", comment: "Duration filter test" },
    Scenario { id: "FS-009", name: "Sort by cheapest price", route: "DEN to LAS", filter: "None", value: "N/A", sort_by: "Price", expected: "Flights sorted from lowest to highest price", comment: "Price sorting test" },
    Scenario { id: "FS-010", name: "Sort by fastest duration", route: "ATL to MCO", filter: "None", value: "N/A", sort_by: "Duration", expected: "Shortest flights appear first, duration ascending", comment: "Duration sorting test" },
    Scenario { id: "FS-011", name: "Combined filters - Nonstop + Price", route: "JFK to LAX", filter: "Stops + Price", value: "Nonstop, Under $400", sort_by: "Best", expected: "Only nonstop flights under $400 displayed", comment: "Combined filter test" },
    Scenario { id: "FS-012", name: "Combined filters - Airline + Time + Stops", route: "ORD to LAX", filter: "Airline + Time + Stops", value: "United, Morning departure, Nonstop", sort_by: "Price", expected: "United nonstop morning flights only", comment: "Complex combined filter test" },
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
                    "{}. Results update dynamically and accurately reflect applied filters.",
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

fn steps(s: &Scenario) -> String {
    let (origin, destination) = s.route.split_once(" to ").unwrap_or((s.route, ""));

    let mut steps = vec![
        "1. Navigate to https://www.google.com/travel/flights".to_string(),
        format!("2. Enter origin \"{}\" and select from autocomplete", origin),
        format!(
            "3. Enter destination \"{}\" and select from autocomplete",
            destination
        ),
        "4. Select departure date +21 days from today".to_string(),
        "5. Click Search button".to_string(),
        "6. Wait for search results to load".to_string(),
    ];

    let mut n = 7;

    if s.filter != "None" {
        let kinds: Vec<&str> = s.filter.split(" + ").collect();
        let values: Vec<&str> = s.value.split(", ").collect();

        for (i, kind) in kinds.iter().enumerate() {
            // Positional values, falling back to the whole string when the
            // split comes up short.
            let value = values.get(i).map(|v| v.trim()).unwrap_or(s.value);

            match kind.trim() {
                "Stops" => {
                    steps.push(format!("{}. Locate the \"Stops\" filter dropdown", n));
                    steps.push(format!("{}. Click to expand and select \"{}\"", n + 1, value));
                    n += 2;
                }
                "Price" => {
                    steps.push(format!("{}. Locate the price slider/filter", n));
                    steps.push(format!("{}. Adjust to filter flights \"{}\"", n + 1, value));
                    n += 2;
                }
                "Airline" => {
                    steps.push(format!("{}. Click on \"Airlines\" filter", n));
                    steps.push(format!("{}. Select airline(s): {}", n + 1, value));
                    n += 2;
                }
                "Time" => {
                    steps.push(format!("{}. Click on \"Times\" filter", n));
                    steps.push(format!("{}. Adjust time slider to \"{}\"", n + 1, value));
                    n += 2;
                }
                "Duration" => {
                    steps.push(format!("{}. Locate the \"Duration\" filter", n));
                    steps.push(format!("{}. Set maximum duration to \"{}\"", n + 1, value));
                    n += 2;
                }
                _ => {}
            }
        }
    }

    if s.sort_by != "Best" {
        steps.push(format!("{}. Click on sort dropdown", n));
        steps.push(format!("{}. Select \"Sort by {}\"", n + 1, s.sort_by));
        n += 2;
    }

    steps.push(format!(
        "{}. Verify filtered/sorted results are displayed correctly",
        n
    ));

    steps.join("\n")
}

fn description(s: &Scenario) -> String {
    let mut description = if s.filter != "None" {
        format!("Test {} filtering", s.filter.to_lowercase())
    } else {
        "Test default sorting".to_string()
    };
    if s.sort_by != "Best" {
        description.push_str(&format!(" with {} sorting", s.sort_by.to_lowercase()));
    }
    description.push_str(" functionality on Google Flights search results.");

    if s.filter != "None" {
        description.push_str(&format!(
            " Verifies that applying {} filter with value \"{}\" correctly filters the results.",
            s.filter, s.value
        ));
    }

    description.push_str(&format!(
        "\n\nPre-requisites:\n- Google Flights is accessible\n\
         - Search results are available for route {}\n- Filters panel is visible",
        s.route
    ));
    description
}

fn severity(s: &Scenario) -> Severity {
    if s.filter == "Stops" || s.filter == "Price" || s.filter == "None" {
        return Severity::High;
    }
    if s.filter.contains('+') {
        return Severity::Medium;
    }
    Severity::High
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

    #[test]
    fn combined_filters_expand_positionally() {
        let steps = cell("FS-011", columns::STEPS);
        assert!(steps.contains("7. Locate the \"Stops\" filter dropdown"));
        assert!(steps.contains("8. Click to expand and select \"Nonstop\""));
        assert!(steps.contains("9. Locate the price slider/filter"));
        assert!(steps.contains("10. Adjust to filter flights \"Under $400\""));
        assert!(steps.contains("11. Verify filtered/sorted results are displayed correctly"));
    }

    #[test]
    fn sort_steps_follow_filter_steps() {
        let steps = cell("FS-003", columns::STEPS);
        assert!(steps.contains("9. Click on sort dropdown"));
        assert!(steps.contains("10. Select \"Sort by Price\""));
    }

    #[test]
    fn plain_sort_scenarios_have_no_filter_steps() {
        let steps = cell("FS-009", columns::STEPS);
        assert!(!steps.contains("Stops"));
        assert!(!steps.contains("price slider"));
        assert!(steps.contains("7. Click on sort dropdown"));
    }

    #[test]
    fn severity_grading() {
        assert_eq!(cell("FS-001", columns::SEVERITY), "High");
        assert_eq!(cell("FS-009", columns::SEVERITY), "High");
        assert_eq!(cell("FS-011", columns::SEVERITY), "Medium");
        assert_eq!(cell("FS-004", columns::SEVERITY), "High");
    }

    #[test]
    fn description_mentions_filter_and_route() {
        let description = cell("FS-001", columns::DESCRIPTION);
        assert!(description.starts_with("Test stops filtering"));
        assert!(description.contains("route JFK to LAX"));
    }
}
