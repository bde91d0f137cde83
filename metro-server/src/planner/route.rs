//! Route results and itinerary rendering.

use std::fmt::Write;

use serde::Serialize;

use crate::domain::{Line, Station};

use super::mode::SearchMode;

/// Message rendered in place of an itinerary when no route exists.
pub const NO_ROUTE: &str = "No route found.";

/// A search state: being at a station while riding a particular line.
///
/// The same station appears once per line serving it, because the cost of
/// the next move depends on whether it stays on the current line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StationNode {
    pub station: Station,
    pub line: Line,
}

impl StationNode {
    pub fn new(station: impl Into<Station>, line: impl Into<Line>) -> Self {
        Self {
            station: station.into(),
            line: line.into(),
        }
    }
}

/// The outcome of one search.
///
/// An empty `path` means no route was found; `total_minutes` and `changes`
/// are then both zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Search states from start to goal inclusive.
    pub path: Vec<StationNode>,

    /// Travel time including change penalties.
    pub total_minutes: f64,

    /// Number of line changes along `path`.
    pub changes: usize,
}

impl RouteResult {
    /// Create a result from a reconstructed path.
    ///
    /// The change count is derived from the path itself.
    pub fn new(path: Vec<StationNode>, total_minutes: f64) -> Self {
        let changes = count_changes(&path);
        Self {
            path,
            total_minutes,
            changes,
        }
    }

    /// The result reported when the goal is unreachable.
    pub fn no_route() -> Self {
        Self {
            path: Vec::new(),
            total_minutes: 0.0,
            changes: 0,
        }
    }

    /// Returns true if a route was found.
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// The first station of the route.
    pub fn origin(&self) -> Option<&Station> {
        self.path.first().map(|n| &n.station)
    }

    /// The last station of the route.
    pub fn destination(&self) -> Option<&Station> {
        self.path.last().map(|n| &n.station)
    }

    /// Render the route as a multi-line itinerary.
    ///
    /// ```
    /// use metro_server::planner::{RouteResult, SearchMode, StationNode};
    ///
    /// let route = RouteResult::new(
    ///     vec![StationNode::new("A", "Red"), StationNode::new("B", "Red")],
    ///     5.0,
    /// );
    /// let text = route.render(SearchMode::FastestTime);
    /// assert!(text.starts_with("*** Minimal Time Route ***"));
    /// assert!(text.contains("B on Red line"));
    /// ```
    pub fn render(&self, mode: SearchMode) -> String {
        if self.path.is_empty() {
            return NO_ROUTE.to_string();
        }

        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", mode.header());

        let mut previous_line = &self.path[0].line;
        for node in &self.path {
            if &node.line != previous_line {
                let _ = writeln!(out, "** Change Line to {} line **", node.line);
            }
            let _ = writeln!(out, "{} on {} line", node.station, node.line);
            previous_line = &node.line;
        }

        // Debug formatting keeps the ".0" on whole minutes.
        let _ = write!(
            out,
            "\nOverall Journey Time (mins) = {:?}\nNumber of Changes = {}",
            self.total_minutes, self.changes
        );
        out
    }
}

/// Count adjacent path entries whose line differs.
pub fn count_changes(path: &[StationNode]) -> usize {
    path.windows(2)
        .filter(|pair| pair[0].line != pair[1].line)
        .count()
}

/// Recover the station/line sequence from a rendered itinerary.
///
/// The first row is the header and parsing stops at the blank row before the
/// summary. Entries after a change marker are split on that marker's line.
/// Entries before the first marker share one line, which is inferred from
/// the entries themselves; if several splits fit, the one that continues at
/// the station after the first change wins, then the longest line label.
/// Returns an empty sequence for the "no route" message.
pub fn parse_itinerary(text: &str) -> Vec<StationNode> {
    let mut rows = text.lines();
    if rows.next().is_none_or(|header| header == NO_ROUTE) {
        return Vec::new();
    }

    let mut blocks = vec![Block::default()];
    for row in rows.take_while(|row| !row.is_empty()) {
        if let Some(line) = change_marker(row) {
            blocks.push(Block {
                line: Some(line),
                entries: Vec::new(),
            });
        } else if let (Some(entry), Some(block)) = (row.strip_suffix(" line"), blocks.last_mut()) {
            block.entries.push(entry);
        }
    }

    let mut path = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        let Some(line) = block.line.or_else(|| first_line(block, blocks.get(i + 1))) else {
            continue;
        };
        for entry in &block.entries {
            if let Some(station) = station_of(entry, line) {
                path.push(StationNode::new(station, line));
            }
        }
    }
    path
}

/// Itinerary entries following one change marker (or the header).
#[derive(Default)]
struct Block<'a> {
    line: Option<&'a str>,
    entries: Vec<&'a str>,
}

fn change_marker(row: &str) -> Option<&str> {
    row.strip_prefix("** Change Line to ")?
        .strip_suffix(" line **")
}

/// The station of `"<station> on <line>"`.
fn station_of<'a>(entry: &'a str, line: &str) -> Option<&'a str> {
    entry.strip_suffix(line)?.strip_suffix(" on ")
}

/// Infer the line of the entries before the first change marker.
fn first_line<'a>(block: &Block<'a>, next: Option<&Block<'a>>) -> Option<&'a str> {
    let first: &'a str = *block.entries.first()?;
    // Longest label first.
    let candidates: Vec<&'a str> = first
        .char_indices()
        .filter(|&(i, _)| first[i..].starts_with(" on "))
        .map(|(i, _)| &first[i + " on ".len()..])
        .filter(|line| block.entries.iter().all(|e| station_of(e, line).is_some()))
        .collect();

    // A change happens in place, so the last entry here names the station
    // that follows the marker.
    let change_station = next.and_then(|b| station_of(b.entries.first()?, b.line?));
    let last = *block.entries.last()?;
    candidates
        .iter()
        .find(|line| change_station.is_some() && station_of(last, line) == change_station)
        .or(candidates.first())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(station: &str, line: &str) -> StationNode {
        StationNode::new(station, line)
    }

    #[test]
    fn no_route_is_empty() {
        let result = RouteResult::no_route();
        assert!(!result.is_found());
        assert_eq!(result.total_minutes, 0.0);
        assert_eq!(result.changes, 0);
        assert!(result.origin().is_none());
    }

    #[test]
    fn render_no_route() {
        let result = RouteResult::no_route();
        assert_eq!(result.render(SearchMode::FastestTime), "No route found.");
        assert_eq!(result.render(SearchMode::FewestChanges), "No route found.");
    }

    #[test]
    fn render_single_line_route() {
        let result = RouteResult::new(vec![node("A", "Red"), node("B", "Red"), node("C", "Red")], 8.0);
        let expected = "\
*** Minimal Time Route ***
A on Red line
B on Red line
C on Red line

Overall Journey Time (mins) = 8.0
Number of Changes = 0";
        assert_eq!(result.render(SearchMode::FastestTime), expected);
    }

    #[test]
    fn render_marks_changes() {
        let result = RouteResult::new(
            vec![node("A", "Red"), node("B", "Red"), node("B", "Blue"), node("C", "Blue")],
            17.5,
        );
        let expected = "\
*** Route with Fewest Changes ***
A on Red line
B on Red line
** Change Line to Blue line **
B on Blue line
C on Blue line

Overall Journey Time (mins) = 17.5
Number of Changes = 1";
        assert_eq!(result.render(SearchMode::FewestChanges), expected);
    }

    #[test]
    fn count_changes_on_path() {
        assert_eq!(count_changes(&[]), 0);
        assert_eq!(count_changes(&[node("A", "Red")]), 0);
        assert_eq!(
            count_changes(&[
                node("A", "Red"),
                node("A", "Blue"),
                node("B", "Blue"),
                node("B", "Red"),
            ]),
            2
        );
    }

    #[test]
    fn new_derives_changes() {
        let result = RouteResult::new(vec![node("A", "Red"), node("A", "Blue")], 2.0);
        assert_eq!(result.changes, 1);
        assert_eq!(result.origin().map(Station::as_str), Some("A"));
        assert_eq!(result.destination().map(Station::as_str), Some("A"));
    }

    #[test]
    fn parse_rendered_itinerary() {
        let path = vec![node("St Peter's Square", "Red"), node("Deansgate - Castlefield", "Red"), node("Deansgate - Castlefield", "Green")];
        let result = RouteResult::new(path.clone(), 9.0);
        assert_eq!(parse_itinerary(&result.render(SearchMode::FastestTime)), path);
    }

    #[test]
    fn parse_no_route() {
        assert!(parse_itinerary(NO_ROUTE).is_empty());
    }

    #[test]
    fn station_name_containing_on() {
        let path = vec![node("Ashton-on-Mersey", "Purple"), node("Sale on Water", "Purple")];
        let result = RouteResult::new(path.clone(), 3.0);
        assert_eq!(parse_itinerary(&result.render(SearchMode::FastestTime)), path);
    }

    #[test]
    fn parse_star_prefixed_station() {
        let path = vec![node("*Airport", "Red"), node("B", "Red"), node("B", "Blue"), node("*C", "Blue")];
        let result = RouteResult::new(path.clone(), 6.0);
        assert_eq!(parse_itinerary(&result.render(SearchMode::FastestTime)), path);
    }

    #[test]
    fn parse_line_label_containing_on() {
        let path = vec![node("A", "Bury on Irwell"), node("B", "Bury on Irwell")];
        let result = RouteResult::new(path.clone(), 4.0);
        assert_eq!(parse_itinerary(&result.render(SearchMode::FastestTime)), path);
    }

    #[test]
    fn parse_station_with_on_before_change() {
        // The station after the marker settles how the first entries split.
        let path = vec![node("Sale on Water", "Red"), node("Sale on Water", "Blue"), node("B", "Blue")];
        let result = RouteResult::new(path.clone(), 7.0);
        assert_eq!(parse_itinerary(&result.render(SearchMode::FewestChanges)), path);
    }

    #[test]
    fn parse_station_with_on_after_change() {
        let path = vec![node("A", "Red"), node("A", "Blue"), node("Sale on Water", "Blue")];
        let result = RouteResult::new(path.clone(), 7.0);
        assert_eq!(parse_itinerary(&result.render(SearchMode::FastestTime)), path);
    }

    #[test]
    fn parse_ignores_summary() {
        let text = "*** Minimal Time Route ***\nA on Red line\n\nOverall Journey Time (mins) = 1.0\nNumber of Changes = 0";
        assert_eq!(parse_itinerary(text), vec![node("A", "Red")]);
        assert!(parse_itinerary("").is_empty());
    }

    #[test]
    fn serializes_path() {
        let result = RouteResult::new(vec![node("A", "Red")], 0.0);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["path"][0]["station"], "A");
        assert_eq!(json["path"][0]["line"], "Red");
        assert_eq!(json["changes"], 0);
    }
}
