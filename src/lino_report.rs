//! Statistics Report Rendering
//!
//! Turns a sorted sequence and its [`Statistics`] into human readable text,
//! Links Notation, or a Markdown table. Links Notation is a small indentation
//! based format for structured data:
//!
//! ```text
//! statistics_report:
//!   timestamp '2026-01-01T00:00:00Z'
//!   algorithm partition
//!
//! statistics:
//!   count 5
//!   mean 4
//! ```
//!
//! Floating point values are written in Rust's shortest round-trip form, so
//! [`parse_lino_report`] recovers exactly what [`StatisticsReport::to_lino`]
//! wrote.

use std::collections::HashMap;
use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;

use crate::sorter::SortAlgorithm;
use crate::stats::{Statistics, VarianceMode};

/// Everything printed for one analyzed sequence
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    /// When the analysis ran (ISO 8601, UTC)
    pub timestamp: String,
    /// Free-form description, usually the input source
    pub description: String,
    /// Algorithm that produced `sorted`
    pub algorithm: SortAlgorithm,
    /// Values in the order they were read
    pub original: Vec<i64>,
    /// Values after sorting
    pub sorted: Vec<i64>,
    /// Values left out because the input exceeded capacity
    pub dropped: usize,
    pub statistics: Statistics,
}

impl StatisticsReport {
    pub fn new(
        description: &str,
        algorithm: SortAlgorithm,
        original: Vec<i64>,
        sorted: Vec<i64>,
        statistics: Statistics,
    ) -> Self {
        StatisticsReport {
            timestamp: utc_timestamp(),
            description: description.to_string(),
            algorithm,
            original,
            sorted,
            dropped: 0,
            statistics,
        }
    }

    pub fn with_dropped(mut self, dropped: usize) -> Self {
        self.dropped = dropped;
        self
    }

    /// Plain text report with `precision` fractional digits.
    pub fn to_text(&self, precision: usize) -> String {
        let s = &self.statistics;
        let p = precision;
        let mut output = String::new();

        writeln!(output, "Input array: {}", join_values(&self.original)).unwrap();
        writeln!(
            output,
            "Sorted array ({}): {}",
            self.algorithm.name(),
            join_values(&self.sorted)
        )
        .unwrap();
        if self.dropped > 0 {
            writeln!(output, "Dropped values: {} (capacity reached)", self.dropped).unwrap();
        }
        writeln!(output).unwrap();
        writeln!(output, "Count: {}", s.count).unwrap();
        writeln!(output, "Sum: {}", s.sum).unwrap();
        writeln!(output, "Min: {}", s.min).unwrap();
        writeln!(output, "Max: {}", s.max).unwrap();
        writeln!(output, "Range: {}", s.range).unwrap();
        writeln!(output, "Mean: {:.p$}", s.mean).unwrap();
        writeln!(output, "Variance ({}): {:.p$}", s.mode.name(), s.variance).unwrap();
        writeln!(output, "Standard deviation: {:.p$}", s.std_dev).unwrap();
        writeln!(output, "Median: {:.p$}", s.median).unwrap();
        writeln!(output, "Q1: {:.p$}", s.q1).unwrap();
        writeln!(output, "Q3: {:.p$}", s.q3).unwrap();

        output
    }

    /// Generate the report in Links Notation format
    pub fn to_lino(&self) -> String {
        let s = &self.statistics;
        let mut output = String::new();

        writeln!(output, "statistics_report:").unwrap();
        writeln!(output, "  timestamp '{}'", self.timestamp).unwrap();
        writeln!(output, "  description '{}'", escape_lino_string(&self.description)).unwrap();
        writeln!(output, "  algorithm {}", self.algorithm.name()).unwrap();
        writeln!(output, "  variance_mode {}", s.mode.name()).unwrap();
        writeln!(output, "  dropped {}", self.dropped).unwrap();

        writeln!(output).unwrap();
        writeln!(output, "sequence:").unwrap();
        writeln!(output, "  original {}", join_values(&self.original)).unwrap();
        writeln!(output, "  sorted {}", join_values(&self.sorted)).unwrap();

        writeln!(output).unwrap();
        writeln!(output, "statistics:").unwrap();
        writeln!(output, "  count {}", s.count).unwrap();
        writeln!(output, "  sum {}", s.sum).unwrap();
        writeln!(output, "  mean {}", s.mean).unwrap();
        writeln!(output, "  variance {}", s.variance).unwrap();
        writeln!(output, "  std_dev {}", s.std_dev).unwrap();
        writeln!(output, "  min {}", s.min).unwrap();
        writeln!(output, "  max {}", s.max).unwrap();
        writeln!(output, "  range {}", s.range).unwrap();
        writeln!(output, "  median {}", s.median).unwrap();
        writeln!(output, "  q1 {}", s.q1).unwrap();
        writeln!(output, "  q3 {}", s.q3).unwrap();

        output
    }

    /// Save the report to a file in Links Notation format
    pub fn save_lino(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_lino())
    }

    /// Generate a markdown table from the report
    pub fn to_markdown_table(&self, precision: usize) -> String {
        let s = &self.statistics;
        let p = precision;
        let mut output = String::new();

        writeln!(output, "# Sequence Statistics Report").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Timestamp:** {}", self.timestamp).unwrap();
        writeln!(output, "**Description:** {}", self.description).unwrap();
        writeln!(output, "**Sort algorithm:** {}", self.algorithm.name()).unwrap();
        if self.dropped > 0 {
            writeln!(output, "**Dropped values:** {}", self.dropped).unwrap();
        }
        writeln!(output).unwrap();

        writeln!(output, "## Sorted Sequence").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "`{}`", join_values(&self.sorted)).unwrap();
        writeln!(output).unwrap();

        writeln!(output, "## Statistics").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Statistic | Value |").unwrap();
        writeln!(output, "|-----------|-------|").unwrap();
        writeln!(output, "| Count | {} |", s.count).unwrap();
        writeln!(output, "| Sum | {} |", s.sum).unwrap();
        writeln!(output, "| Min | {} |", s.min).unwrap();
        writeln!(output, "| Max | {} |", s.max).unwrap();
        writeln!(output, "| Range | {} |", s.range).unwrap();
        writeln!(output, "| Mean | {:.p$} |", s.mean).unwrap();
        writeln!(output, "| Variance ({}) | {:.p$} |", s.mode.name(), s.variance).unwrap();
        writeln!(output, "| Standard deviation | {:.p$} |", s.std_dev).unwrap();
        writeln!(output, "| Median | {:.p$} |", s.median).unwrap();
        writeln!(output, "| Q1 | {:.p$} |", s.q1).unwrap();
        writeln!(output, "| Q3 | {:.p$} |", s.q3).unwrap();
        writeln!(output, "| IQR | {:.p$} |", s.iqr()).unwrap();

        writeln!(output).unwrap();
        writeln!(output, "---").unwrap();
        writeln!(output, "*Report generated by sort-stats*").unwrap();

        output
    }
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape a string for a single-quoted Links Notation value.
///
/// Backslashes, quotes and line breaks are escaped so the value stays on one line.
fn escape_lino_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reverse of [`escape_lino_string`]. Returns `None` on a dangling or unknown escape.
fn unescape_lino_string(s: &str) -> Option<String> {
    let mut unescaped = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => unescaped.push('\\'),
            '\'' => unescaped.push('\''),
            'n' => unescaped.push('\n'),
            'r' => unescaped.push('\r'),
            _ => return None,
        }
    }
    Some(unescaped)
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`
fn utc_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let (year, month, day) = civil_from_days(secs / 86_400);
    let time_of_day = secs % 86_400;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Convert days since 1970-01-01 into a (year, month, day) date.
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let mut year = 1970;
    let mut remaining = days;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining < days_in_year {
            break;
        }
        remaining -= days_in_year;
        year += 1;
    }

    let february = if is_leap_year(year) { 29 } else { 28 };
    let days_in_months = [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    let mut month = 1;
    for days in days_in_months {
        if remaining < days {
            break;
        }
        remaining -= days;
        month += 1;
    }

    (year, month, remaining + 1)
}

fn is_leap_year(year: u64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Parse a Links Notation statistics report.
///
/// Returns `None` unless the header, both sequences and every statistic are
/// present and well formed.
pub fn parse_lino_report(content: &str) -> Option<StatisticsReport> {
    let mut section = "";
    let mut fields: HashMap<String, &str> = HashMap::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if !line.starts_with(' ') && trimmed.ends_with(':') {
            section = trimmed.trim_end_matches(':');
            continue;
        }

        let (key, value) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        fields.insert(format!("{}.{}", section, key), value.trim());
    }

    let field = |name: &str| fields.get(name).copied();

    let mode = VarianceMode::from_name(field("statistics_report.variance_mode")?)?;
    let statistics = Statistics {
        count: field("statistics.count")?.parse().ok()?,
        sum: field("statistics.sum")?.parse().ok()?,
        mean: field("statistics.mean")?.parse().ok()?,
        variance: field("statistics.variance")?.parse().ok()?,
        std_dev: field("statistics.std_dev")?.parse().ok()?,
        min: field("statistics.min")?.parse().ok()?,
        max: field("statistics.max")?.parse().ok()?,
        range: field("statistics.range")?.parse().ok()?,
        median: field("statistics.median")?.parse().ok()?,
        q1: field("statistics.q1")?.parse().ok()?,
        q3: field("statistics.q3")?.parse().ok()?,
        mode,
    };

    Some(StatisticsReport {
        timestamp: extract_quoted_value(field("statistics_report.timestamp")?)?,
        description: extract_quoted_value(field("statistics_report.description")?)?,
        algorithm: SortAlgorithm::from_name(field("statistics_report.algorithm")?)?,
        original: parse_values(field("sequence.original")?)?,
        sorted: parse_values(field("sequence.sorted")?)?,
        dropped: field("statistics_report.dropped")?.parse().ok()?,
        statistics,
    })
}

fn parse_values(value: &str) -> Option<Vec<i64>> {
    value
        .split_whitespace()
        .map(|token| token.parse().ok())
        .collect()
}

fn extract_quoted_value(value: &str) -> Option<String> {
    let inner = value.strip_prefix('\'')?.strip_suffix('\'')?;
    unescape_lino_string(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_statistics;

    fn sample_report() -> StatisticsReport {
        let original = vec![5, 1, 4, 2, 8];
        let statistics = compute_statistics(&original, VarianceMode::Population).unwrap();
        StatisticsReport::new(
            "it's a test",
            SortAlgorithm::Partition,
            original,
            vec![1, 2, 4, 5, 8],
            statistics,
        )
    }

    #[test]
    fn test_report_to_text() {
        let text = sample_report().to_text(4);
        assert!(text.contains("Input array: 5 1 4 2 8"));
        assert!(text.contains("Sorted array (partition): 1 2 4 5 8"));
        assert!(text.contains("Mean: 4.0000"));
        assert!(text.contains("Variance (population): 6.0000"));
        assert!(text.contains("Standard deviation: 2.4495"));
        assert!(text.contains("Median: 4.0000"));
        assert!(text.contains("Range: 7"));
        assert!(!text.contains("Dropped"));
    }

    #[test]
    fn test_report_text_precision() {
        let text = sample_report().to_text(2);
        assert!(text.contains("Q1: 1.50"));
        assert!(text.contains("Q3: 6.50"));
    }

    #[test]
    fn test_report_mentions_dropped_values() {
        let report = sample_report().with_dropped(3);
        assert!(report.to_text(2).contains("Dropped values: 3"));
        assert!(report.to_lino().contains("  dropped 3"));
        assert!(report.to_markdown_table(2).contains("**Dropped values:** 3"));
    }

    #[test]
    fn test_report_to_lino() {
        let lino = sample_report().to_lino();
        assert!(lino.contains("statistics_report:"));
        assert!(lino.contains("  description 'it\\'s a test'"));
        assert!(lino.contains("  sorted 1 2 4 5 8"));
        assert!(lino.contains("  variance 6"));
    }

    #[test]
    fn test_report_to_markdown() {
        let md = sample_report().to_markdown_table(3);
        assert!(md.contains("| Mean | 4.000 |"));
        assert!(md.contains("| IQR | 5.000 |"));
        assert!(md.contains("`1 2 4 5 8`"));
    }

    #[test]
    fn test_parse_lino_recovers_report() {
        let report = sample_report().with_dropped(1);
        let parsed = parse_lino_report(&report.to_lino()).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_parse_lino_rejects_incomplete() {
        assert!(parse_lino_report("").is_none());
        assert!(parse_lino_report("statistics_report:\n  algorithm partition\n").is_none());

        let lino = sample_report().to_lino().replace("  median 4\n", "");
        assert!(parse_lino_report(&lino).is_none());
    }

    #[test]
    fn test_escape_lino_string() {
        assert_eq!(escape_lino_string("hello"), "hello");
        assert_eq!(escape_lino_string("it's"), "it\\'s");
        assert_eq!(escape_lino_string("a\nb"), "a\\nb");
        assert_eq!(escape_lino_string("c:\\data"), "c:\\\\data");
    }

    #[test]
    fn test_unescape_lino_string() {
        assert_eq!(unescape_lino_string("it\\'s").as_deref(), Some("it's"));
        assert_eq!(unescape_lino_string("a\\nb").as_deref(), Some("a\nb"));
        assert_eq!(unescape_lino_string("trailing\\"), None);
        assert_eq!(unescape_lino_string("\\q"), None);
    }

    #[test]
    fn test_parse_lino_multiline_description() {
        let mut report = sample_report();
        report.description = "line one\nline 'two'\r\nc:\\data\\".to_string();
        let lino = report.to_lino();
        assert_eq!(lino.lines().filter(|l| l.contains("description")).count(), 1);

        let parsed = parse_lino_report(&lino).unwrap();
        assert_eq!(parsed.description, report.description);
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_civil_from_days() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(59), (1970, 3, 1));
        // 2000-02-29 is day 11016
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
    }
}
