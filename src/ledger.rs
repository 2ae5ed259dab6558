//! Cumulative per-domain availability accounting

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::debug;

/// Cumulative check counts for one domain
#[derive(Debug, Clone)]
pub struct DomainStats {
    /// Checks attempted for this domain
    pub total: u64,

    /// Checks classified as up
    pub up: u64,

    /// When this domain was last checked
    pub last_checked: DateTime<Utc>,
}

impl DomainStats {
    /// Availability as a rounded integer percentage
    pub fn availability(&self) -> u64 {
        ((self.up as f64 / self.total as f64) * 100.0).round() as u64
    }
}

/// Mapping from domain to its cumulative availability statistics.
///
/// Entries are created lazily on the first recorded check for a domain and
/// live for the rest of the process.
#[derive(Debug, Default)]
pub struct AvailabilityLedger {
    stats: HashMap<String, DomainStats>,
}

impl AvailabilityLedger {
    pub fn new() -> Self {
        Self {
            stats: HashMap::new(),
        }
    }

    /// Record the verdict of one check against a domain.
    pub fn record(&mut self, domain: &str, up: bool) {
        let entry = self
            .stats
            .entry(domain.to_string())
            .or_insert_with(|| DomainStats {
                total: 0,
                up: 0,
                last_checked: Utc::now(),
            });

        entry.total += 1;
        if up {
            entry.up += 1;
        }
        entry.last_checked = Utc::now();

        debug!(
            "Recorded check for {}: up={} ({}/{})",
            domain, up, entry.up, entry.total
        );
    }

    /// One report line per tracked domain.
    pub fn report_lines(&self) -> Vec<String> {
        self.stats
            .iter()
            .map(|(domain, stats)| {
                format!(
                    "{} has {}% availability percentage",
                    domain,
                    stats.availability()
                )
            })
            .collect()
    }

    /// Print the availability report to stdout.
    pub fn report(&self) {
        for line in self.report_lines() {
            println!("{}", line);
        }
    }

    /// Statistics for a domain, if it has been checked at least once.
    pub fn get(&self, domain: &str) -> Option<&DomainStats> {
        self.stats.get(domain)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(ledger: &mut AvailabilityLedger, domain: &str, verdicts: &[bool]) {
        for &up in verdicts {
            ledger.record(domain, up);
        }
    }

    #[test]
    fn test_counts_accumulate() {
        let mut ledger = AvailabilityLedger::new();
        feed(&mut ledger, "example.com", &[true, false, true]);

        let stats = ledger.get("example.com").unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.up, 2);
    }

    #[test]
    fn test_up_never_exceeds_total() {
        let mut ledger = AvailabilityLedger::new();
        let verdicts = [true, true, false, true, false, false, true, true];

        for (i, &up) in verdicts.iter().enumerate() {
            ledger.record("example.com", up);
            let stats = ledger.get("example.com").unwrap();
            assert!(stats.up <= stats.total);
            assert_eq!(stats.total, i as u64 + 1);
        }
    }

    #[test]
    fn test_availability_rounding() {
        let mut ledger = AvailabilityLedger::new();

        feed(&mut ledger, "a.example", &[true, true, true, false]);
        assert_eq!(ledger.get("a.example").unwrap().availability(), 75);

        feed(&mut ledger, "b.example", &[true, false, false]);
        assert_eq!(ledger.get("b.example").unwrap().availability(), 33);

        feed(&mut ledger, "c.example", &[true, true, false]);
        assert_eq!(ledger.get("c.example").unwrap().availability(), 67);
    }

    #[test]
    fn test_availability_rounds_half_up() {
        // 1 up of 8 checks is exactly 12.5%; the half case rounds up, not
        // to even.
        let mut ledger = AvailabilityLedger::new();
        feed(
            &mut ledger,
            "example.com",
            &[true, false, false, false, false, false, false, false],
        );

        assert_eq!(ledger.get("example.com").unwrap().availability(), 13);
    }

    #[test]
    fn test_entries_created_lazily() {
        let mut ledger = AvailabilityLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.get("example.com").is_none());

        ledger.record("example.com", false);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("example.com").unwrap().total, 1);
    }

    #[test]
    fn test_report_line_format() {
        let mut ledger = AvailabilityLedger::new();
        feed(&mut ledger, "example.com", &[true, true]);

        assert_eq!(
            ledger.report_lines(),
            vec!["example.com has 100% availability percentage".to_string()]
        );
    }

    #[test]
    fn test_report_covers_every_domain() {
        let mut ledger = AvailabilityLedger::new();
        feed(&mut ledger, "a.example", &[true]);
        feed(&mut ledger, "b.example", &[false]);

        let mut lines = ledger.report_lines();
        lines.sort();

        assert_eq!(
            lines,
            vec![
                "a.example has 100% availability percentage".to_string(),
                "b.example has 0% availability percentage".to_string(),
            ]
        );
    }

    #[test]
    fn test_identical_sequences_give_identical_percentages() {
        let verdicts = [true, false, true, true, false];

        let mut first = AvailabilityLedger::new();
        let mut second = AvailabilityLedger::new();
        feed(&mut first, "example.com", &verdicts);
        feed(&mut second, "example.com", &verdicts);

        assert_eq!(
            first.get("example.com").unwrap().availability(),
            second.get("example.com").unwrap().availability()
        );
    }
}
