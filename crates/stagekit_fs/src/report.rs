//! Replication report model and mutable report builder.

use std::fmt;

/// Counters for one successful `replicate` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportReplicate {
    /// Number of source directories fully processed.
    pub cnt_dirs: u64,
    /// Total listed entries across all source directories.
    pub cnt_scanned: u64,
    /// Number of files copied into the destination.
    pub cnt_copied: u64,
    /// Copies that replaced an existing destination file.
    pub cnt_overwritten: u64,
}

impl ReportReplicate {
    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} dirs={} scanned={} copied={} overwritten={}",
            self.cnt_dirs, self.cnt_scanned, self.cnt_copied, self.cnt_overwritten
        )
    }
}

impl fmt::Display for ReportReplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[REPLICATE]"))
    }
}

/// Mutable accumulator for replication statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportReplicateBuilder {
    cnt_dirs: u64,
    cnt_scanned: u64,
    cnt_copied: u64,
    cnt_overwritten: u64,
}

impl ReportReplicateBuilder {
    /// Increment processed directory count by one.
    pub fn add_dir(&mut self) {
        self.cnt_dirs += 1;
    }

    /// Increment scanned count by `value`.
    pub fn add_scanned(&mut self, value: u64) {
        self.cnt_scanned += value;
    }

    /// Record one committed copy; `if_overwrote` marks a replaced file.
    pub fn add_copied(&mut self, if_overwrote: bool) {
        self.cnt_copied += 1;
        if if_overwrote {
            self.cnt_overwritten += 1;
        }
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportReplicate {
        ReportReplicate {
            cnt_dirs: self.cnt_dirs,
            cnt_scanned: self.cnt_scanned,
            cnt_copied: self.cnt_copied,
            cnt_overwritten: self.cnt_overwritten,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ReportReplicate, ReportReplicateBuilder};

    #[test]
    fn report_builder_accumulates_and_formats() {
        let mut builder = ReportReplicateBuilder::default();
        builder.add_dir();
        builder.add_dir();
        builder.add_scanned(3);
        builder.add_copied(false);
        builder.add_copied(true);
        builder.add_copied(false);

        let report = builder.build();
        assert_eq!(
            report,
            ReportReplicate {
                cnt_dirs: 2,
                cnt_scanned: 3,
                cnt_copied: 3,
                cnt_overwritten: 1,
            }
        );

        let txt = report.format("[REPLICATE]");
        assert_eq!(txt, "[REPLICATE] dirs=2 scanned=3 copied=3 overwritten=1");
        assert_eq!(report.to_string(), txt);
    }
}
