//! Startup banner and run summary display.

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub base_url: &'a str,
    pub endpoint: &'a str,
    pub prompts: usize,
}

/// Print the startup banner with target info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║        S M O K E S I G N A L          ║
   ║   a puff of smoke, answered in kind   ║
   ╚═══════════════════════════════════════╝

   version   {}
   target    {}
   endpoint  {}
   prompts   {}
"#,
        env!("CARGO_PKG_VERSION"),
        info.base_url,
        info.endpoint,
        info.prompts,
    );
}

/// Pass/fail tally across one run of the battery.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    pub passed: usize,
    pub failed: usize,
}

impl RunStats {
    /// Count one test outcome.
    pub fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Print the end-of-run summary. Informational only; the exit code
/// does not depend on it.
pub fn print_run_summary(stats: RunStats) {
    println!(
        "\nrun: {} passed, {} failed, {} total",
        stats.passed,
        stats.failed,
        stats.total(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_banner_does_not_panic() {
        let info = BannerInfo {
            base_url: "http://localhost:3000",
            endpoint: "/api/claude-code/test-claude",
            prompts: 3,
        };
        // Just verify it doesn't panic
        print_banner(&info);
    }

    #[test]
    fn record_tallies_both_outcomes() {
        let mut stats = RunStats::default();
        stats.record(true);
        stats.record(false);
        stats.record(true);

        assert_eq!(stats.passed, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn default_stats_are_empty() {
        let stats = RunStats::default();
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn print_run_summary_does_not_panic() {
        print_run_summary(RunStats {
            passed: 2,
            failed: 1,
        });
        print_run_summary(RunStats::default());
    }
}
