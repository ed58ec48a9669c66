//! The redirect side of the ad hooks, fired when usage crosses the threshold.

use colored::Colorize;

/// Receives the redirect side effect once the usage threshold is crossed.
///
/// Called from a blocking task, so implementations may do synchronous I/O.
pub trait RedirectNotifier: Send + Sync {
    fn notify(&self, usage_count: u64);
}

/// Writes the simulated redirect notice to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl RedirectNotifier for ConsoleNotifier {
    fn notify(&self, usage_count: u64) {
        log::info!("redirect triggered after {} uses", usage_count);
        anstream::eprintln!("{}", "Redirect Ad Triggered! (Simulated)".yellow().bold());
    }
}
