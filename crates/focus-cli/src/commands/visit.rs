//! Visit command implementation.

use crate::cli::VisitArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::store::LogStore;
use crate::tracker::{now_timestamp, record_visit, VisitOutcome};

/// Execute the visit command.
pub async fn execute_visit<S: LogStore>(
    args: VisitArgs,
    store: &S,
    formatter: &Formatter,
) -> Result<()> {
    let timestamp = args.timestamp.unwrap_or_else(now_timestamp);

    match record_visit(store, &args.url, timestamp)? {
        VisitOutcome::Recorded(entry) => {
            let domain = entry.domain.unwrap_or_default();
            println!("{}", formatter.success(&format!("Tracked: {}", domain)));
        }
        VisitOutcome::TrackingDisabled => {
            println!(
                "{}",
                formatter.info("Tracking disabled; visit not recorded. Run 'focus track start'.")
            );
        }
        VisitOutcome::Skipped => {
            println!("{}", formatter.info("Internal page skipped"));
        }
    }

    Ok(())
}
