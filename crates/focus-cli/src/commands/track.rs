//! Track command implementation.

use crate::cli::{TrackAction, TrackArgs};
use crate::error::Result;
use crate::output::Formatter;
use crate::store::LogStore;

/// Execute the track command.
pub async fn execute_track<S: LogStore>(
    args: TrackArgs,
    store: &S,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        TrackAction::Start => {
            store.set_tracking(true)?;
            println!(
                "{}",
                formatter.success("Tracking started! Visits will now be recorded")
            );
        }
        TrackAction::Stop => {
            store.set_tracking(false)?;
            println!("{}", formatter.success("Tracking stopped"));
        }
        TrackAction::Status => {
            let state = store.load()?;
            println!(
                "{}",
                formatter.tracking_status(state.tracking_enabled, state.logs.len())
            );
        }
    }

    Ok(())
}
