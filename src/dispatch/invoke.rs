//! dispatch::invoke
//!
//! The entry point: cancellation wiring, tree setup, and the first
//! dispatch step.
//!
//! # Design
//!
//! One background task exists per invocation: the interrupt listener. It
//! races the derived token's `cancelled()` against `ctrl_c()` in a single
//! `select!`, so it terminates as soon as either the invocation finishes
//! or an interrupt arrives; there is no wait loop to leak. Repeated
//! interrupts after cancellation are no-ops because the task has already
//! exited.
//!
//! The framework's involvement with cancellation ends at handing the
//! token to `execute`. Commands that block or loop observe
//! `cancel.cancelled()` themselves; nothing here times out or
//! force-terminates a running command.

use tokio_util::sync::CancellationToken;

use super::subcommand::Subcommand;

/// Resolve and run one invocation of a command tree.
///
/// Derives a child token from `cancel`, installs the interrupt listener,
/// performs one-time setup on `root` (recursively creating flag
/// namespaces), hands the root the full argument vector (program name
/// first) if it consumes raw arguments, and returns the root's status.
/// Callers map the returned status directly to a process exit code; 0 is
/// success.
pub async fn invoke(
    cancel: &CancellationToken,
    root: &mut dyn Subcommand,
    args: Vec<String>,
) -> i32 {
    let cancel = cancel.child_token();
    let listener = tokio::spawn(interrupt_listener(cancel.clone()));

    root.setup();
    if let Some(consumer) = root.as_argument_consumer() {
        consumer.set_args(args);
    }
    let status = root.execute(&cancel).await;

    // Release the listener; cancelling an already-cancelled token is a
    // no-op, so an interrupt that raced the finish is harmless.
    cancel.cancel();
    let _ = listener.await;
    status
}

/// Bridge an interrupt signal onto the cancellation token.
async fn interrupt_listener(cancel: CancellationToken) {
    tokio::select! {
        _ = cancel.cancelled() => {}
        signal = tokio::signal::ctrl_c() => {
            if signal.is_ok() {
                cancel.cancel();
            }
        }
    }
}
