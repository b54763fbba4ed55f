//! Lambda runtime glue shared by the `medical-actions` and
//! `wellness-actions` binaries

use crate::envelope::ResponseEnvelope;
use crate::group::ActionGroup;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. ANSI colours and
/// timestamps are off; the log sink adds its own.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}

/// Serve one invocation of `group`
pub async fn handle_event(
    group: &ActionGroup<'_>,
    event: Value,
    request_id: &str,
) -> Result<ResponseEnvelope, Error> {
    let span = tracing::info_span!("invocation", group = %group.name(), request_id = %request_id);
    Ok(span.in_scope(|| group.handle_value(event)))
}

/// Run `group` on the Lambda runtime until the runtime shuts down
pub async fn serve(group: &'static ActionGroup<'static>) -> Result<(), Error> {
    tracing::info!(group = %group.name(), actions = ?group.actions(), "Starting action group");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let (payload, context) = event.into_parts();
        handle_event(group, payload, &context.request_id).await
    }))
    .await
}
