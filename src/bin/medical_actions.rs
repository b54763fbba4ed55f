use agent_actions::runtime;
use agent_actions::ActionGroup;
use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    runtime::init_tracing();
    runtime::serve(ActionGroup::medical()).await
}
