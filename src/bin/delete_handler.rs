use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use picus_kv::config::Config;
use picus_kv::event::{handle_delete, DeleteEvent, EventResponse};
use picus_kv::store::DynamoStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let store = DynamoStore::from_config(&config).await;

    run(service_fn(|event: LambdaEvent<DeleteEvent>| async {
        Ok::<EventResponse, Error>(handle_delete(&store, event.payload).await)
    }))
    .await
}
