use std::sync::Arc;

use prodsub::config::load_config;
use prodsub::connection::ConnectionManager;
use prodsub::dispatch::MessageDispatcher;
use prodsub::handler::{CommandHandler, LoggingUrlOpener};
use prodsub::lookup::FallbackLookup;
use prodsub::publish::ResultPublisher;
use prodsub::session::{MqttSession, Session};
use prodsub::utils::logging;

#[tokio::main]
async fn main() {
    let settings = load_config().expect("Failed to load configuration");
    logging::init(&settings);
    tracing::info!(
        "Connecting to broker {}:{}",
        settings.broker.host,
        settings.broker.port
    );

    let (session, events) = MqttSession::connect(&settings.broker);
    let session: Arc<dyn Session> = Arc::new(session);

    let handler = Arc::new(CommandHandler::new(
        Arc::new(FallbackLookup),
        Arc::new(LoggingUrlOpener),
    ));
    let dispatcher = MessageDispatcher::new(
        handler,
        ResultPublisher::new(session.clone()),
        settings.broker.result_topic.clone(),
        settings.dispatch.max_inflight,
    );

    let mut manager = ConnectionManager::new(session, dispatcher, settings.broker);
    manager.run(events).await;
}
