//! Long-lived tag-topic subscription.
//!
//! Drives the rumqttc event loop: subscribes to the tag topic on every
//! (re)connect, hands each UTF-8 payload to the supplied handler, and
//! reconnects with exponential backoff when the broker drops. A handler
//! or lookup failure never terminates the subscription.

use lotgate_core::constants::TAG_TOPIC;
use rumqttc::{AsyncClient, Event, EventLoop, Incoming, QoS};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Configuration for the bus listener
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Topic carrying raw tag identifiers
    pub tag_topic: String,

    /// Backoff after the first failed poll
    pub initial_backoff: Duration,

    /// Backoff ceiling
    pub max_backoff: Duration,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            tag_topic: TAG_TOPIC.to_string(),
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(30),
        }
    }
}

/// Run the subscription loop until the process exits.
///
/// `handler` is invoked once per publish received on the tag topic with
/// the UTF-8 payload; non-UTF-8 payloads are logged and dropped. The loop
/// owns reconnection: on a poll error it sleeps the current backoff,
/// doubles it up to the ceiling, and resets it after the next successful
/// connect.
///
/// Intended to be spawned as a background task alongside the HTTP server.
pub async fn run_listener<F, Fut>(
    client: AsyncClient,
    mut eventloop: EventLoop,
    config: ListenerConfig,
    handler: F,
) where
    F: Fn(String) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut backoff = config.initial_backoff;

    loop {
        match eventloop.poll().await {
            Ok(Event::Incoming(Incoming::ConnAck(_))) => {
                info!(topic = %config.tag_topic, "connected to broker, subscribing");
                backoff = config.initial_backoff;

                if let Err(e) = client.subscribe(&config.tag_topic, QoS::AtMostOnce).await {
                    // The next reconnect retries the subscription.
                    error!(%e, topic = %config.tag_topic, "subscribe failed");
                }
            }
            Ok(Event::Incoming(Incoming::Publish(publish))) => {
                if publish.topic != config.tag_topic {
                    debug!(topic = %publish.topic, "ignoring publish on unexpected topic");
                    continue;
                }

                match String::from_utf8(publish.payload.to_vec()) {
                    Ok(payload) => handler(payload).await,
                    Err(e) => warn!(%e, "dropping non-UTF-8 payload on tag topic"),
                }
            }
            Ok(_) => {}
            Err(e) => {
                error!(%e, backoff_ms = backoff.as_millis() as u64, "broker connection lost");
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(config.max_backoff);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ListenerConfig::default();
        assert_eq!(config.tag_topic, "parking-system/rfid");
        assert!(config.initial_backoff < config.max_backoff);
    }

    #[test]
    fn test_backoff_doubles_to_ceiling() {
        let config = ListenerConfig::default();
        let mut backoff = config.initial_backoff;
        for _ in 0..10 {
            backoff = (backoff * 2).min(config.max_backoff);
        }
        assert_eq!(backoff, config.max_backoff);
    }
}
