//! Adapts [`MastodonClient`] to the core's event source / reaction sink.

use boost_core::{Event, EventId, EventKind, EventSource, Item, ReactionSink};
use mastodon_client::{MastodonClient, MastodonError, Notification};

#[derive(Debug, Clone)]
pub struct MastodonRemote {
    client: MastodonClient,
}

impl MastodonRemote {
    pub fn new(client: MastodonClient) -> Self {
        Self { client }
    }
}

/// A notification becomes an event; its status (if any) is the referenced
/// item and the status author is the actor.
pub fn to_event(notification: Notification) -> Event {
    Event {
        id: EventId::new(notification.id),
        kind: EventKind::from_tag(&notification.kind),
        item: notification.status.map(|status| Item {
            id: status.id,
            actor: status
                .account
                .map(|a| a.acct)
                .filter(|acct| !acct.is_empty()),
        }),
    }
}

impl EventSource for MastodonRemote {
    type Error = MastodonError;

    async fn fetch(&self, since: Option<&EventId>) -> Result<Vec<Event>, MastodonError> {
        let notifications = self
            .client
            .notifications(since.map(EventId::as_str))
            .await?;
        Ok(notifications.into_iter().map(to_event).collect())
    }

    async fn fetch_latest(&self) -> Result<Vec<Event>, MastodonError> {
        self.fetch(None).await
    }
}

impl ReactionSink for MastodonRemote {
    type Error = MastodonError;

    async fn perform_reaction(&self, item_id: &str) -> Result<(), MastodonError> {
        self.client.reblog(item_id).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(json: &str) -> Notification {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn mention_maps_status_and_author() {
        let event = to_event(notification(
            r#"{"id": "43", "type": "mention", "status": {"id": "900", "account": {"acct": "alice@example.social"}}}"#,
        ));
        assert_eq!(event.id, EventId::from("43"));
        assert_eq!(event.kind, EventKind::Mention);
        assert_eq!(event.item_id(), Some("900"));
        assert_eq!(event.actor(), Some("alice@example.social"));
    }

    #[test]
    fn follow_has_no_item() {
        let event = to_event(notification(
            r#"{"id": "44", "type": "follow", "account": {"acct": "bob"}}"#,
        ));
        assert_eq!(event.kind, EventKind::Other("follow".into()));
        assert!(event.item.is_none());
    }

    #[test]
    fn status_without_acct_has_no_actor() {
        let event = to_event(notification(
            r#"{"id": "45", "type": "mention", "status": {"id": "901", "account": {}}}"#,
        ));
        assert_eq!(event.item_id(), Some("901"));
        assert_eq!(event.actor(), None);
    }
}
