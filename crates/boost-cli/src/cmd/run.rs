use crate::logging;
use crate::remote::MastodonRemote;
use crate::settings::Settings;
use anyhow::Context;
use boost_core::{Agent, StateStore, SystemClock, TracingActivityLog};
use mastodon_client::MastodonClient;

pub fn run(settings: &Settings) -> anyhow::Result<()> {
    let credentials = settings.credentials()?;
    let agent_config = settings.agent_config()?;
    logging::init(settings.log_level()?, Some(&settings.log_file))?;

    let client = MastodonClient::new(&credentials.base_url, &credentials.access_token)
        .context("failed to build Mastodon client")?;

    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    rt.block_on(async move {
        let account = client
            .verify_credentials()
            .await
            .context("failed to verify credentials")?;
        if account.acct.is_empty() {
            anyhow::bail!("credentials verified but the account has no acct");
        }
        tracing::info!(
            "Authenticated as {} on {}",
            account.acct,
            client.base_url()
        );

        let store = StateStore::new(&settings.state_file);
        let doc = store
            .load()
            .with_context(|| format!("failed to load {}", store.path().display()))?;
        tracing::info!(
            state_file = %store.path().display(),
            cursor = doc.last_event_id.as_ref().map(|c| c.as_str()).unwrap_or("none"),
            poll_interval_secs = agent_config.poll_interval.as_secs(),
            min_interval_secs = agent_config.min_interval.as_secs(),
            skip_existing = agent_config.skip_existing,
            "state loaded"
        );

        let remote = MastodonRemote::new(client);
        let mut agent = Agent::new(
            agent_config,
            store,
            doc,
            account.acct,
            remote.clone(),
            remote,
            SystemClock,
            TracingActivityLog,
        );
        agent
            .run_until(shutdown_signal())
            .await
            .context("poll loop stopped")
    })
}

/// Resolves on Ctrl-C or (on unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
