//! Update orchestration: one refresh cycle per selection change.

use std::sync::mpsc::{self, Receiver, Sender};

use reqwest::Client;

use crate::config::Settings;
use crate::fetch::{fetch_logo, fetch_quote, ConnectivityProbe};

/// Completion message funneled back to the single UI writer. Failed fetches
/// send nothing; they are logged where they die.
#[derive(Debug)]
pub enum PanelUpdate {
    Quote(crate::fetch::Quote),
    Logo(crate::fetch::LogoImage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStart {
    /// Both fetch tasks are in flight. The caller resets the panel before
    /// calling; this just reports whether the gate opened.
    Started,
    /// Connectivity probe failed; nothing was issued. Show the retry prompt.
    Offline,
}

/// Drives the quote and logo fetches for the currently selected symbol.
///
/// In-flight requests for a superseded selection are not cancelled; a stale
/// completion may overwrite a newer one. Inherited race, kept deliberately.
pub struct Refresher {
    settings: Settings,
    client: Client,
    probe: Box<dyn ConnectivityProbe + Send + Sync>,
    tx: Sender<PanelUpdate>,
}

impl Refresher {
    pub fn new(
        settings: Settings,
        probe: Box<dyn ConnectivityProbe + Send + Sync>,
    ) -> (Self, Receiver<PanelUpdate>) {
        let (tx, rx) = mpsc::channel();
        // Transport defaults apply; no explicit timeout policy.
        let client = Client::new();
        (
            Self {
                settings,
                client,
                probe,
                tx,
            },
            rx,
        )
    }

    /// Start a full refresh for `symbol`: connectivity gate first, then the
    /// quote and logo requests concurrently. Exactly one of each per call.
    pub fn request_update(&self, symbol: &str) -> RefreshStart {
        if !self.probe.is_connected() {
            log::warn!("Connectivity probe failed; skipping refresh for {}", symbol);
            return RefreshStart::Offline;
        }

        self.spawn_quote_fetch(symbol);
        self.spawn_logo_fetch(symbol);
        RefreshStart::Started
    }

    fn spawn_quote_fetch(&self, symbol: &str) {
        let client = self.client.clone();
        let settings = self.settings.clone();
        let symbol = symbol.to_string();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            match fetch_quote(&client, &settings, &symbol).await {
                Ok(quote) => {
                    let _ = tx.send(PanelUpdate::Quote(quote));
                }
                Err(err) => log::warn!("Quote fetch for {} failed: {}", symbol, err),
            }
        });
    }

    fn spawn_logo_fetch(&self, symbol: &str) {
        let client = self.client.clone();
        let settings = self.settings.clone();
        let symbol = symbol.to_string();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            match fetch_logo(&client, &settings, &symbol).await {
                Ok(logo) => {
                    let _ = tx.send(PanelUpdate::Logo(logo));
                }
                Err(err) => log::warn!("Logo fetch for {} failed: {}", symbol, err),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::connectivity::FixedProbe;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    const QUOTE_BODY: &str = r#"{"companyName":"Apple Inc","symbol":"AAPL","latestPrice":132.05,"change":1.5,"changePercent":0.0114}"#;
    // Logo metadata parses fine; the image URL itself is unroutable.
    const LOGO_BODY: &str = r#"{"url":"http://127.0.0.1:1/logo.png"}"#;

    /// Answer up to two HTTP requests on an ephemeral port, dispatching on
    /// the request path.
    fn spawn_stub_api() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        thread::spawn(move || {
            for _ in 0..2 {
                let Ok((mut stream, _)) = listener.accept() else {
                    break;
                };
                let mut buf = [0u8; 1024];
                let n = stream.read(&mut buf).unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let body = if request.contains("/quote") {
                    QUOTE_BODY
                } else {
                    LOGO_BODY
                };
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    struct ToggleProbe(Arc<AtomicBool>);

    impl ConnectivityProbe for ToggleProbe {
        fn is_connected(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn settings() -> Settings {
        Settings::from_parts(
            Some("pk_test".to_string()),
            Some("http://127.0.0.1:1".to_string()),
        )
        .expect("settings")
    }

    #[test]
    fn offline_probe_issues_no_requests() {
        let (refresher, rx) = Refresher::new(settings(), Box::new(FixedProbe(false)));

        assert_eq!(refresher.request_update("AAPL"), RefreshStart::Offline);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn logo_byte_fetch_failure_sends_no_logo_update() {
        let base = spawn_stub_api();
        let settings =
            Settings::from_parts(Some("pk_test".to_string()), Some(base)).expect("settings");
        let (refresher, rx) = Refresher::new(settings, Box::new(FixedProbe(true)));

        assert_eq!(refresher.request_update("AAPL"), RefreshStart::Started);

        // The quote completes and reaches the panel untouched by the logo's
        // failed byte fetch, which must send nothing.
        let first = rx.recv_timeout(Duration::from_secs(5)).expect("quote update");
        match first {
            PanelUpdate::Quote(quote) => assert_eq!(quote.symbol, "AAPL"),
            PanelUpdate::Logo(_) => panic!("logo update must not arrive"),
        }
        assert!(rx.recv_timeout(Duration::from_millis(500)).is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn retry_after_reconnect_runs_the_full_cycle() {
        let online = Arc::new(AtomicBool::new(false));
        let (refresher, _rx) =
            Refresher::new(settings(), Box::new(ToggleProbe(Arc::clone(&online))));

        assert_eq!(refresher.request_update("AAPL"), RefreshStart::Offline);

        online.store(true, Ordering::SeqCst);
        // The endpoint is unroutable, so the spawned fetches fail silently;
        // the gate itself must open again.
        assert_eq!(refresher.request_update("AAPL"), RefreshStart::Started);
    }
}
