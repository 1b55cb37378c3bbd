use httpmock::Method::POST;
use httpmock::MockServer;
use spirit::{DungeonGuide, FALLBACK_REPLY, GeminiConfig};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

const PATH: &str = "/v1beta/models/gemini-pro:generateContent";

/// Collects formatted log lines in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_warnings() -> (Captured, DefaultGuard) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (captured, guard)
}

fn count(lines: &[String], level: &str) -> usize {
    lines.iter().filter(|l| l.contains(level)).count()
}

#[tokio::test]
async fn server_error_logs_one_warning() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(503).body("{\"error\":\"unavailable\"}");
        })
        .await;
    let (captured, _guard) = capture_warnings();

    let config = GeminiConfig::new(Some("test-key".into())).with_endpoint(server.url(PATH));
    let guide = DungeonGuide::new(config).unwrap();
    assert_eq!(guide.send("hello", &[]).await.unwrap(), FALLBACK_REPLY);

    let lines = captured.lines();
    assert_eq!(count(&lines, "WARN"), 1, "{lines:?}");
    assert!(lines[0].contains("503"));
}

#[tokio::test]
async fn empty_reply_logs_one_warning() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).body("{\"candidates\":[]}");
        })
        .await;
    let (captured, _guard) = capture_warnings();

    let config = GeminiConfig::new(Some("test-key".into())).with_endpoint(server.url(PATH));
    let guide = DungeonGuide::new(config).unwrap();
    assert_eq!(guide.send("hello", &[]).await.unwrap(), FALLBACK_REPLY);

    let lines = captured.lines();
    assert_eq!(count(&lines, "WARN"), 1, "{lines:?}");
    assert!(lines[0].contains("no reply text"));
}

#[tokio::test]
async fn missing_key_logs_one_error() {
    let (captured, _guard) = capture_warnings();

    let guide = DungeonGuide::new(GeminiConfig::new(None)).unwrap();
    assert!(guide.send("hello", &[]).await.is_err());

    let lines = captured.lines();
    assert_eq!(count(&lines, "ERROR"), 1, "{lines:?}");
    assert_eq!(count(&lines, "WARN"), 0, "{lines:?}");
}

#[tokio::test]
async fn successful_reply_logs_nothing() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200)
                .body("{\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Hush.\"}]}}]}");
        })
        .await;
    let (captured, _guard) = capture_warnings();

    let config = GeminiConfig::new(Some("test-key".into())).with_endpoint(server.url(PATH));
    let guide = DungeonGuide::new(config).unwrap();
    assert_eq!(guide.send("hello", &[]).await.unwrap(), "Hush.");
    assert!(captured.lines().is_empty());
}
