// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn request_middleware_emits_audit_event_with_request_id() {
    use portal_server::{build_router, AppState, PortalConfig};
    use portal_store::{default_dataset, StaticSource};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .json()
        .with_max_level(Level::INFO)
        .finish();
    // current-thread runtime: the spawned server shares this thread's default
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = build_router(AppState::new(
        Arc::new(StaticSource::new(default_dataset())),
        PortalConfig::default(),
    ));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let req = format!(
        "GET /api/leaderboard HTTP/1.1\r\nHost: {addr}\r\nx-request-id: req-audit-7\r\nConnection: close\r\n\r\n"
    );
    stream.write_all(req.as_bytes()).await.expect("write request");
    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .await
        .expect("read response");

    let bytes = sink.0.lock().expect("lock output").clone();
    let text = String::from_utf8(bytes).expect("utf8 log output");
    let audit = text
        .lines()
        .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
        .find(|v| v.get("target").and_then(|t| t.as_str()) == Some("portal_audit"))
        .expect("audit line");
    let fields = audit.get("fields").expect("fields object");
    assert_eq!(
        fields.get("request_id").and_then(|v| v.as_str()),
        Some("req-audit-7")
    );
    assert_eq!(fields.get("status").and_then(|v| v.as_u64()), Some(200));
}
