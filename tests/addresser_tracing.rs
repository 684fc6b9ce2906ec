//! Rejected addresser input is reported through `tracing`.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

use topology_id::{make_endpoint_node_id, IdAddresser};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("topology_id=debug"))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn wrong_field_count_is_logged() {
    let logs = capture(|| {
        assert_eq!(IdAddresser::Endpoint.address(";10.0.0.1"), None);
    });
    assert!(logs.contains("wrong number of fields"), "logs: {logs}");
    assert!(logs.contains("endpoint"), "logs: {logs}");
}

#[test]
fn non_ip_address_is_logged() {
    let logs = capture(|| {
        assert_eq!(IdAddresser::Address.address(";example.com"), None);
    });
    assert!(logs.contains("not an IP literal"), "logs: {logs}");
    assert!(logs.contains("example.com"), "logs: {logs}");
}

#[test]
fn valid_input_logs_nothing() {
    let id = make_endpoint_node_id("h1", "10.0.0.1", "80");
    let logs = capture(|| {
        assert!(IdAddresser::Endpoint.address(&id).is_some());
    });
    assert!(logs.is_empty(), "logs: {logs}");
}
