//! Shared helpers for hang integration tests

#![allow(dead_code)]

use hang_fds::hang::{HangSummary, OutcomeKind, Reporter};
use hang_fds::limits::{DescriptorLimits, LimitSource, LimitStatus};
use hang_fds::network::Endpoint;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Hanging(usize, String),
    Limit(LimitStatus),
    Connected(usize),
    Error(usize, String),
    Done(HangSummary),
}

/// Reporter that keeps every event; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn connected(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Connected(i) => Some(i),
                _ => None,
            })
            .collect();
        indices.sort_unstable();
        indices
    }

    pub fn errors(&self) -> Vec<(usize, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Error(i, msg) => Some((i, msg)),
                _ => None,
            })
            .collect()
    }

    pub fn is_done(&self) -> bool {
        self.events().iter().any(|e| matches!(e, Event::Done(_)))
    }

    /// Poll until `n` connections were announced.
    pub async fn wait_connected(&self, n: usize) {
        tokio::time::timeout(Duration::from_secs(10), async {
            while self.connected().len() < n {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("connections were not announced in time");
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn hanging(&self, count: usize, endpoint: &Endpoint) {
        self.push(Event::Hanging(count, endpoint.to_string()));
    }

    fn limit(&self, status: &LimitStatus) {
        self.push(Event::Limit(*status));
    }

    fn connected(&self, index: usize) {
        self.push(Event::Connected(index));
    }

    fn connection_error(&self, index: usize, kind: &OutcomeKind) {
        self.push(Event::Error(index, kind.to_string()));
    }

    fn done(&self, summary: &HangSummary) {
        self.push(Event::Done(summary.clone()));
    }
}

/// In-memory descriptor limits that remember every write.
pub struct FakeLimits {
    limits: Mutex<DescriptorLimits>,
    writes: Mutex<Vec<DescriptorLimits>>,
}

impl FakeLimits {
    pub fn new(soft: u64, hard: u64) -> Self {
        Self {
            limits: Mutex::new(DescriptorLimits { soft, hard }),
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn plenty() -> Self {
        Self::new(1 << 20, 1 << 20)
    }

    pub fn writes(&self) -> Vec<DescriptorLimits> {
        self.writes.lock().unwrap().clone()
    }
}

impl LimitSource for FakeLimits {
    fn read(&self) -> io::Result<DescriptorLimits> {
        Ok(*self.limits.lock().unwrap())
    }

    fn write(&self, limits: DescriptorLimits) -> io::Result<()> {
        self.writes.lock().unwrap().push(limits);
        if limits.soft > limits.hard {
            return Err(io::Error::from(io::ErrorKind::InvalidInput));
        }
        *self.limits.lock().unwrap() = limits;
        Ok(())
    }
}

pub fn tcp_endpoint(port: u16) -> Endpoint {
    Endpoint::parse(&format!("/ip4/127.0.0.1/tcp/{port}")).unwrap()
}

/// A loopback port with nothing listening on it.
pub async fn refused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}
