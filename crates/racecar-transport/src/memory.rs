use std::collections::VecDeque;

use crate::error::{Result, TransportError};
use crate::traits::Datagram;

/// One observed transport operation, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A datagram was delivered to the caller (after truncation).
    Received(Vec<u8>),
    /// A datagram was sent by the caller.
    Sent(Vec<u8>),
}

/// In-memory datagram transport with a scripted inbound queue.
///
/// Inbound datagrams are delivered in the order they were pushed. Once the
/// queue is empty, `receive` fails with [`TransportError::Shutdown`] rather
/// than blocking. Every send and receive is appended to an event log so
/// callers can check the interleaving of the two.
#[derive(Debug, Default, Clone)]
pub struct MemoryTransport {
    inbound: VecDeque<Vec<u8>>,
    events: Vec<Event>,
}

impl MemoryTransport {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport preloaded with inbound datagrams.
    pub fn with_inbound<I, D>(datagrams: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Vec<u8>>,
    {
        let mut transport = Self::new();
        for datagram in datagrams {
            transport.push_inbound(datagram);
        }
        transport
    }

    /// Queue one datagram for delivery.
    pub fn push_inbound(&mut self, datagram: impl Into<Vec<u8>>) {
        self.inbound.push_back(datagram.into());
    }

    /// Number of datagrams not yet delivered.
    pub fn pending(&self) -> usize {
        self.inbound.len()
    }

    /// All sends and receives so far.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Datagrams sent so far, oldest first.
    pub fn sent(&self) -> Vec<&[u8]> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Sent(bytes) => Some(bytes.as_slice()),
                Event::Received(_) => None,
            })
            .collect()
    }
}

impl Datagram for MemoryTransport {
    fn send(&mut self, datagram: &[u8]) -> Result<()> {
        self.events.push(Event::Sent(datagram.to_vec()));
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        let datagram = self.inbound.pop_front().ok_or(TransportError::Shutdown)?;
        let len = datagram.len().min(buf.len());
        buf[..len].copy_from_slice(&datagram[..len]);
        self.events.push(Event::Received(datagram[..len].to_vec()));
        Ok(len)
    }
}
