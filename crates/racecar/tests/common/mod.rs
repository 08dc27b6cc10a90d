#![allow(dead_code)]

use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;

/// Scripted stand-in for the simulation host, speaking little-endian.
pub struct Host {
    socket: UdpSocket,
    client: Option<SocketAddr>,
    pub received: Vec<Vec<u8>>,
}

impl Host {
    pub fn bind() -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").expect("host should bind");
        socket
            .set_read_timeout(Some(Duration::from_secs(5)))
            .expect("read timeout should apply");
        Self {
            socket,
            client: None,
            received: Vec::new(),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.socket.local_addr().expect("host addr")
    }

    pub fn connect(&mut self, client: SocketAddr) {
        self.client = Some(client);
    }

    pub fn notify(&self, packet: &[u8]) {
        let client = self.client.expect("client address should be set");
        self.socket.send_to(packet, client).expect("notify");
    }

    pub fn recv(&mut self) -> Vec<u8> {
        self.try_recv().expect("host recv")
    }

    pub fn try_recv(&mut self) -> Option<Vec<u8>> {
        let mut buf = vec![0u8; 65_536];
        let (n, _) = self.socket.recv_from(&mut buf).ok()?;
        buf.truncate(n);
        self.received.push(buf.clone());
        Some(buf)
    }

    /// Send `begin` until a client that is still starting up acknowledges it,
    /// then swallow acknowledgements of any duplicates.
    pub fn begin_with_retry(&mut self) {
        self.set_timeout(Duration::from_millis(500));
        let mut acknowledged = false;
        for _ in 0..20 {
            self.notify(&[1]);
            if let Some(reply) = self.try_recv() {
                assert_eq!(reply, vec![4]);
                acknowledged = true;
                break;
            }
        }
        assert!(acknowledged, "client never acknowledged begin");

        self.set_timeout(Duration::from_millis(200));
        while self.try_recv().is_some() {}
        self.set_timeout(Duration::from_secs(5));
    }

    fn set_timeout(&self, timeout: Duration) {
        self.socket
            .set_read_timeout(Some(timeout))
            .expect("read timeout should apply");
    }

    /// Answer capability requests until the client replies with `acknowledge`
    /// or `error`, and return that reply.
    pub fn serve_until_reply(&mut self) -> u8 {
        loop {
            let packet = self.recv();
            let code = packet[0];
            if code == 0 || code == 4 {
                return code;
            }
            if let Some(response) = response_for(code) {
                self.socket
                    .send_to(&response, self.client.expect("client"))
                    .expect("respond");
            }
        }
    }

    pub fn codes(&self) -> Vec<u8> {
        self.received.iter().map(|p| p[0]).collect()
    }
}

/// Canned response for a capability request, `None` for fire-and-forget ones.
pub fn response_for(code: u8) -> Option<Vec<u8>> {
    let f32s = |values: &[f32]| -> Vec<u8> { values.iter().flat_map(|v| v.to_le_bytes()).collect() };
    match code {
        7 => Some(f32s(&[1.0 / 60.0])),
        10 => Some(vec![0u8; 80 * 60 * 4]),
        11 => Some(640u32.to_le_bytes().to_vec()),
        12 => Some(480u32.to_le_bytes().to_vec()),
        13..=15 => Some(vec![0]),
        16 => Some(f32s(&[0.5])),
        17 => Some(f32s(&[-0.25, 0.0])),
        24 => Some(720u32.to_le_bytes().to_vec()),
        25 => Some(f32s(&(0..720).map(|i| i as f32).collect::<Vec<_>>())),
        26 => Some(f32s(&[0.0, -9.8, 0.0])),
        27 => Some(f32s(&[0.0, 0.1, 0.0])),
        _ => None,
    }
}
