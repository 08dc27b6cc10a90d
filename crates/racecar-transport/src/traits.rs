use crate::error::Result;

/// A message-oriented channel to the simulation host.
///
/// Every call to [`Datagram::send`] emits exactly one packet and every call to
/// [`Datagram::receive`] consumes exactly one. There is no framing beyond the
/// datagram boundary itself.
pub trait Datagram {
    /// Send one datagram to the peer.
    fn send(&mut self, datagram: &[u8]) -> Result<()>;

    /// Block until one datagram arrives and copy it into `buf`.
    ///
    /// Returns the number of bytes written. Datagrams longer than `buf` are
    /// truncated to `buf.len()`.
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize>;
}

impl<T: Datagram + ?Sized> Datagram for &mut T {
    fn send(&mut self, datagram: &[u8]) -> Result<()> {
        (**self).send(datagram)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).receive(buf)
    }
}

impl<T: Datagram + ?Sized> Datagram for Box<T> {
    fn send(&mut self, datagram: &[u8]) -> Result<()> {
        (**self).send(datagram)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).receive(buf)
    }
}
