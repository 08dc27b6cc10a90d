use racecar_transport::Datagram;

use crate::error::Result;
use crate::link::Link;

/// The object a session drives: it owns the link and any capability state.
///
/// User callbacks receive `&mut V` and reach the simulator through the
/// capability modules the vehicle exposes.
pub trait Vehicle {
    /// Transport the link runs over.
    type Transport: Datagram;

    /// The link every packet of this session goes through.
    fn link(&mut self) -> &mut Link<Self::Transport>;

    /// Module refresh hook, run once per frame after the frame callback
    /// returns and before the frame is acknowledged.
    fn refresh(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A bare link is a vehicle with no capability modules.
impl<T: Datagram> Vehicle for Link<T> {
    type Transport = T;

    fn link(&mut self) -> &mut Link<T> {
        self
    }
}
