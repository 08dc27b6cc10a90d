use racecar_session::{Link, Result, SessionError, Vehicle};
use racecar_transport::{Datagram, TransportConfig, UdpTransport};
use racecar_wire::{Command, WireConfig};

use crate::camera::Camera;
use crate::controller::Controller;
use crate::drive::Drive;
use crate::lidar::{Lidar, LidarScan};
use crate::physics::Physics;

/// Everything needed to reach the simulation host.
#[derive(Debug, Clone, Default)]
pub struct RacecarConfig {
    pub transport: TransportConfig,
    pub wire: WireConfig,
}

/// The simulated car: the link to the host plus per-module state.
///
/// Module handles borrow the car for the duration of one call chain, e.g.
/// `car.drive().set_speed_angle(0.5, 0.0)`.
pub struct Racecar<T = UdpTransport> {
    link: Link<T>,
    scan: LidarScan,
}

impl Racecar<UdpTransport> {
    /// Bind the UDP endpoint and build a car on top of it.
    pub fn open(config: RacecarConfig) -> Result<Self> {
        let transport = UdpTransport::open(config.transport)?;
        Ok(Self::new(Link::with_config(transport, config.wire)))
    }
}

impl<T: Datagram> Racecar<T> {
    /// Build a car over an existing link.
    pub fn new(link: Link<T>) -> Self {
        Self {
            link,
            scan: LidarScan::default(),
        }
    }

    pub fn camera(&mut self) -> Camera<'_, T> {
        Camera::new(&mut self.link)
    }

    pub fn controller(&mut self) -> Controller<'_, T> {
        Controller::new(&mut self.link)
    }

    pub fn drive(&mut self) -> Drive<'_, T> {
        Drive::new(&mut self.link)
    }

    pub fn lidar(&mut self) -> Lidar<'_, T> {
        Lidar::new(&mut self.link, &mut self.scan)
    }

    pub fn physics(&mut self) -> Physics<'_, T> {
        Physics::new(&mut self.link)
    }

    /// Seconds of simulated time covered by the current frame.
    pub fn get_delta_time(&mut self) -> Result<f32> {
        let packet = self.link.writer(Command::RacecarGetDeltaTime);
        self.link.request(packet, 4)?.get_f32().map_err(Into::into)
    }

    /// Ask the host to slow the update rate to one frame per `seconds`.
    pub fn set_update_slow_time(&mut self, seconds: f32) -> Result<()> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(SessionError::InvalidArgument(format!(
                "update slow time must be a non-negative number of seconds, got {seconds}"
            )));
        }
        let mut packet = self.link.writer(Command::RacecarSetUpdateSlowTime);
        packet.put_f32(seconds);
        self.link.send_packet(packet)
    }

    /// Borrow the link directly, for commands without a module wrapper.
    pub fn link_mut(&mut self) -> &mut Link<T> {
        &mut self.link
    }
}

impl<T: Datagram> Vehicle for Racecar<T> {
    type Transport = T;

    fn link(&mut self) -> &mut Link<T> {
        &mut self.link
    }

    fn refresh(&mut self) -> Result<()> {
        self.lidar().update()
    }
}
