use racecar_session::{Link, Result};
use racecar_transport::Datagram;
use racecar_wire::Command;

/// A vector in the car's frame: x right, y up, z forward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Handle to the inertial measurement module.
pub struct Physics<'a, T> {
    link: &'a mut Link<T>,
}

impl<'a, T: Datagram> Physics<'a, T> {
    pub(crate) fn new(link: &'a mut Link<T>) -> Self {
        Self { link }
    }

    /// Linear acceleration in m/s².
    pub fn get_linear_acceleration(&mut self) -> Result<Vector3> {
        self.vector(Command::PhysicsGetLinearAcceleration)
    }

    /// Angular velocity in rad/s.
    pub fn get_angular_velocity(&mut self) -> Result<Vector3> {
        self.vector(Command::PhysicsGetAngularVelocity)
    }

    fn vector(&mut self, command: Command) -> Result<Vector3> {
        let packet = self.link.writer(command);
        let mut response = self.link.request(packet, 12)?;
        Ok(Vector3 {
            x: response.get_f32()?,
            y: response.get_f32()?,
            z: response.get_f32()?,
        })
    }
}
