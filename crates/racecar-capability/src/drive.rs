use racecar_session::{Link, Result, SessionError};
use racecar_transport::Datagram;
use racecar_wire::Command;

/// Handle to the drive module. Every call is fire-and-forget.
pub struct Drive<'a, T> {
    link: &'a mut Link<T>,
}

impl<'a, T: Datagram> Drive<'a, T> {
    pub(crate) fn new(link: &'a mut Link<T>) -> Self {
        Self { link }
    }

    /// Set throttle and steering, each in `[-1.0, 1.0]`.
    ///
    /// Positive speed drives forward; positive angle steers right.
    pub fn set_speed_angle(&mut self, speed: f32, angle: f32) -> Result<()> {
        check_range("speed", speed, -1.0, 1.0)?;
        check_range("angle", angle, -1.0, 1.0)?;
        let mut packet = self.link.writer(Command::DriveSetSpeedAngle);
        packet.put_f32(speed).put_f32(angle);
        self.link.send_packet(packet)
    }

    /// Bring the car to a stop.
    pub fn stop(&mut self) -> Result<()> {
        self.link.send_command(Command::DriveStop)
    }

    /// Scale the speed reached at full throttle, in `[0.0, 1.0]`.
    pub fn set_max_speed_scale_factor(&mut self, factor: f32) -> Result<()> {
        check_range("max speed scale factor", factor, 0.0, 1.0)?;
        let mut packet = self.link.writer(Command::DriveSetMaxSpeedScaleFactor);
        packet.put_f32(factor);
        self.link.send_packet(packet)
    }
}

fn check_range(name: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(SessionError::InvalidArgument(format!(
            "{name} must be in [{min}, {max}], got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use racecar_transport::MemoryTransport;
    use racecar_wire::{ByteOrder, WireConfig};

    use super::*;

    fn link() -> Link<MemoryTransport> {
        Link::with_config(
            MemoryTransport::new(),
            WireConfig {
                byte_order: ByteOrder::Big,
            },
        )
    }

    #[test]
    fn speed_angle_packet() {
        let mut link = link();
        Drive::new(&mut link).set_speed_angle(1.0, -0.5).unwrap();

        let mut expected = vec![19u8];
        expected.extend_from_slice(&1.0f32.to_be_bytes());
        expected.extend_from_slice(&(-0.5f32).to_be_bytes());
        assert_eq!(link.get_ref().sent(), vec![expected.as_slice()]);
    }

    #[test]
    fn out_of_range_sends_nothing() {
        let mut link = link();
        let mut drive = Drive::new(&mut link);

        assert!(matches!(
            drive.set_speed_angle(1.5, 0.0),
            Err(SessionError::InvalidArgument(_))
        ));
        assert!(matches!(
            drive.set_speed_angle(0.0, f32::NAN),
            Err(SessionError::InvalidArgument(_))
        ));
        assert!(matches!(
            drive.set_max_speed_scale_factor(-0.1),
            Err(SessionError::InvalidArgument(_))
        ));
        assert!(link.get_ref().events().is_empty());
    }

    #[test]
    fn stop_and_scale() {
        let mut link = link();
        let mut drive = Drive::new(&mut link);
        drive.stop().unwrap();
        drive.set_max_speed_scale_factor(0.25).unwrap();

        let mut scale = vec![21u8];
        scale.extend_from_slice(&0.25f32.to_be_bytes());
        assert_eq!(link.get_ref().sent(), vec![&[20u8][..], scale.as_slice()]);
    }
}
