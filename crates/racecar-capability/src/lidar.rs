use racecar_session::{Link, Result};
use racecar_transport::Datagram;
use racecar_wire::Command;
use tracing::trace;

/// Samples in one full scan, evenly spaced clockwise from straight ahead.
pub const NUM_SAMPLES: usize = 720;

/// Cached scan, refreshed once per frame by the session loop.
#[derive(Debug, Clone, Default)]
pub struct LidarScan {
    ranges: Vec<f32>,
}

/// Handle to the lidar module.
pub struct Lidar<'a, T> {
    link: &'a mut Link<T>,
    scan: &'a mut LidarScan,
}

impl<'a, T: Datagram> Lidar<'a, T> {
    pub(crate) fn new(link: &'a mut Link<T>, scan: &'a mut LidarScan) -> Self {
        Self { link, scan }
    }

    /// The most recent scan in centimeters. Empty until the first frame ends.
    pub fn get_ranges(self) -> &'a [f32] {
        let scan: &'a LidarScan = self.scan;
        &scan.ranges
    }

    /// Number of samples per scan as reported by the host.
    pub fn get_num_samples(&mut self) -> Result<u32> {
        let packet = self.link.writer(Command::LidarGetLength);
        Ok(self.link.request(packet, 4)?.get_u32()?)
    }

    /// Fetch a fresh scan from the host into the cache.
    pub(crate) fn update(&mut self) -> Result<()> {
        let packet = self.link.writer(Command::LidarGetRanges);
        self.scan.ranges = self
            .link
            .request(packet, NUM_SAMPLES * 4)?
            .get_f32_vec(NUM_SAMPLES)?;
        trace!(samples = self.scan.ranges.len(), "lidar scan refreshed");
        Ok(())
    }
}
