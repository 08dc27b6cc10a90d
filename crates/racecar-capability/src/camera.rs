//! Color and depth camera.
//!
//! The color image is too large for one datagram, so the host streams it as
//! [`COLOR_CHUNKS`] equally sized datagrams after a single request. The depth
//! image fits in one.

use racecar_session::{Link, Result};
use racecar_transport::Datagram;
use racecar_wire::Command;
use tracing::debug;

pub const COLOR_WIDTH: usize = 640;
pub const COLOR_HEIGHT: usize = 480;
/// Bytes per color pixel (RGBA).
pub const COLOR_CHANNELS: usize = 4;
pub const COLOR_IMAGE_BYTES: usize = COLOR_WIDTH * COLOR_HEIGHT * COLOR_CHANNELS;
/// Datagrams the color image is split across.
pub const COLOR_CHUNKS: usize = 32;

pub const DEPTH_WIDTH: usize = COLOR_WIDTH / 8;
pub const DEPTH_HEIGHT: usize = COLOR_HEIGHT / 8;

/// Row-major RGBA image, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl ColorImage {
    /// The RGBA value at (`row`, `col`), if in bounds.
    pub fn pixel(&self, row: usize, col: usize) -> Option<[u8; 4]> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let start = (row * self.width + col) * COLOR_CHANNELS;
        let px = self.data.get(start..start + COLOR_CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Row-major depth image in centimeters, top row first. `0.0` means no return.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

impl DepthImage {
    /// The depth at (`row`, `col`), if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Iterate rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks(self.width)
    }
}

/// Handle to the camera module.
pub struct Camera<'a, T> {
    link: &'a mut Link<T>,
}

impl<'a, T: Datagram> Camera<'a, T> {
    pub(crate) fn new(link: &'a mut Link<T>) -> Self {
        Self { link }
    }

    /// Capture the current color frame.
    pub fn get_color_image(&mut self) -> Result<ColorImage> {
        let chunk_len = COLOR_IMAGE_BYTES / COLOR_CHUNKS;
        self.link.send_command(Command::CameraGetImage)?;

        let mut data = Vec::with_capacity(COLOR_IMAGE_BYTES);
        for _ in 0..COLOR_CHUNKS {
            let chunk = self.link.receive_payload(Command::CameraGetImage, chunk_len)?;
            data.extend_from_slice(&chunk.into_remaining()[..chunk_len]);
        }
        debug!(bytes = data.len(), "color image received");

        Ok(ColorImage {
            width: COLOR_WIDTH,
            height: COLOR_HEIGHT,
            data,
        })
    }

    /// Capture the current depth frame.
    pub fn get_depth_image(&mut self) -> Result<DepthImage> {
        let count = DEPTH_WIDTH * DEPTH_HEIGHT;
        let packet = self.link.writer(Command::CameraGetDepthImage);
        let data = self.link.request(packet, count * 4)?.get_f32_vec(count)?;
        Ok(DepthImage {
            width: DEPTH_WIDTH,
            height: DEPTH_HEIGHT,
            data,
        })
    }

    /// Color image width reported by the host.
    pub fn get_width(&mut self) -> Result<u32> {
        let packet = self.link.writer(Command::CameraGetWidth);
        Ok(self.link.request(packet, 4)?.get_u32()?)
    }

    /// Color image height reported by the host.
    pub fn get_height(&mut self) -> Result<u32> {
        let packet = self.link.writer(Command::CameraGetHeight);
        Ok(self.link.request(packet, 4)?.get_u32()?)
    }
}

#[cfg(test)]
mod tests {
    use racecar_session::SessionError;
    use racecar_transport::MemoryTransport;
    use racecar_wire::{ByteOrder, WireConfig, WireError};

    use super::*;

    fn link(inbound: Vec<Vec<u8>>) -> Link<MemoryTransport> {
        Link::with_config(
            MemoryTransport::with_inbound(inbound),
            WireConfig {
                byte_order: ByteOrder::Little,
            },
        )
    }

    #[test]
    fn color_image_is_reassembled_from_chunks() {
        let chunk_len = COLOR_IMAGE_BYTES / COLOR_CHUNKS;
        let chunks: Vec<Vec<u8>> = (0..COLOR_CHUNKS).map(|i| vec![i as u8; chunk_len]).collect();
        let mut link = link(chunks);

        let image = Camera::new(&mut link).get_color_image().unwrap();

        assert_eq!(image.data.len(), COLOR_IMAGE_BYTES);
        assert_eq!(image.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(image.pixel(COLOR_HEIGHT - 1, COLOR_WIDTH - 1), Some([31; 4]));
        assert_eq!(image.pixel(COLOR_HEIGHT, 0), None);
        assert_eq!(link.get_ref().sent(), vec![&[9u8][..]]);
    }

    #[test]
    fn short_color_chunk_fails() {
        let mut link = link(vec![vec![0u8; 10]]);
        let err = Camera::new(&mut link).get_color_image().unwrap_err();
        assert!(matches!(
            err,
            SessionError::Wire(WireError::Truncated {
                command: Command::CameraGetImage,
                ..
            })
        ));
    }

    #[test]
    fn depth_image_layout() {
        let raw: Vec<u8> = (0..DEPTH_WIDTH * DEPTH_HEIGHT)
            .flat_map(|i| (i as f32).to_le_bytes())
            .collect();
        let mut link = link(vec![raw]);

        let depth = Camera::new(&mut link).get_depth_image().unwrap();

        assert_eq!(depth.get(0, 1), Some(1.0));
        assert_eq!(depth.get(1, 0), Some(DEPTH_WIDTH as f32));
        assert_eq!(depth.rows().count(), DEPTH_HEIGHT);
        assert_eq!(depth.get(0, DEPTH_WIDTH), None);
    }

    #[test]
    fn dimensions() {
        let mut link = link(vec![640u32.to_le_bytes().to_vec(), 480u32.to_le_bytes().to_vec()]);
        let mut camera = Camera::new(&mut link);
        assert_eq!(camera.get_width().unwrap(), 640);
        assert_eq!(camera.get_height().unwrap(), 480);
        assert_eq!(link.get_ref().sent(), vec![&[11u8][..], &[12u8][..]]);
    }
}
