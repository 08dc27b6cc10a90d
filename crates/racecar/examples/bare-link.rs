//! Session loop without the capability modules.
//!
//! Drives straight ahead by hand-building the drive packet on the raw link.
//!
//! Run with:
//!   cargo run --example bare-link --no-default-features

use racecar::session::{Link, Session};
use racecar::transport::UdpTransport;
use racecar::wire::Command;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let link = Link::new(UdpTransport::open_default()?);

    let mut frames = 0u64;
    let mut session = Session::new(
        link,
        |_link: &mut Link<UdpTransport>| {
            eprintln!("Simulator started the user program");
            Ok(())
        },
        move |link: &mut Link<UdpTransport>| {
            frames += 1;
            let mut packet = link.writer(Command::DriveSetSpeedAngle);
            packet.put_f32(0.3).put_f32(0.0);
            link.send_packet(packet)?;
            if frames % 60 == 0 {
                eprintln!("{frames} frames");
            }
            Ok(())
        },
    );
    session.go()?;
    Ok(())
}
