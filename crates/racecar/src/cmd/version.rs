use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("racecar {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: racecar");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "build_target: {}",
        option_env!("RACECAR_BUILD_TARGET").unwrap_or("unknown")
    );
    println!(
        "build_profile: {}",
        option_env!("RACECAR_BUILD_PROFILE").unwrap_or("unknown")
    );
    println!(
        "default_ports: client={} host={}",
        racecar_transport::DEFAULT_CLIENT_PORT,
        racecar_transport::DEFAULT_HOST_PORT
    );
    println!(
        "features: capability={}, cli=true",
        cfg!(feature = "capability")
    );

    Ok(SUCCESS)
}
