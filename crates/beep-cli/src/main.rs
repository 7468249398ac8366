use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use beep_core::DriverRegistry;
use clap::Parser;

mod logger;

#[derive(Parser, Debug)]
#[command(name = "beep", version, about = "Beep through the Linux input event API")]
struct Args {
    /// Tone frequency in Hz
    #[arg(short, long, default_value_t = 440)]
    frequency: u16,

    /// Tone length in milliseconds
    #[arg(short, long, default_value_t = 200)]
    length: u64,

    /// Input event device to use instead of the PC speaker default
    #[arg(short = 'e', long)]
    device: Option<PathBuf>,

    /// More diagnostics (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_for(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(level_for(args.verbose));

    let mut registry = DriverRegistry::new();
    beep_evdev::register(&mut registry);

    let driver = registry
        .detect(args.device.as_deref())
        .context("no usable beep device found")?;
    log::info!(
        "using driver {} on {}",
        driver.name(),
        driver
            .device_name()
            .map(|path| path.display().to_string())
            .unwrap_or_default()
    );

    driver.begin_tone(args.frequency);
    thread::sleep(Duration::from_millis(args.length));
    driver.end_tone();
    registry.fini();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["beep"]).unwrap();
        assert_eq!(args.frequency, 440);
        assert_eq!(args.length, 200);
        assert!(args.device.is_none());
        assert_eq!(level_for(args.verbose), log::LevelFilter::Warn);
    }

    #[test]
    fn test_device_and_verbosity() {
        let args = Args::try_parse_from(["beep", "-f", "1000", "-e", "/dev/input/event3", "-vv"])
            .unwrap();
        assert_eq!(args.frequency, 1000);
        assert_eq!(args.device, Some(PathBuf::from("/dev/input/event3")));
        assert_eq!(level_for(args.verbose), log::LevelFilter::Debug);
    }

    #[test]
    fn test_frequency_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["beep", "-f", "70000"]).is_err());
    }
}
