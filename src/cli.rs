use anyhow::{Result, anyhow};
use pico_args::Arguments;
use std::{env, path::PathBuf};

use gesturectl::{config, input, pipeline, replay};

pub fn run() -> Result<()> {
    let mut pargs = Arguments::from_env();

    // No args -> general help
    if env::args().len() == 1 {
        print_help();
        return Ok(());
    }

    // Flags-based help (-h/--help)
    if pargs.contains("-h") || pargs.contains("--help") {
        print_help();
        return Ok(());
    }

    // First free arg is the subcommand
    let subcmd: Option<String> = pargs.free_from_str().ok();

    match subcmd.as_deref() {
        Some("help") => {
            let topic: Option<String> = pargs.free_from_str().ok();
            if let Some(t) = topic {
                print_subcmd_help(&t);
            } else {
                print_help();
            }
            Ok(())
        }

        Some("devices") => {
            let devices = input::discover_pointer_devices();
            if devices.is_empty() {
                println!("no pointer devices detected");
            }
            for d in devices {
                println!("{} ({})", d.name, d.path);
            }
            Ok(())
        }

        Some("watch") => {
            let device: Option<String> = pargs.opt_value_from_str("--device")?;
            let profile = load_profile_arg(&mut pargs)?;
            pipeline::watch(device, &profile)
        }

        Some("replay") => {
            let profile = load_profile_arg(&mut pargs)?;
            let file: PathBuf = pargs
                .free_from_str()
                .map_err(|_| anyhow!("usage: gesturectl replay <trace.json>"))?;
            let samples = replay::load_trace(&file)?;
            let gestures = replay::run_trace(&samples, profile.thresholds);
            if gestures.is_empty() {
                println!("no gestures recognized ({} samples)", samples.len());
            }
            for g in gestures {
                println!("{g}");
            }
            Ok(())
        }

        Some("profiles") => {
            for name in config::list_profiles()? {
                println!("{name}");
            }
            Ok(())
        }

        Some("check") => {
            let name: String = pargs
                .opt_value_from_str("--profile")?
                .unwrap_or_else(|| "default".to_string());
            let profile = config::load_profile(&name)?;
            let th = &profile.thresholds;
            println!("profile '{name}' is valid");
            println!("  swipe_min_dist = {}", th.swipe_min_dist);
            println!("  swipe_velocity = {}", th.swipe_velocity);
            println!("  hold_ms        = {}", th.hold_ms);
            println!("  tick_ms        = {}", th.tick_ms);
            Ok(())
        }

        Some(other) => {
            eprintln!("unknown subcommand: {other}\n");
            print_help();
            Ok(())
        }

        None => {
            print_help();
            Ok(())
        }
    }
}

fn load_profile_arg(pargs: &mut Arguments) -> Result<config::Profile> {
    let name: Option<String> = pargs.opt_value_from_str("--profile")?;
    let name = name.unwrap_or_else(|| "default".to_string());
    Ok(config::load_profile(&name)?)
}

fn print_help() {
    println!(
        r#"gesturectl — single-pointer gesture recognition (swipe / tap / hold)

USAGE:
  gesturectl help [command]                 Show general or command-specific help
  gesturectl devices                        List pointer-capable input devices
  gesturectl watch [--device PATH]          Watch a device and log gestures
              [--profile NAME]
  gesturectl replay <trace.json>            Replay a recorded sample trace
              [--profile NAME]
  gesturectl profiles                       List threshold profiles
  gesturectl check [--profile NAME]         Validate a profile and print thresholds

TIPS:
  - Profiles: ~/.config/gesturectl/profiles
  - A trace is a JSON array of pointer samples, one per tick
  - RUST_LOG=debug for verbose output
"#
    );
}

fn print_subcmd_help(cmd: &str) {
    match cmd {
        "devices" => println!(
            "usage: gesturectl devices\nLists evdev devices with absolute X/Y axes and BTN_TOUCH."
        ),
        "watch" => println!(
            "usage: gesturectl watch [--device PATH] [--profile NAME]\nWatches the given (or first detected) device and logs recognized gestures until Ctrl-C."
        ),
        "replay" => println!(
            "usage: gesturectl replay <trace.json> [--profile NAME]\nRuns a recorded trace through the recognizer and prints each gesture."
        ),
        "profiles" => println!(
            "usage: gesturectl profiles\nLists available threshold profiles; 'default' is installed on first run."
        ),
        "check" => println!(
            "usage: gesturectl check [--profile NAME]\nLoads and validates a profile, then prints the resolved thresholds."
        ),
        _ => {
            eprintln!("unknown command: {cmd}\n");
            print_help();
        }
    }
}
