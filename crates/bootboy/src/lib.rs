pub mod cli;
pub mod debugger;
pub mod diag;
pub mod sink;

use anyhow::{Context, Result};
use bootboy_gb::cpu::FlagPolicy;
use bootboy_gb::{Cartridge, Debugger, EmulatorConfig, GameBoy, NullDebugger, RunExit};

use crate::cli::Args;
use crate::debugger::Stepper;
use crate::sink::DirectorySink;

pub fn run(args: &Args) -> Result<()> {
    let cartridge = Cartridge::from_path(&args.cartridge)
        .with_context(|| format!("reading cartridge '{}'", args.cartridge.display()))?;

    if args.header {
        print_header(&cartridge);
        return Ok(());
    }

    let config = config_from_args(args);
    let sink = DirectorySink::create(&args.output, args.format)
        .with_context(|| format!("creating output directory '{}'", args.output.display()))?;

    let exit = if args.step {
        run_machine(args, config, &cartridge, sink, Stepper::stdio())?
    } else {
        run_machine(args, config, &cartridge, sink, NullDebugger)?
    };
    log::info!("Finished: {exit:?}");
    Ok(())
}

pub fn config_from_args(args: &Args) -> EmulatorConfig {
    let flag_policy = if args.legacy_flags {
        FlagPolicy::Legacy
    } else {
        FlagPolicy::default()
    };
    EmulatorConfig::builder()
        .flag_policy(flag_policy)
        .max_steps(args.max_steps)
        .stop_at(args.stop_at)
        .build()
}

fn run_machine<D: Debugger>(
    args: &Args,
    config: EmulatorConfig,
    cartridge: &Cartridge,
    sink: DirectorySink,
    debugger: D,
) -> Result<RunExit> {
    let mut gb = GameBoy::with_parts(config, sink, debugger);
    log::debug!("{:?}", gb.config());
    gb.load_boot_path(&args.boot)
        .with_context(|| format!("loading boot ROM '{}'", args.boot.display()))?;
    gb.load_cartridge(cartridge);

    let exit = gb.run().context("emulation stopped")?;
    log::info!(
        "{} frames written to {}",
        gb.sink().written(),
        gb.sink().dir().display()
    );
    Ok(exit)
}

fn print_header(cartridge: &Cartridge) {
    println!("Title: {}", cartridge.title());
    match cartridge.logo() {
        Some(logo) => {
            print!(
                "{}",
                bootboy_common::hexdump(logo, bootboy_gb::cartridge::LOGO_START)
            );
            if let Some(preview) = cartridge.logo_preview() {
                print!("{preview}");
            }
        }
        None => println!("Image too short for a header ({} bytes)", cartridge.len()),
    }
}
