use std::process::ExitCode;

use bootboy::cli::Args;
use bootboy_gb::EmuError;
use clap::Parser;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match bootboy::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(info) = err
                .downcast_ref::<EmuError>()
                .and_then(EmuError::unsupported_opcode)
            {
                eprint!("{}", bootboy::diag::report(info));
            }
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
