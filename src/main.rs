use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use log::{LevelFilter, error, info};
use structopt::StructOpt;

use nescore::cpu::disassembler;
use nescore::{Bus, Cpu, EmuError};

const BATCH_START: u16 = 0xC000;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "nestest",
    about = "Run the nestest ROM and check the CPU against the reference trace"
)]
struct Opt {
    /// Run in batch mode: start at 0xC000 and compare every trace line
    /// against the reference log
    #[structopt(short = "b", long)]
    batch: bool,

    /// Pause before each instruction; press Enter to step
    #[structopt(short = "s", long)]
    stepping: bool,

    /// Verbosity level (-v for debug, -vv for trace)
    #[structopt(short = "v", parse(from_occurrences))]
    verbose: u8,

    /// Path to the nestest ROM image
    #[structopt(long, default_value = "nestest.nes")]
    rom: PathBuf,

    /// Path to the reference trace used in batch mode
    #[structopt(long = "log", default_value = "nestest.log")]
    reference: PathBuf,
}

fn main() {
    let opt = Opt::from_args();
    let level = match opt.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    process::exit(match run(&opt) {
        Ok(()) => 0,
        Err(code) => code,
    });
}

fn run(opt: &Opt) -> Result<(), i32> {
    let rom_data = fs::read(&opt.rom).map_err(|error| {
        error!("cannot read {}: {error}", opt.rom.display());
        1
    })?;

    let mut bus = Bus::new();
    bus.load_rom(&rom_data).map_err(|error| {
        error!("{error}");
        1
    })?;
    info!("loaded {}", opt.rom.display());

    let reference: Vec<String> = if opt.batch {
        let text = fs::read_to_string(&opt.reference).map_err(|error| {
            error!("cannot read {}: {error}", opt.reference.display());
            1
        })?;
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        info!("loaded reference trace with {} lines", lines.len());
        lines
    } else {
        Vec::new()
    };

    let mut cpu = Cpu::new(&mut bus);
    cpu.init();
    if opt.batch {
        // The reset vector needs a working PPU; the automated self-test
        // entry point does not.
        cpu.set_program_start(BATCH_START);
    }

    let stdin = io::stdin();
    let mut executed = 0usize;
    loop {
        // The reference run stops at the first BRK without tracing it.
        if cpu.read_u8(cpu.program_counter) == 0x00 {
            info!("reached BRK at {:#06X}", cpu.program_counter);
            break;
        }

        if opt.stepping {
            eprint!("step> ");
            let _ = io::stderr().flush();
            let mut input = String::new();
            if stdin.lock().read_line(&mut input).is_err() {
                break;
            }
        }

        let line = disassembler::trace(&cpu).map_err(|error| {
            error!("{error}");
            1
        })?;
        println!("{line}");

        if opt.batch {
            match reference.get(executed) {
                // The reference carries PPU and cycle columns past our
                // line; compare the prefix we produce.
                Some(expected) if expected.starts_with(line.as_str()) => {}
                Some(expected) => {
                    error!(
                        "trace mismatch at line {}:\n  ours:      {line}\n  reference: {expected}",
                        executed + 1
                    );
                    return Err(1);
                }
                None => {
                    info!("reference trace exhausted after {executed} lines");
                    break;
                }
            }
        }

        executed += 1;
        match cpu.step() {
            Ok(_) => {}
            Err(EmuError::Break { pc }) => {
                info!("BRK executed, stopped at {pc:#06X}");
                break;
            }
            Err(error) => {
                error!("{error}");
                return Err(1);
            }
        }
    }

    info!("executed {executed} instructions");
    Ok(())
}
