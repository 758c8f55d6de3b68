//! RV32I emulator CLI.
//!
//! This binary loads a flat image into ROM and runs it. Per outer iteration it performs:
//! 1. **Poll:** The UART (when attached) exchanges bytes with the host pty.
//! 2. **Step:** One instruction is executed.
//! 3. **Controls:** Optional register dump, host delay and single-step pause.
//!
//! Logging goes to stderr through `tracing`; `RUST_LOG` overrides the level chosen by `-v`.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rv32sim_core::common::SimError;
use rv32sim_core::config::Config;
use rv32sim_core::sim::loader;
use rv32sim_core::soc::devices::Uart;
#[cfg(unix)]
use rv32sim_core::soc::host::Pty;
use rv32sim_core::{AddressSpace, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "RV32I emulator with a pty-backed UART",
    long_about = "Load a flat binary into ROM and execute it.\n\nExamples:\n  sim firmware.bin\n  sim -u --wait firmware.bin\n  sim -v -s -p -c machine.json firmware.bin"
)]
struct Cli {
    /// Flat binary image, loaded at the ROM base.
    image: PathBuf,

    /// Log the disassembly of every executed instruction.
    #[arg(short, long)]
    verbose: bool,

    /// Wait for Enter after every cycle.
    #[arg(short, long)]
    single_step: bool,

    /// Dump the program counter and registers after every cycle.
    #[arg(short, long)]
    print_regs: bool,

    /// Map the UART and bridge it to a freshly allocated pseudo-terminal.
    #[arg(short = 'u', long)]
    enable_uart: bool,

    /// JSON configuration file (memory map, start PC, pacing).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many cycles.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Wait for Enter before execution starts.
    #[arg(long)]
    wait: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (mut sim, config) = match build(&cli) {
        Ok(built) => built,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &config, &mut sim) {
        error!("{e}");
        sim.cpu.dump_state();
        sim.stats.print();
        process::exit(1);
    }
    sim.stats.print();
}

/// Assembles the machine: config, optional UART, address space and the loaded image.
fn build(cli: &Cli) -> Result<(Simulator, Config), SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.verbose;
    config.uart.enabled |= cli.enable_uart;
    if cli.max_cycles.is_some() {
        config.general.max_cycles = cli.max_cycles;
    }
    config.validate()?;

    let uart = if config.uart.enabled {
        Some(open_uart()?)
    } else {
        None
    };

    let mut bus = AddressSpace::from_config(&config, uart)?;
    let image = loader::load_binary(&cli.image)?;
    loader::load_rom_image(&mut bus, &config, 0, &image)?;
    println!("Loaded file into memory: {}", cli.image.display());

    let sim = Simulator::new(bus, &config);
    info!(
        pc = format_args!("{:#010x}", sim.cpu.pc),
        uart = config.uart.enabled,
        "machine ready"
    );
    Ok((sim, config))
}

#[cfg(unix)]
fn open_uart() -> Result<Uart, SimError> {
    let pty = Pty::open().map_err(SimError::HostChannel)?;
    println!("Serial port: {}", pty.slave_path().display());
    Ok(Uart::new(Box::new(pty)))
}

#[cfg(not(unix))]
fn open_uart() -> Result<Uart, SimError> {
    let (channel, _host) = rv32sim_core::soc::host::Loopback::pair();
    println!("Serial port: unavailable on this platform, UART output is discarded");
    Ok(Uart::new(Box::new(channel)))
}

fn wait_for_enter(prompt: Option<&str>) {
    if let Some(prompt) = prompt {
        println!("{prompt}");
    }
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

fn run(cli: &Cli, config: &Config, sim: &mut Simulator) -> Result<(), SimError> {
    let max_cycles = config.general.max_cycles;
    let delay = Duration::from_micros(config.general.cycle_delay_us);

    if cli.wait {
        wait_for_enter(Some("Press Enter to begin execution..."));
    }

    let mut cycles: u64 = 0;
    while max_cycles.is_none_or(|max| cycles < max) {
        let _ = sim.tick()?;
        cycles += 1;

        if cli.print_regs {
            sim.cpu.dump_state();
            println!();
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        if cli.single_step {
            wait_for_enter(None);
        }
    }
    info!(cycles, "cycle limit reached");
    Ok(())
}
