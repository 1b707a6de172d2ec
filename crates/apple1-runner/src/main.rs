//! Composition root: parses the CLI, assembles the machine, and drives the
//! frame scheduler until the host asks it to stop or the CPU hits a fatal
//! condition.

mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use cpu_6502::Mos6502;
use error::RunError;
use machine_apple1::{Keyboard, Memory};

/// CPU clock rate the scheduler paces against.
const CPU_HZ: u32 = 1_000_000;
/// Frame rate the scheduler paces against.
const FPS: u32 = 60;
/// CPU cycles budgeted per frame.
const CYCLES_PER_FRAME: u32 = CPU_HZ / FPS;
/// Wall-clock duration of one frame.
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / FPS as u64);

/// An Apple 1 emulator: a 6502 CPU, 64 KiB of memory, a teletype display
/// and a non-blocking keyboard, paced at 1 MHz / 60 FPS.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to the monitor ROM image, loaded at `monitor_start`.
    #[arg(short = 'm', long = "monitor_rom")]
    monitor_rom: Option<PathBuf>,

    /// Address the monitor ROM is loaded at and the reset vector points
    /// to, in hex without a `0x` prefix.
    #[arg(short = 's', long = "monitor_start", value_parser = parse_hex_u16, default_value = "F000")]
    monitor_start: u16,

    /// Optional program image, loaded at `program_start`.
    #[arg(short = 'p', long = "program_data")]
    program_data: Option<PathBuf>,

    /// Address the program image is loaded at, in hex without a `0x`
    /// prefix.
    #[arg(short = 'd', long = "program_start", value_parser = parse_hex_u16, default_value = "2000")]
    program_start: u16,
}

fn parse_hex_u16(raw: &str) -> Result<u16, String> {
    u16::from_str_radix(raw, 16).map_err(|err| format!("invalid hex address `{raw}`: {err}"))
}

/// Restores the host terminal's cooked mode on every exit path, including
/// early returns from setup errors and unwinding after a fatal opcode.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> std::io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, RunError> {
    std::fs::read(path).map_err(|source| RunError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

fn build_machine(cli: &Cli) -> Result<Memory, RunError> {
    let mut memory = Memory::new(cli.monitor_start);

    if let Some(monitor_rom) = &cli.monitor_rom {
        let rom = read_file(monitor_rom)?;
        memory.load_data(&rom, cli.monitor_start)?;
    }

    if let Some(program_data) = &cli.program_data {
        let program = read_file(program_data)?;
        memory.load_data(&program, cli.program_start)?;
    }

    Ok(memory)
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let mut memory = build_machine(cli)?;

    let keyboard = Keyboard::new();
    keyboard.install(&mut memory);
    machine_apple1::install_video(&mut memory, std::io::stdout());

    let mut cpu = Mos6502::new();
    cpu.reset(&mut memory);

    let _raw_mode = RawModeGuard::enable()?;

    let mut emu_time = Instant::now();
    loop {
        let mut cycles = 0u32;
        while cycles < CYCLES_PER_FRAME {
            if keyboard.poll()? {
                return Ok(());
            }
            cycles += cpu.step(&mut memory)?;
        }

        emu_time += FRAME_TIME;
        let now = Instant::now();
        if emu_time > now {
            std::thread::sleep(emu_time - now);
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
