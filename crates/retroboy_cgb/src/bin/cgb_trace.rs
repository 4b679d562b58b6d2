use std::path::PathBuf;

use anyhow::{Context, Result};
use retroboy_cgb::{Cgb, CgbConfig};

const USAGE: &str = "Usage: cgb_trace <rom_path> [instructions]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });
    let instructions: u64 = match args.next() {
        Some(count) => count.parse().unwrap_or_else(|_| {
            eprintln!("Invalid instruction count '{count}'; expected an integer.");
            std::process::exit(2);
        }),
        None => 1000,
    };

    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;

    let config = CgbConfig::builder().post_boot_state(true).build();
    let mut cgb = Cgb::from_rom(&rom, config)
        .with_context(|| format!("failed to load ROM '{}'", rom_path.display()))?;

    let mut executed = 0u64;
    let mut cycles = 0u64;
    while executed < instructions {
        match cgb.step() {
            Ok(step_cycles) => cycles += u64::from(step_cycles),
            Err(err) => {
                eprintln!("Stopped after {executed} instructions: {err}");
                break;
            }
        }
        executed += 1;
    }

    let regs = &cgb.cpu.regs;
    println!("instructions={executed} m_cycles={cycles}");
    println!(
        "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X} IME={} HALT={}",
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl(),
        regs.sp,
        regs.pc,
        u8::from(cgb.cpu.ime),
        u8::from(cgb.cpu.halted),
    );
    let unmapped = cgb.mmu.unmapped_accesses();
    println!(
        "unmapped reads={} writes={}",
        unmapped.reads, unmapped.writes
    );

    Ok(())
}
