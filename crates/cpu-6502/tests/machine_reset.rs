//! `reset()` is documented to prepare its own reset vector through the bus,
//! not rely on the caller to have done it first. Exercise that through a
//! real bus implementation, not the flat `TestBus` used elsewhere, since a
//! flat bus has no notion of a ROM window to get wrong in the first place.

use cpu_6502::Mos6502;
use machine_apple1::Memory;

#[test]
fn reset_loads_pc_from_rom_start_without_a_separate_reset_vector_call() {
    let rom_start = 0xC000;
    let mut memory = Memory::new(rom_start);
    memory.load_data(&[0xEA], rom_start).unwrap();

    let mut cpu = Mos6502::new();
    cpu.reset(&mut memory);

    assert_eq!(cpu.pc(), rom_start);
}
