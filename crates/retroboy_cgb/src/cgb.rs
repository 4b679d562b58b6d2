use crate::config::CgbConfig;
use crate::cpu::Cpu;
use crate::error::Result;
use crate::mmu::{Mmu, MIN_ROM_SIZE};

/// Game Boy Color core: the CPU and the banked memory bus it runs against.
///
/// The CPU never owns the bus. Each [`Cgb::step`] lends `mmu` to the CPU for
/// the duration of one instruction.
pub struct Cgb {
    pub cpu: Cpu,
    pub mmu: Mmu,
}

impl Default for Cgb {
    fn default() -> Self {
        Self::new()
    }
}

impl Cgb {
    /// Minimum-size zeroed ROM, zeroed registers, default configuration.
    pub fn new() -> Self {
        Self::from_parts(Mmu::default(), &CgbConfig::default())
    }

    pub fn with_config(config: CgbConfig) -> Result<Self> {
        Self::with_rom_size(MIN_ROM_SIZE, config)
    }

    /// Build a core with a zero-filled ROM store of `rom_size` bytes.
    pub fn with_rom_size(rom_size: usize, config: CgbConfig) -> Result<Self> {
        let mmu = Mmu::new(rom_size)?;
        Ok(Self::from_parts(mmu, &config))
    }

    /// Build a core whose ROM store is a copy of `image`, sized to it.
    ///
    /// Header parsing and mapper behaviour are left to the cartridge layer;
    /// banks 0 and 1 of the image are mapped at 0x0000 and 0x4000.
    pub fn from_rom(image: &[u8], config: CgbConfig) -> Result<Self> {
        let mmu = Mmu::with_rom(image)?;
        log::info!("loaded {} KiB ROM image", image.len() / 1024);
        Ok(Self::from_parts(mmu, &config))
    }

    fn from_parts(mut mmu: Mmu, config: &CgbConfig) -> Self {
        mmu.set_warn_on_unmapped(config.warn_on_unmapped);

        let mut cpu = Cpu::new();
        cpu.set_unknown_opcode_policy(config.unknown_opcode);
        if config.post_boot_state {
            cpu.apply_cgb_boot_state();
        }

        Self { cpu, mmu }
    }

    /// Execute one instruction and return the M-cycles it took.
    pub fn step(&mut self) -> Result<u32> {
        self.cpu.step(&mut self.mmu)
    }

    /// Bus read on behalf of the CPU. Charges one cycle.
    pub fn read(&mut self, addr: u16) -> u8 {
        self.cpu.charge_cycle();
        self.mmu.peek(addr)
    }

    /// Bus write on behalf of the CPU. Charges one cycle.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.cpu.charge_cycle();
        self.mmu.poke(addr, value);
    }

    pub fn fetch_imm8(&mut self) -> u8 {
        self.cpu.fetch8(&mut self.mmu)
    }

    pub fn fetch_imm16(&mut self) -> u16 {
        self.cpu.fetch16(&mut self.mmu)
    }

    pub fn map_rom_bank0(&mut self, bank: usize) -> Result<()> {
        self.mmu.map_rom_bank0(bank)
    }

    pub fn map_rom_bank1(&mut self, bank: usize) -> Result<()> {
        self.mmu.map_rom_bank1(bank)
    }

    pub fn map_wram_bank0(&mut self, bank: usize) -> Result<()> {
        self.mmu.map_wram_bank0(bank)
    }

    pub fn map_wram_bank1(&mut self, bank: usize) -> Result<()> {
        self.mmu.map_wram_bank1(bank)
    }

    pub fn map_vram_bank(&mut self, bank: usize) -> Result<()> {
        self.mmu.map_vram_bank(bank)
    }

    /// Resume a halted or stopped CPU.
    pub fn wake(&mut self) {
        self.cpu.wake();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnknownOpcodePolicy;
    use crate::error::CgbError;
    use crate::mmu::{ROM_BANK_SIZE, UNUSABLE_END, UNUSABLE_START};

    /// 32 KiB ROM with `program` at the 0x0100 entry point.
    fn rom_with_program(program: &[u8]) -> Vec<u8> {
        let mut rom = vec![0; MIN_ROM_SIZE];
        rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
        rom
    }

    fn booted(program: &[u8]) -> Cgb {
        let config = CgbConfig::builder().post_boot_state(true).build();
        Cgb::from_rom(&rom_with_program(program), config).unwrap()
    }

    #[test]
    fn new_maps_everything_but_the_unusable_range() {
        let cgb = Cgb::new();
        for addr in 0..=0xFFFFu16 {
            let unusable = (UNUSABLE_START..=UNUSABLE_END).contains(&addr);
            assert_eq!(cgb.mmu.is_mapped(addr), !unusable, "addr {addr:#06x}");
        }
        assert_eq!(cgb.cpu.regs.pc, 0x0000);
    }

    #[test]
    fn program_runs_from_the_entry_point() {
        // 0x0100: LD A, 0x12
        // 0x0102: LD [0xC000], A
        // 0x0105: LD A, [0xE000]
        // 0x0108: INC A
        let mut cgb = booted(&[0x3E, 0x12, 0xEA, 0x00, 0xC0, 0xFA, 0x00, 0xE0, 0x3C]);
        assert_eq!(cgb.cpu.regs.pc, 0x0100);

        assert_eq!(cgb.step().unwrap(), 2);
        assert_eq!(cgb.step().unwrap(), 4);
        assert_eq!(cgb.mmu.peek(0xC000), 0x12);

        // The echo mirror reads the same byte back.
        assert_eq!(cgb.step().unwrap(), 4);
        assert_eq!(cgb.cpu.regs.a, 0x12);

        assert_eq!(cgb.step().unwrap(), 1);
        assert_eq!(cgb.cpu.regs.a, 0x13);
        assert_eq!(cgb.cpu.regs.pc, 0x0109);
    }

    #[test]
    fn push_and_pop_through_high_ram() {
        // 0x0100: PUSH DE
        // 0x0101: POP HL
        let mut cgb = booted(&[0xD5, 0xE1]);

        assert_eq!(cgb.step().unwrap(), 4);
        assert_eq!(cgb.mmu.peek(0xFFFD), 0xFF);
        assert_eq!(cgb.mmu.peek(0xFFFC), 0x56);

        assert_eq!(cgb.step().unwrap(), 3);
        assert_eq!(cgb.cpu.regs.hl(), 0xFF56);
        assert_eq!(cgb.cpu.regs.sp, 0xFFFE);
    }

    #[test]
    fn bus_accessors_charge_one_cycle_each() {
        let mut cgb = booted(&[0x34, 0x12]);

        cgb.write(0xC123, 0xAB);
        assert_eq!(cgb.read(0xC123), 0xAB);
        assert_eq!(cgb.cpu.cycles(), 2);

        assert_eq!(cgb.fetch_imm16(), 0x1234);
        assert_eq!(cgb.cpu.regs.pc, 0x0102);
        assert_eq!(cgb.cpu.cycles(), 4);

        cgb.cpu.regs.pc = 0x0101;
        assert_eq!(cgb.fetch_imm8(), 0x12);
        assert_eq!(cgb.cpu.cycles(), 5);
    }

    #[test]
    fn fetch_wraps_at_the_top_of_the_address_space() {
        let mut cgb = Cgb::new();
        cgb.mmu.poke(0xFFFF, 0x34);
        cgb.cpu.regs.pc = 0xFFFF;

        assert_eq!(cgb.fetch_imm8(), 0x34);
        assert_eq!(cgb.cpu.regs.pc, 0x0000);
    }

    #[test]
    fn echo_follows_the_switched_wram_bank() {
        let mut cgb = Cgb::new();

        cgb.map_wram_bank1(3).unwrap();
        cgb.write(0xD010, 0x33);
        assert_eq!(cgb.read(0xF010), 0x33);
        cgb.write(0xF011, 0x44);
        assert_eq!(cgb.read(0xD011), 0x44);

        cgb.map_wram_bank1(2).unwrap();
        assert_eq!(cgb.read(0xD010), 0x00);
        assert_eq!(cgb.read(0xF010), 0x00);

        cgb.map_wram_bank1(3).unwrap();
        assert_eq!(cgb.read(0xF010), 0x33);
    }

    #[test]
    fn rom_and_vram_banks_switch() {
        let mut rom = vec![0; 4 * ROM_BANK_SIZE];
        for (bank, chunk) in rom.chunks_mut(ROM_BANK_SIZE).enumerate() {
            chunk[0] = bank as u8 + 0xA0;
        }
        let mut cgb = Cgb::from_rom(&rom, CgbConfig::default()).unwrap();

        assert_eq!(cgb.read(0x0000), 0xA0);
        assert_eq!(cgb.read(0x4000), 0xA1);
        cgb.map_rom_bank1(3).unwrap();
        assert_eq!(cgb.read(0x4000), 0xA3);
        cgb.map_rom_bank0(2).unwrap();
        assert_eq!(cgb.read(0x0000), 0xA2);

        cgb.write(0x8000, 0x01);
        cgb.map_vram_bank(1).unwrap();
        assert_eq!(cgb.read(0x8000), 0x00);
        cgb.write(0x8000, 0x02);
        cgb.map_vram_bank(0).unwrap();
        assert_eq!(cgb.read(0x8000), 0x01);
    }

    #[test]
    fn out_of_range_banks_are_rejected() {
        let mut cgb = Cgb::new();
        assert_eq!(
            cgb.map_rom_bank1(2),
            Err(CgbError::BankOutOfRange {
                base: 0x4000,
                bank: 2
            })
        );
        assert!(cgb.map_wram_bank1(8).is_err());
        assert!(cgb.map_vram_bank(2).is_err());
        // A failed switch leaves the old mapping in place.
        assert_eq!(cgb.mmu.resolve(0x4000), Some((crate::mmu::Region::Rom, 0x4000)));
    }

    #[test]
    fn unmapped_accesses_are_lenient_and_counted() {
        let config = CgbConfig::builder().warn_on_unmapped(false).build();
        let mut cgb = Cgb::with_config(config).unwrap();

        cgb.write(0xFEA0, 0x12);
        assert_eq!(cgb.read(0xFEA0), 0x00);
        assert_eq!(cgb.read(0xFEFF), 0x00);

        let counts = cgb.mmu.unmapped_accesses();
        assert_eq!((counts.reads, counts.writes), (2, 1));
    }

    #[test]
    fn rom_size_is_validated() {
        let too_small = vec![0; MIN_ROM_SIZE - 1];
        assert!(matches!(
            Cgb::from_rom(&too_small, CgbConfig::default()),
            Err(CgbError::RomSize { size, .. }) if size == MIN_ROM_SIZE - 1
        ));
        assert!(Cgb::with_rom_size(crate::mmu::MAX_ROM_SIZE + 1, CgbConfig::default()).is_err());
        assert!(Cgb::with_rom_size(crate::mmu::MAX_ROM_SIZE, CgbConfig::default()).is_ok());
    }

    #[test]
    fn unknown_opcode_policy_comes_from_config() {
        let rom = rom_with_program(&[0xED, 0x00]);

        let config = CgbConfig::builder().post_boot_state(true).build();
        let mut cgb = Cgb::from_rom(&rom, config).unwrap();
        assert_eq!(
            cgb.step(),
            Err(CgbError::UnknownOpcode {
                opcode: 0xED,
                pc: 0x0100,
                prefixed: false
            })
        );
        assert_eq!(cgb.cpu.regs.pc, 0x0100);

        let config = CgbConfig::builder()
            .post_boot_state(true)
            .unknown_opcode(UnknownOpcodePolicy::Ignore)
            .build();
        let mut cgb = Cgb::from_rom(&rom, config).unwrap();
        assert_eq!(cgb.step(), Ok(1));
        assert_eq!(cgb.cpu.regs.pc, 0x0101);
    }

    #[test]
    fn halted_core_idles_until_woken() {
        // 0x0100: HALT
        // 0x0101: LD B, A
        let mut cgb = booted(&[0x76, 0x47]);

        cgb.step().unwrap();
        assert_eq!(cgb.step().unwrap(), 1);
        assert_eq!(cgb.cpu.regs.pc, 0x0101);

        cgb.wake();
        cgb.step().unwrap();
        assert_eq!(cgb.cpu.regs.b, 0x11);
    }
}
