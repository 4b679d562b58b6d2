mod window;

pub use window::*;

use crate::cpu::Bus;
use crate::error::{CgbError, Result};

/// Location of one mapped byte: a backing store plus an offset into it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct MapEntry {
    region: Region,
    offset: u32,
}

/// Counters for accesses that hit an unmapped address.
///
/// Unmapped reads return 0x00 and unmapped writes are dropped; these counters
/// make that data loss visible to a debugger.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct UnmappedAccesses {
    pub reads: u64,
    pub writes: u64,
}

/// Banked CGB memory bus.
///
/// All storage lives in seven backing arrays. Every 16-bit address goes
/// through a 64 Ki-entry indirection table, so bank switching and the echo
/// mirrors are table rewrites and never byte copies.
pub struct Mmu {
    map: Box<[Option<MapEntry>]>,
    rom: Vec<u8>,
    vram: Vec<u8>,
    ext_ram: Vec<u8>,
    wram: Vec<u8>,
    oam: Vec<u8>,
    io_regs: Vec<u8>,
    hram: Vec<u8>,
    unmapped: UnmappedAccesses,
    warn_on_unmapped: bool,
}

impl Default for Mmu {
    fn default() -> Self {
        Self::allocate(MIN_ROM_SIZE)
    }
}

impl Mmu {
    /// Create a bus with a zero-filled ROM store of `rom_size` bytes.
    pub fn new(rom_size: usize) -> Result<Self> {
        check_rom_size(rom_size)?;
        Ok(Self::allocate(rom_size))
    }

    /// Create a bus whose ROM store is a copy of `image`.
    pub fn with_rom(image: &[u8]) -> Result<Self> {
        check_rom_size(image.len())?;
        let mut mmu = Self::allocate(image.len());
        mmu.rom.copy_from_slice(image);
        Ok(mmu)
    }

    fn allocate(rom_size: usize) -> Self {
        let mut mmu = Self {
            map: vec![None; MMAP_SIZE].into_boxed_slice(),
            rom: vec![0; rom_size],
            vram: vec![0; window::region_size(Region::Vram)],
            ext_ram: vec![0; window::region_size(Region::ExtRam)],
            wram: vec![0; window::region_size(Region::Wram)],
            oam: vec![0; window::region_size(Region::Oam)],
            io_regs: vec![0; window::region_size(Region::IoRegs)],
            hram: vec![0; window::region_size(Region::Hram)],
            unmapped: UnmappedAccesses::default(),
            warn_on_unmapped: true,
        };
        mmu.init_map();
        mmu
    }

    /// Point every window at its reset bank.
    fn init_map(&mut self) {
        for window in Window::ALL {
            let (base, size) = (window.base() as usize, window.size());
            let start = window.default_bank() * window.bank_stride();
            for i in 0..size {
                self.map[base + i] = Some(MapEntry {
                    region: window.default_region(),
                    offset: (start + i) as u32,
                });
            }
        }
    }

    pub fn set_warn_on_unmapped(&mut self, warn: bool) {
        self.warn_on_unmapped = warn;
    }

    /// Map bank `bank` of `region` into the window that starts at `base`.
    ///
    /// Only the window's own slots are rewritten; backing contents are left
    /// alone and show up again when the bank is mapped back.
    pub fn map_region(&mut self, base: u16, region: Region, bank: usize) -> Result<()> {
        let window = Window::from_base(base).ok_or(CgbError::UnknownWindow { base })?;
        let size = window.size();
        let start = bank
            .checked_mul(window.bank_stride())
            .filter(|start| start + size <= self.backing(region).len())
            .ok_or(CgbError::BankOutOfRange { base, bank })?;

        for i in 0..size {
            self.map[base as usize + i] = Some(MapEntry {
                region,
                offset: (start + i) as u32,
            });
        }
        log::debug!("MMU: mapped {region:?} bank {bank} at 0x{base:04X} ({window:?})");
        Ok(())
    }

    pub fn map_rom_bank0(&mut self, bank: usize) -> Result<()> {
        self.map_region(Window::RomBank0.base(), Region::Rom, bank)
    }

    pub fn map_rom_bank1(&mut self, bank: usize) -> Result<()> {
        self.map_region(Window::RomBank1.base(), Region::Rom, bank)
    }

    pub fn map_vram_bank(&mut self, bank: usize) -> Result<()> {
        self.map_region(Window::Vram.base(), Region::Vram, bank)
    }

    /// Map WRAM bank `bank` at 0xC000 and its echo at 0xE000.
    pub fn map_wram_bank0(&mut self, bank: usize) -> Result<()> {
        self.map_region(Window::WramBank0.base(), Region::Wram, bank)?;
        self.map_region(Window::EchoBank0.base(), Region::Wram, bank)
    }

    /// Map WRAM bank `bank` at 0xD000 and its echo at 0xF000.
    pub fn map_wram_bank1(&mut self, bank: usize) -> Result<()> {
        self.map_region(Window::WramBank1.base(), Region::Wram, bank)?;
        self.map_region(Window::EchoBank1.base(), Region::Wram, bank)
    }

    /// Backing store and offset currently behind `addr`, if it is mapped.
    pub fn resolve(&self, addr: u16) -> Option<(Region, usize)> {
        self.map[addr as usize].map(|entry| (entry.region, entry.offset as usize))
    }

    pub fn is_mapped(&self, addr: u16) -> bool {
        self.map[addr as usize].is_some()
    }

    /// Read through the indirection table without charging a bus cycle.
    pub fn peek(&mut self, addr: u16) -> u8 {
        match self.map[addr as usize] {
            Some(entry) => self.backing(entry.region)[entry.offset as usize],
            None => {
                self.unmapped.reads += 1;
                if self.warn_on_unmapped {
                    log::warn!("MMU: read from unmapped address 0x{addr:04X}");
                }
                0
            }
        }
    }

    /// Write through the indirection table without charging a bus cycle.
    pub fn poke(&mut self, addr: u16, value: u8) {
        match self.map[addr as usize] {
            Some(entry) => self.backing_mut(entry.region)[entry.offset as usize] = value,
            None => {
                self.unmapped.writes += 1;
                if self.warn_on_unmapped {
                    log::warn!("MMU: write of 0x{value:02X} to unmapped address 0x{addr:04X} dropped");
                }
            }
        }
    }

    pub fn unmapped_accesses(&self) -> UnmappedAccesses {
        self.unmapped
    }

    pub fn backing(&self, region: Region) -> &[u8] {
        match region {
            Region::Rom => &self.rom,
            Region::Vram => &self.vram,
            Region::ExtRam => &self.ext_ram,
            Region::Wram => &self.wram,
            Region::Oam => &self.oam,
            Region::IoRegs => &self.io_regs,
            Region::Hram => &self.hram,
        }
    }

    pub fn backing_mut(&mut self, region: Region) -> &mut [u8] {
        match region {
            Region::Rom => &mut self.rom,
            Region::Vram => &mut self.vram,
            Region::ExtRam => &mut self.ext_ram,
            Region::Wram => &mut self.wram,
            Region::Oam => &mut self.oam,
            Region::IoRegs => &mut self.io_regs,
            Region::Hram => &mut self.hram,
        }
    }
}

impl Bus for Mmu {
    fn read8(&mut self, addr: u16) -> u8 {
        self.peek(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.poke(addr, value);
    }
}

fn check_rom_size(size: usize) -> Result<()> {
    if (MIN_ROM_SIZE..=MAX_ROM_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(CgbError::RomSize {
            size,
            min: MIN_ROM_SIZE,
            max: MAX_ROM_SIZE,
        })
    }
}

#[cfg(test)]
mod tests;
