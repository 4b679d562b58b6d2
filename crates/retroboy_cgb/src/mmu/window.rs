/// Number of entries in the indirection table (one per 16-bit address).
pub const MMAP_SIZE: usize = 0x10000;

pub const MIN_ROM_SIZE: usize = 0x8000;
pub const MAX_ROM_SIZE: usize = 0x80_0000;

pub const ROM_BANK_SIZE: usize = 0x4000;
pub const VRAM_BANK_SIZE: usize = 0x2000;
pub const VRAM_BANK_COUNT: usize = 2;
pub const EXT_RAM_SIZE: usize = 0x2000;
pub const WRAM_BANK_SIZE: usize = 0x1000;
pub const WRAM_BANK_COUNT: usize = 8;
pub const ECHO_BANK_0_SIZE: usize = 0x1000;
pub const ECHO_BANK_1_SIZE: usize = 0x0E00;
pub const OAM_SIZE: usize = 0x00A0;
pub const IO_REGS_SIZE: usize = 0x0080;
pub const HRAM_SIZE: usize = 0x0080;

/// First and last address of the range that is never mapped.
pub const UNUSABLE_START: u16 = 0xFEA0;
pub const UNUSABLE_END: u16 = 0xFEFF;

/// Physically distinct backing stores owned by the MMU.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Region {
    Rom,
    Vram,
    ExtRam,
    Wram,
    Oam,
    IoRegs,
    Hram,
}

/// Fixed address windows of the CGB memory map.
///
/// Each window is a contiguous run of indirection-table slots that is always
/// mapped as a unit into one bank of a backing store.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Window {
    RomBank0,
    RomBank1,
    Vram,
    ExtRam,
    WramBank0,
    WramBank1,
    EchoBank0,
    EchoBank1,
    Oam,
    IoRegs,
    Hram,
}

impl Window {
    pub const ALL: [Window; 11] = [
        Window::RomBank0,
        Window::RomBank1,
        Window::Vram,
        Window::ExtRam,
        Window::WramBank0,
        Window::WramBank1,
        Window::EchoBank0,
        Window::EchoBank1,
        Window::Oam,
        Window::IoRegs,
        Window::Hram,
    ];

    pub const fn base(self) -> u16 {
        match self {
            Window::RomBank0 => 0x0000,
            Window::RomBank1 => 0x4000,
            Window::Vram => 0x8000,
            Window::ExtRam => 0xA000,
            Window::WramBank0 => 0xC000,
            Window::WramBank1 => 0xD000,
            Window::EchoBank0 => 0xE000,
            Window::EchoBank1 => 0xF000,
            Window::Oam => 0xFE00,
            Window::IoRegs => 0xFF00,
            Window::Hram => 0xFF80,
        }
    }

    pub const fn size(self) -> usize {
        match self {
            Window::RomBank0 | Window::RomBank1 => ROM_BANK_SIZE,
            Window::Vram => VRAM_BANK_SIZE,
            Window::ExtRam => EXT_RAM_SIZE,
            Window::WramBank0 | Window::WramBank1 => WRAM_BANK_SIZE,
            Window::EchoBank0 => ECHO_BANK_0_SIZE,
            Window::EchoBank1 => ECHO_BANK_1_SIZE,
            Window::Oam => OAM_SIZE,
            Window::IoRegs => IO_REGS_SIZE,
            Window::Hram => HRAM_SIZE,
        }
    }

    /// Distance between consecutive banks in the backing store.
    ///
    /// Echo bank 1 is shorter than a WRAM bank but still addresses whole
    /// WRAM banks, so its stride is the WRAM bank size.
    pub const fn bank_stride(self) -> usize {
        match self {
            Window::EchoBank1 => WRAM_BANK_SIZE,
            _ => self.size(),
        }
    }

    /// Backing store the window points into after reset.
    pub const fn default_region(self) -> Region {
        match self {
            Window::RomBank0 | Window::RomBank1 => Region::Rom,
            Window::Vram => Region::Vram,
            Window::ExtRam => Region::ExtRam,
            Window::WramBank0 | Window::WramBank1 | Window::EchoBank0 | Window::EchoBank1 => {
                Region::Wram
            }
            Window::Oam => Region::Oam,
            Window::IoRegs => Region::IoRegs,
            Window::Hram => Region::Hram,
        }
    }

    /// Bank mapped into the window after reset.
    pub const fn default_bank(self) -> usize {
        match self {
            Window::RomBank1 | Window::WramBank1 | Window::EchoBank1 => 1,
            _ => 0,
        }
    }

    pub fn from_base(base: u16) -> Option<Window> {
        Window::ALL.into_iter().find(|window| window.base() == base)
    }

    pub fn contains(self, addr: u16) -> bool {
        let offset = addr.wrapping_sub(self.base()) as usize;
        addr >= self.base() && offset < self.size()
    }
}

pub(super) const fn region_size(region: Region) -> usize {
    match region {
        // The ROM store is sized to the cartridge; this is the minimum.
        Region::Rom => MIN_ROM_SIZE,
        Region::Vram => VRAM_BANK_SIZE * VRAM_BANK_COUNT,
        Region::ExtRam => EXT_RAM_SIZE,
        Region::Wram => WRAM_BANK_SIZE * WRAM_BANK_COUNT,
        Region::Oam => OAM_SIZE,
        Region::IoRegs => IO_REGS_SIZE,
        Region::Hram => HRAM_SIZE,
    }
}
