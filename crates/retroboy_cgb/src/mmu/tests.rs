use super::*;

/// Fill every byte of `window` with `value` through the indirection table.
fn fill_window(mmu: &mut Mmu, window: Window, value: u8) {
    for i in 0..window.size() {
        mmu.poke(window.base() + i as u16, value);
    }
}

/// Check that every byte of `window` reads `value` and is backed by bank
/// `bank` of `region`.
fn check_window(mmu: &mut Mmu, window: Window, value: u8, region: Region, bank: usize) {
    let start = bank * window.bank_stride();
    for i in 0..window.size() {
        let addr = window.base() + i as u16;
        assert_eq!(mmu.resolve(addr), Some((region, start + i)), "addr 0x{addr:04X}");
        assert_eq!(mmu.peek(addr), value, "addr 0x{addr:04X}");
        assert_eq!(mmu.backing(region)[start + i], value, "addr 0x{addr:04X}");
    }
}

/// A max-size bus with a distinct marker byte written through each window.
fn marked_mmu() -> Mmu {
    let mut mmu = Mmu::new(MAX_ROM_SIZE).unwrap();
    fill_window(&mut mmu, Window::RomBank0, 1);
    fill_window(&mut mmu, Window::RomBank1, 2);
    fill_window(&mut mmu, Window::Vram, 3);
    fill_window(&mut mmu, Window::ExtRam, 4);
    fill_window(&mut mmu, Window::WramBank0, 5);
    fill_window(&mut mmu, Window::WramBank1, 6);
    fill_window(&mut mmu, Window::Oam, 7);
    fill_window(&mut mmu, Window::IoRegs, 8);
    fill_window(&mut mmu, Window::Hram, 9);
    mmu
}

fn check_reset_map(mmu: &mut Mmu) {
    check_window(mmu, Window::RomBank0, 1, Region::Rom, 0);
    check_window(mmu, Window::RomBank1, 2, Region::Rom, 1);
    check_window(mmu, Window::Vram, 3, Region::Vram, 0);
    check_window(mmu, Window::ExtRam, 4, Region::ExtRam, 0);
    check_window(mmu, Window::WramBank0, 5, Region::Wram, 0);
    check_window(mmu, Window::WramBank1, 6, Region::Wram, 1);
    check_window(mmu, Window::EchoBank0, 5, Region::Wram, 0);
    check_window(mmu, Window::EchoBank1, 6, Region::Wram, 1);
    check_window(mmu, Window::Oam, 7, Region::Oam, 0);
    check_window(mmu, Window::IoRegs, 8, Region::IoRegs, 0);
    check_window(mmu, Window::Hram, 9, Region::Hram, 0);
}

#[test]
fn only_the_unusable_range_is_unmapped() {
    let mmu = Mmu::default();
    for addr in 0..=0xFFFFu16 {
        let unusable = (UNUSABLE_START..=UNUSABLE_END).contains(&addr);
        assert_eq!(mmu.is_mapped(addr), !unusable, "addr 0x{addr:04X}");
    }
}

#[test]
fn windows_tile_the_address_space() {
    let mut covered = 0usize;
    for addr in 0..=0xFFFFu16 {
        let owners = Window::ALL.iter().filter(|w| w.contains(addr)).count();
        let unusable = (UNUSABLE_START..=UNUSABLE_END).contains(&addr);
        assert_eq!(owners, usize::from(!unusable), "addr 0x{addr:04X}");
        covered += owners;
    }
    assert_eq!(covered, MMAP_SIZE - 0x60);
}

#[test]
fn reset_map_points_at_default_banks() {
    let mut mmu = marked_mmu();
    check_reset_map(&mut mmu);
}

#[test]
fn rom_banking_switches_and_restores() {
    let mut mmu = marked_mmu();

    mmu.map_rom_bank0(2).unwrap();
    mmu.map_rom_bank1(3).unwrap();
    fill_window(&mut mmu, Window::RomBank0, 10);
    fill_window(&mut mmu, Window::RomBank1, 11);
    check_window(&mut mmu, Window::RomBank0, 10, Region::Rom, 2);
    check_window(&mut mmu, Window::RomBank1, 11, Region::Rom, 3);

    mmu.map_rom_bank0(0).unwrap();
    mmu.map_rom_bank1(1).unwrap();
    check_reset_map(&mut mmu);
}

#[test]
fn wram_banking_moves_echo_mirrors_too() {
    let mut mmu = marked_mmu();

    mmu.map_wram_bank0(2).unwrap();
    mmu.map_wram_bank1(3).unwrap();
    fill_window(&mut mmu, Window::WramBank0, 12);
    fill_window(&mut mmu, Window::WramBank1, 13);
    check_window(&mut mmu, Window::WramBank0, 12, Region::Wram, 2);
    check_window(&mut mmu, Window::WramBank1, 13, Region::Wram, 3);
    check_window(&mut mmu, Window::EchoBank0, 12, Region::Wram, 2);
    check_window(&mut mmu, Window::EchoBank1, 13, Region::Wram, 3);

    mmu.map_wram_bank0(0).unwrap();
    mmu.map_wram_bank1(1).unwrap();
    check_reset_map(&mut mmu);
}

#[test]
fn echo_writes_alias_the_mapped_wram_bank() {
    let mut mmu = Mmu::default();

    mmu.poke(0xF123, 0xAA);
    assert_eq!(mmu.peek(0xD123), 0xAA);
    mmu.poke(0xC456, 0x55);
    assert_eq!(mmu.peek(0xE456), 0x55);

    // Echo bank 1 only covers 0xF000..=0xFDFF of the 4 KiB bank.
    mmu.poke(0xDE00, 0x77);
    assert_eq!(mmu.resolve(0xFE00), Some((Region::Oam, 0)));

    mmu.map_wram_bank1(5).unwrap();
    assert_eq!(mmu.peek(0xF123), 0x00);
    mmu.poke(0xD123, 0x42);
    assert_eq!(mmu.peek(0xF123), 0x42);
    assert_eq!(mmu.resolve(0xF123), Some((Region::Wram, 5 * WRAM_BANK_SIZE + 0x123)));

    mmu.map_wram_bank1(1).unwrap();
    assert_eq!(mmu.peek(0xF123), 0xAA);
    assert_eq!(mmu.peek(0xDE00), 0x77);
}

#[test]
fn vram_bank_switch_keeps_each_bank() {
    let mut mmu = Mmu::default();

    mmu.poke(0x8000, 0x11);
    mmu.map_vram_bank(1).unwrap();
    assert_eq!(mmu.peek(0x8000), 0x00);
    mmu.poke(0x8000, 0x22);
    assert_eq!(mmu.resolve(0x8000), Some((Region::Vram, VRAM_BANK_SIZE)));

    mmu.map_vram_bank(0).unwrap();
    assert_eq!(mmu.peek(0x8000), 0x11);
    assert_eq!(mmu.backing(Region::Vram)[VRAM_BANK_SIZE], 0x22);
}

#[test]
fn remap_touches_only_its_own_window() {
    let mut mmu = marked_mmu();
    mmu.map_wram_bank1(7).unwrap();

    check_window(&mut mmu, Window::WramBank0, 5, Region::Wram, 0);
    check_window(&mut mmu, Window::EchoBank0, 5, Region::Wram, 0);
    check_window(&mut mmu, Window::Oam, 7, Region::Oam, 0);
    assert_eq!(mmu.resolve(0xD000), Some((Region::Wram, 7 * WRAM_BANK_SIZE)));
}

#[test]
fn map_region_rejects_bad_windows_and_banks() {
    let mut mmu = Mmu::default();

    assert_eq!(
        mmu.map_region(0x1234, Region::Rom, 0),
        Err(CgbError::UnknownWindow { base: 0x1234 })
    );
    // A minimum-size ROM has exactly two banks.
    assert_eq!(
        mmu.map_rom_bank1(2),
        Err(CgbError::BankOutOfRange { base: 0x4000, bank: 2 })
    );
    assert_eq!(
        mmu.map_wram_bank1(WRAM_BANK_COUNT),
        Err(CgbError::BankOutOfRange { base: 0xD000, bank: WRAM_BANK_COUNT })
    );
    assert_eq!(
        mmu.map_vram_bank(VRAM_BANK_COUNT),
        Err(CgbError::BankOutOfRange { base: 0x8000, bank: VRAM_BANK_COUNT })
    );

    // Failed remaps leave the previous mapping in place.
    assert_eq!(mmu.resolve(0x4000), Some((Region::Rom, ROM_BANK_SIZE)));
    assert_eq!(mmu.resolve(0xD000), Some((Region::Wram, WRAM_BANK_SIZE)));
}

#[test]
fn last_wram_bank_fits_echo_stride() {
    let mut mmu = Mmu::default();
    mmu.map_wram_bank1(WRAM_BANK_COUNT - 1).unwrap();
    assert_eq!(
        mmu.resolve(0xFDFF),
        Some((Region::Wram, (WRAM_BANK_COUNT - 1) * WRAM_BANK_SIZE + 0xDFF))
    );
}

#[test]
fn unmapped_accesses_are_lenient_and_counted() {
    let mut mmu = Mmu::default();
    mmu.set_warn_on_unmapped(false);

    mmu.poke(0xFEA0, 0x12);
    assert_eq!(mmu.peek(0xFEA0), 0x00);
    assert_eq!(mmu.read8(0xFEFF), 0x00);
    mmu.write8(0xFEFF, 0x34);

    assert_eq!(
        mmu.unmapped_accesses(),
        UnmappedAccesses { reads: 2, writes: 2 }
    );
}

#[test]
fn rom_size_limits_are_enforced() {
    assert!(matches!(
        Mmu::new(MIN_ROM_SIZE - 1),
        Err(CgbError::RomSize { size, .. }) if size == MIN_ROM_SIZE - 1
    ));
    assert!(matches!(
        Mmu::new(MAX_ROM_SIZE + 1),
        Err(CgbError::RomSize { size, .. }) if size == MAX_ROM_SIZE + 1
    ));
    assert!(Mmu::new(MIN_ROM_SIZE).is_ok());
    assert!(Mmu::new(MAX_ROM_SIZE).is_ok());
}

#[test]
fn with_rom_copies_image_into_bank_windows() {
    let mut image = vec![0u8; 4 * ROM_BANK_SIZE];
    for (bank, chunk) in image.chunks_mut(ROM_BANK_SIZE).enumerate() {
        chunk.fill(0xA0 + bank as u8);
    }
    let mut mmu = Mmu::with_rom(&image).unwrap();

    assert_eq!(mmu.backing(Region::Rom).len(), image.len());
    assert_eq!(mmu.peek(0x0000), 0xA0);
    assert_eq!(mmu.peek(0x7FFF), 0xA1);
    mmu.map_rom_bank1(3).unwrap();
    assert_eq!(mmu.peek(0x4000), 0xA3);
}
