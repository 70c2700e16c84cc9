use super::Cpu;
use super::instruction::{AddressingMode, Operand};

impl Cpu<'_> {
    /// Resolves an addressing mode and raw operand to the effective 16-bit
    /// address the instruction operates on.
    ///
    /// Zero-page indexing wraps within the zero page, and the pointer reads
    /// of the indirect modes never leave it: `(ptr + 1) & $FF` supplies the
    /// high byte. JMP `($xxFF)` reproduces the hardware page-boundary bug.
    ///
    /// Immediate, accumulator, implied and relative operands have no
    /// address; asking for one is a decoder-table bug and panics.
    pub fn operand_address(&self, mode: AddressingMode, operand: Operand) -> u16 {
        match mode {
            AddressingMode::ZeroPage => operand.byte() as u16,

            AddressingMode::ZeroPageX => operand.byte().wrapping_add(self.x_register) as u16,

            AddressingMode::ZeroPageY => operand.byte().wrapping_add(self.y_register) as u16,

            AddressingMode::Absolute => operand.word(),

            AddressingMode::AbsoluteX => operand.word().wrapping_add(self.x_register as u16),

            AddressingMode::AbsoluteY => operand.word().wrapping_add(self.y_register as u16),

            AddressingMode::Indirect => {
                let ptr = operand.word();
                let low = self.read_u8(ptr);
                // Hardware bug: when the pointer sits at the end of a page,
                // the high byte comes from the start of the same page.
                let high = if ptr & 0x00FF == 0x00FF {
                    self.read_u8(ptr & 0xFF00)
                } else {
                    self.read_u8(ptr + 1)
                };
                u16::from_le_bytes([low, high])
            }

            AddressingMode::IndirectX => {
                let ptr = operand.byte().wrapping_add(self.x_register);
                let low = self.read_u8(ptr as u16);
                let high = self.read_u8(ptr.wrapping_add(1) as u16);
                u16::from_le_bytes([low, high])
            }

            AddressingMode::IndirectY => {
                let ptr = operand.byte();
                let low = self.read_u8(ptr as u16);
                let high = self.read_u8(ptr.wrapping_add(1) as u16);
                u16::from_le_bytes([low, high]).wrapping_add(self.y_register as u16)
            }

            AddressingMode::Immediate
            | AddressingMode::Accumulator
            | AddressingMode::Implied
            | AddressingMode::Relative => {
                panic!("no effective address for {mode:?}")
            }
        }
    }

    /// The 8-bit value an instruction operates on: the immediate byte, the
    /// accumulator, or the byte at the effective address.
    pub fn operand_value(&self, mode: AddressingMode, operand: Operand) -> u8 {
        match mode {
            AddressingMode::Immediate => operand.byte(),
            AddressingMode::Accumulator => self.accumulator,
            _ => self.read_u8(self.operand_address(mode, operand)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;

    #[test]
    fn test_zero_page() {
        let mut bus = Bus::new();
        let cpu = Cpu::new(&mut bus);
        assert_eq!(
            cpu.operand_address(AddressingMode::ZeroPage, Operand::Byte(0x42)),
            0x0042
        );
    }

    #[test]
    fn test_zero_page_indexed_wraps_at_0xff() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.x_register = 0x08;
        cpu.y_register = 0x09;
        assert_eq!(
            cpu.operand_address(AddressingMode::ZeroPageX, Operand::Byte(0x42)),
            0x004A
        );
        assert_eq!(
            cpu.operand_address(AddressingMode::ZeroPageY, Operand::Byte(0x42)),
            0x004B
        );
        // The sum never leaves the zero page.
        assert_eq!(
            cpu.operand_address(AddressingMode::ZeroPageX, Operand::Byte(0xFF)),
            0x0007
        );
    }

    #[test]
    fn test_absolute_and_indexed() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.x_register = 0x10;
        cpu.y_register = 0x20;
        assert_eq!(
            cpu.operand_address(AddressingMode::Absolute, Operand::Word(0x3456)),
            0x3456
        );
        assert_eq!(
            cpu.operand_address(AddressingMode::AbsoluteX, Operand::Word(0x3456)),
            0x3466
        );
        assert_eq!(
            cpu.operand_address(AddressingMode::AbsoluteY, Operand::Word(0x3456)),
            0x3476
        );
        // Indexing past $FFFF wraps around the address space.
        assert_eq!(
            cpu.operand_address(AddressingMode::AbsoluteX, Operand::Word(0xFFF8)),
            0x0008
        );
    }

    #[test]
    fn test_indirect() {
        let mut bus = Bus::new();
        bus.write(0x2000, 0x34);
        bus.write(0x2001, 0x56);
        let cpu = Cpu::new(&mut bus);
        assert_eq!(
            cpu.operand_address(AddressingMode::Indirect, Operand::Word(0x2000)),
            0x5634
        );
    }

    #[test]
    fn test_indirect_page_boundary_bug() {
        let mut bus = Bus::new();
        bus.write(0x30FF, 0x40);
        bus.write(0x3000, 0x80);
        bus.write(0x3100, 0x20);
        let cpu = Cpu::new(&mut bus);
        // The high byte comes from $3000, not $3100.
        assert_eq!(
            cpu.operand_address(AddressingMode::Indirect, Operand::Word(0x30FF)),
            0x8040
        );
    }

    #[test]
    fn test_indirect_x() {
        let mut bus = Bus::new();
        bus.write(0x0024, 0x34);
        bus.write(0x0025, 0x56);
        let mut cpu = Cpu::new(&mut bus);
        cpu.x_register = 0x04;
        assert_eq!(
            cpu.operand_address(AddressingMode::IndirectX, Operand::Byte(0x20)),
            0x5634
        );
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let mut bus = Bus::new();
        bus.write(0x00FF, 0x34);
        bus.write(0x0000, 0x56);
        let mut cpu = Cpu::new(&mut bus);
        cpu.x_register = 0x7F;
        // $80 + $7F = $FF; the high byte is read from $00, not $100.
        assert_eq!(
            cpu.operand_address(AddressingMode::IndirectX, Operand::Byte(0x80)),
            0x5634
        );
    }

    #[test]
    fn test_indirect_y() {
        let mut bus = Bus::new();
        bus.write(0x0020, 0x34);
        bus.write(0x0021, 0x56);
        let mut cpu = Cpu::new(&mut bus);
        cpu.y_register = 0x10;
        assert_eq!(
            cpu.operand_address(AddressingMode::IndirectY, Operand::Byte(0x20)),
            0x5644
        );
    }

    #[test]
    fn test_indirect_y_pointer_wraps_in_zero_page() {
        let mut bus = Bus::new();
        bus.write(0x00FF, 0x34);
        bus.write(0x0000, 0x56);
        let mut cpu = Cpu::new(&mut bus);
        cpu.y_register = 0x01;
        assert_eq!(
            cpu.operand_address(AddressingMode::IndirectY, Operand::Byte(0xFF)),
            0x5635
        );
    }

    #[test]
    fn test_operand_value_sources() {
        let mut bus = Bus::new();
        bus.write(0x0042, 0x99);
        let mut cpu = Cpu::new(&mut bus);
        cpu.accumulator = 0x77;
        assert_eq!(
            cpu.operand_value(AddressingMode::Immediate, Operand::Byte(0x55)),
            0x55
        );
        assert_eq!(
            cpu.operand_value(AddressingMode::Accumulator, Operand::None),
            0x77
        );
        assert_eq!(
            cpu.operand_value(AddressingMode::ZeroPage, Operand::Byte(0x42)),
            0x99
        );
    }

    #[test]
    #[should_panic(expected = "no effective address")]
    fn test_implied_has_no_address() {
        let mut bus = Bus::new();
        let cpu = Cpu::new(&mut bus);
        cpu.operand_address(AddressingMode::Implied, Operand::None);
    }
}
