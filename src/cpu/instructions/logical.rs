use crate::cpu::instruction::{AddressingMode, Operand, Register};
use crate::cpu::{Cpu, StatusFlags};

impl Cpu<'_> {
    pub(crate) fn logical_and(&mut self, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        self.set_register(Register::A, self.accumulator & value);
    }

    pub(crate) fn exclusive_or(&mut self, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        self.set_register(Register::A, self.accumulator ^ value);
    }

    pub(crate) fn bitwise_or(&mut self, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        self.set_register(Register::A, self.accumulator | value);
    }

    /// BIT probes a memory cell without touching A: Zero from the AND,
    /// Negative and Overflow copied straight from bits 7 and 6 of memory.
    pub(crate) fn bit_test(&mut self, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        self.status_register
            .set(StatusFlags::ZERO, self.accumulator & value == 0);
        self.status_register
            .set(StatusFlags::NEGATIVE, value & 0x80 != 0);
        self.status_register
            .set(StatusFlags::OVERFLOW, value & 0x40 != 0);
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::decoder::decode;
    use crate::cpu::{Cpu, StatusFlags};

    #[test]
    fn test_and_masks_accumulator() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.accumulator = 0b1100_1100;
        cpu.run_instruction(decode(&[0x29, 0b1010_1010]).unwrap()).unwrap();
        assert_eq!(cpu.accumulator, 0b1000_1000);
        assert!(cpu.status_register.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_and_sets_zero_on_disjoint_bits() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.accumulator = 0x0F;
        cpu.run_instruction(decode(&[0x29, 0xF0]).unwrap()).unwrap();
        assert_eq!(cpu.accumulator, 0x00);
        assert!(cpu.status_register.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_eor_flips_bits() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.accumulator = 0b1111_0000;
        cpu.run_instruction(decode(&[0x49, 0b1010_1010]).unwrap()).unwrap();
        assert_eq!(cpu.accumulator, 0b0101_1010);
    }

    #[test]
    fn test_eor_self_clears_accumulator() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.accumulator = 0x5A;
        cpu.run_instruction(decode(&[0x49, 0x5A]).unwrap()).unwrap();
        assert_eq!(cpu.accumulator, 0x00);
        assert!(cpu.status_register.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_ora_merges_bits() {
        let mut bus = Bus::new();
        bus.write(0x0010, 0b0000_1111);
        let mut cpu = Cpu::new(&mut bus);
        cpu.accumulator = 0b1111_0000;
        cpu.run_instruction(decode(&[0x05, 0x10]).unwrap()).unwrap();
        assert_eq!(cpu.accumulator, 0xFF);
        assert!(cpu.status_register.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_bit_copies_memory_bits_and_leaves_a() {
        let mut bus = Bus::new();
        bus.write(0x0040, 0b1100_0000);
        let mut cpu = Cpu::new(&mut bus);
        cpu.accumulator = 0xFF;
        cpu.run_instruction(decode(&[0x24, 0x40]).unwrap()).unwrap();
        assert_eq!(cpu.accumulator, 0xFF, "A is unchanged");
        assert!(cpu.status_register.contains(StatusFlags::NEGATIVE));
        assert!(cpu.status_register.contains(StatusFlags::OVERFLOW));
        assert!(!cpu.status_register.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_bit_zero_when_no_common_bits() {
        let mut bus = Bus::new();
        bus.write(0x0040, 0b0011_0000);
        let mut cpu = Cpu::new(&mut bus);
        cpu.accumulator = 0b0000_1111;
        cpu.run_instruction(decode(&[0x24, 0x40]).unwrap()).unwrap();
        assert!(cpu.status_register.contains(StatusFlags::ZERO));
        assert!(!cpu.status_register.contains(StatusFlags::NEGATIVE));
        assert!(!cpu.status_register.contains(StatusFlags::OVERFLOW));
    }
}
