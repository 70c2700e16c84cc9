use crate::cpu::instruction::{AddressingMode, Operand, Register};
use crate::cpu::Cpu;

impl Cpu<'_> {
    pub(crate) fn increment(&mut self, mode: AddressingMode, operand: Operand) {
        let addr = self.operand_address(mode, operand);
        let value = self.read_u8(addr).wrapping_add(1);
        self.write_u8(addr, value);
        self.update_zero_and_negative(value);
    }

    pub(crate) fn decrement(&mut self, mode: AddressingMode, operand: Operand) {
        let addr = self.operand_address(mode, operand);
        let value = self.read_u8(addr).wrapping_sub(1);
        self.write_u8(addr, value);
        self.update_zero_and_negative(value);
    }

    pub(crate) fn increment_register(&mut self, register: Register) {
        let value = self.register(register).wrapping_add(1);
        self.set_register(register, value);
    }

    pub(crate) fn decrement_register(&mut self, register: Register) {
        let value = self.register(register).wrapping_sub(1);
        self.set_register(register, value);
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::decoder::decode;
    use crate::cpu::{Cpu, StatusFlags};

    #[test]
    fn test_inx_wraps_to_zero() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.x_register = 0xFF;
        cpu.run_instruction(decode(&[0xE8]).unwrap()).unwrap();
        assert_eq!(cpu.x_register, 0x00);
        assert!(cpu.status_register.contains(StatusFlags::ZERO));
        assert!(!cpu.status_register.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_iny_and_dey() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.run_instruction(decode(&[0xC8]).unwrap()).unwrap();
        assert_eq!(cpu.y_register, 0x01);
        cpu.run_instruction(decode(&[0x88]).unwrap()).unwrap();
        assert_eq!(cpu.y_register, 0x00);
        assert!(cpu.status_register.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_dex_wraps_to_0xff() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.run_instruction(decode(&[0xCA]).unwrap()).unwrap();
        assert_eq!(cpu.x_register, 0xFF);
        assert!(cpu.status_register.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_inc_memory() {
        let mut bus = Bus::new();
        bus.write(0x0010, 0x7F);
        let mut cpu = Cpu::new(&mut bus);
        cpu.run_instruction(decode(&[0xE6, 0x10]).unwrap()).unwrap();
        assert_eq!(cpu.read_u8(0x0010), 0x80);
        assert!(cpu.status_register.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_dec_memory_to_zero() {
        let mut bus = Bus::new();
        bus.write(0x0234, 0x01);
        let mut cpu = Cpu::new(&mut bus);
        cpu.run_instruction(decode(&[0xCE, 0x34, 0x02]).unwrap()).unwrap();
        assert_eq!(cpu.read_u8(0x0234), 0x00);
        assert!(cpu.status_register.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_inc_absolute_x() {
        let mut bus = Bus::new();
        bus.write(0x0305, 0x41);
        let mut cpu = Cpu::new(&mut bus);
        cpu.x_register = 0x05;
        cpu.run_instruction(decode(&[0xFE, 0x00, 0x03]).unwrap()).unwrap();
        assert_eq!(cpu.read_u8(0x0305), 0x42);
    }
}
