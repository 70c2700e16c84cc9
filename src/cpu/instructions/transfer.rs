use crate::cpu::instruction::Register;
use crate::cpu::Cpu;

impl Cpu<'_> {
    pub(crate) fn transfer_register(&mut self, source: Register, destination: Register) {
        let value = self.register(source);
        self.set_register(destination, value);
    }

    pub(crate) fn transfer_stack_pointer_to_x(&mut self) {
        let value = self.stack_pointer;
        self.set_register(Register::X, value);
    }

    /// TXS is the one transfer that leaves the status register alone.
    pub(crate) fn transfer_x_to_stack_pointer(&mut self) {
        self.stack_pointer = self.x_register;
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::decoder::decode;
    use crate::cpu::{Cpu, StatusFlags};

    #[test]
    fn test_tax_copies_and_sets_flags() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.accumulator = 0x80;
        cpu.run_instruction(decode(&[0xAA]).unwrap()).unwrap();
        assert_eq!(cpu.x_register, 0x80);
        assert!(cpu.status_register.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_tay_txa_tya_round_trip() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.accumulator = 0x42;
        cpu.run_instruction(decode(&[0xA8]).unwrap()).unwrap(); // TAY
        assert_eq!(cpu.y_register, 0x42);
        cpu.accumulator = 0;
        cpu.run_instruction(decode(&[0x98]).unwrap()).unwrap(); // TYA
        assert_eq!(cpu.accumulator, 0x42);
        cpu.x_register = 0x13;
        cpu.run_instruction(decode(&[0x8A]).unwrap()).unwrap(); // TXA
        assert_eq!(cpu.accumulator, 0x13);
    }

    #[test]
    fn test_tsx_reads_stack_pointer_with_flags() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.stack_pointer = 0x00;
        cpu.run_instruction(decode(&[0xBA]).unwrap()).unwrap();
        assert_eq!(cpu.x_register, 0x00);
        assert!(cpu.status_register.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_txs_sets_stack_pointer_without_flags() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.x_register = 0x00;
        cpu.status_register = StatusFlags::empty();
        cpu.run_instruction(decode(&[0x9A]).unwrap()).unwrap();
        assert_eq!(cpu.stack_pointer, 0x00);
        assert_eq!(
            cpu.status_register,
            StatusFlags::empty(),
            "TXS must not raise Zero"
        );
    }
}
