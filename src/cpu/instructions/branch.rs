use crate::cpu::instruction::Conditional;
use crate::cpu::{Cpu, StatusFlags};

impl Cpu<'_> {
    /// Takes the branch when `condition` holds and reports whether PC was
    /// set. The offset is relative to the byte after the branch, and a
    /// taken branch costs one extra cycle, two when the target lands on a
    /// different page. Branches never touch flags.
    pub(crate) fn branch(&mut self, condition: Conditional, offset: i8, size: u8) -> bool {
        let status = self.status_register;
        let taken = match condition {
            Conditional::Equal => status.contains(StatusFlags::ZERO),
            Conditional::NotEqual => !status.contains(StatusFlags::ZERO),
            Conditional::CarrySet => status.contains(StatusFlags::CARRY),
            Conditional::CarryClear => !status.contains(StatusFlags::CARRY),
            Conditional::Minus => status.contains(StatusFlags::NEGATIVE),
            Conditional::Positive => !status.contains(StatusFlags::NEGATIVE),
            Conditional::OverflowSet => status.contains(StatusFlags::OVERFLOW),
            Conditional::OverflowClear => !status.contains(StatusFlags::OVERFLOW),
        };

        if taken {
            let base = self.program_counter.wrapping_add(size as u16);
            let target = base.wrapping_add(offset as u16);
            self.cycles += 1;
            if base & 0xFF00 != target & 0xFF00 {
                self.cycles += 1;
            }
            self.program_counter = target;
        }
        taken
    }
}
