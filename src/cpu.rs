use bitflags::bitflags;

use crate::bus::{Bus, RESET_VECTOR};
use crate::error::EmuError;

pub mod addressing;
pub mod decoder;
pub mod disassembler;
pub mod instruction;
mod instructions;

pub use instruction::{AddressingMode, Conditional, Instruction, Operand, Operation, Register};

bitflags! {
    /// The P register.
    ///
    /// BREAK and UNUSED are not real flags: they only exist in bytes pushed
    /// on the stack. They live in the set anyway because PHP/PLP/RTI and the
    /// trace log all work on the full status byte.
    pub struct StatusFlags: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL_MODE      = 0b0000_1000;
        const BREAK             = 0b0001_0000;
        const UNUSED            = 0b0010_0000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;
    }
}

const STACK_BASE: u16 = 0x0100;
const STACK_RESET: u8 = 0xFD;
const INTERRUPT_CYCLES: u64 = 7;

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// The 2A03 CPU core: registers, flags and the fetch-decode-execute loop.
///
/// The CPU borrows the bus; it never owns it. In a full NES the PPU and APU
/// sit on the same bus, so the caller keeps it and hands out the single
/// mutable reference for the duration of a run.
pub struct Cpu<'bus> {
    pub bus: &'bus mut Bus,

    pub accumulator: u8,
    pub x_register: u8,
    pub y_register: u8,

    /// Low byte of the next free stack slot in page `$0100-$01FF`. The
    /// stack grows downward and wraps modulo 256 within that page.
    pub stack_pointer: u8,
    pub program_counter: u16,
    pub status_register: StatusFlags,

    /// Total cycles consumed so far; hosts use this for pacing.
    pub cycles: u64,

    irq_pending: bool,
    nmi_pending: bool,
}

impl<'bus> Cpu<'bus> {
    pub fn new(bus: &'bus mut Bus) -> Self {
        Self {
            bus,
            accumulator: 0,
            x_register: 0,
            y_register: 0,
            stack_pointer: STACK_RESET,
            program_counter: 0,
            status_register: StatusFlags::empty(),
            cycles: 0,
            irq_pending: false,
            nmi_pending: false,
        }
    }

    /// Power-on state: registers cleared, SP = `$FD`, status = `$24`, and
    /// PC loaded from the reset vector at `$FFFC/$FFFD`.
    pub fn init(&mut self) {
        self.accumulator = 0;
        self.x_register = 0;
        self.y_register = 0;
        self.stack_pointer = STACK_RESET;
        self.status_register = StatusFlags::INTERRUPT_DISABLE | StatusFlags::UNUSED;
        self.program_counter = self.read_u16(RESET_VECTOR);
    }

    /// Overrides the reset vector. Used by test harnesses that enter at a
    /// fixed address (nestest batch mode starts at `$C000`).
    pub fn set_program_start(&mut self, addr: u16) {
        self.program_counter = addr;
    }

    pub fn register(&self, register: Register) -> u8 {
        match register {
            Register::A => self.accumulator,
            Register::X => self.x_register,
            Register::Y => self.y_register,
        }
    }

    /// Writes a register and applies the standard Zero/Negative discipline.
    pub(crate) fn set_register(&mut self, register: Register, value: u8) {
        match register {
            Register::A => self.accumulator = value,
            Register::X => self.x_register = value,
            Register::Y => self.y_register = value,
        }
        self.update_zero_and_negative(value);
    }

    pub(crate) fn update_zero_and_negative(&mut self, value: u8) {
        self.status_register.set(StatusFlags::ZERO, value == 0);
        self.status_register
            .set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    // --- memory access -----------------------------------------------------

    pub fn read_u8(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    pub fn write_u8(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Little-endian 16-bit read: low byte at `addr`, high at `addr + 1`.
    pub fn read_u16(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read_u8(addr), self.read_u8(addr.wrapping_add(1))])
    }

    pub fn write_u16(&mut self, addr: u16, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.write_u8(addr, low);
        self.write_u8(addr.wrapping_add(1), high);
    }

    // --- stack -------------------------------------------------------------

    pub(crate) fn push_u8(&mut self, value: u8) {
        self.write_u8(STACK_BASE + self.stack_pointer as u16, value);
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
    }

    pub(crate) fn pop_u8(&mut self) -> u8 {
        self.stack_pointer = self.stack_pointer.wrapping_add(1);
        self.read_u8(STACK_BASE + self.stack_pointer as u16)
    }

    /// High byte first, then low, so the word sits little-endian in memory.
    pub(crate) fn push_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_u8(high);
        self.push_u8(low);
    }

    pub(crate) fn pop_u16(&mut self) -> u16 {
        let low = self.pop_u8();
        let high = self.pop_u8();
        u16::from_le_bytes([low, high])
    }

    // --- interrupts --------------------------------------------------------

    /// Requests a maskable interrupt. It is serviced before the next
    /// instruction unless InterruptDisable is set, in which case it stays
    /// pending until the flag clears.
    pub fn trigger_irq(&mut self) {
        self.irq_pending = true;
    }

    /// Requests a non-maskable interrupt, serviced before the next
    /// instruction regardless of InterruptDisable.
    pub fn trigger_nmi(&mut self) {
        self.nmi_pending = true;
    }

    fn poll_interrupts(&mut self) {
        if self.nmi_pending {
            self.nmi_pending = false;
            self.service_interrupt(NMI_VECTOR);
        } else if self.irq_pending
            && !self
                .status_register
                .contains(StatusFlags::INTERRUPT_DISABLE)
        {
            self.irq_pending = false;
            self.service_interrupt(IRQ_VECTOR);
        }
    }

    /// Hardware interrupt entry: push PC, push the status byte with Unused
    /// set and Break clear, mask IRQs, vector.
    fn service_interrupt(&mut self, vector: u16) {
        self.push_u16(self.program_counter);
        let pushed = (self.status_register | StatusFlags::UNUSED) - StatusFlags::BREAK;
        self.push_u8(pushed.bits());
        self.status_register.insert(StatusFlags::INTERRUPT_DISABLE);
        self.program_counter = self.read_u16(vector);
        self.cycles += INTERRUPT_CYCLES;
    }

    // --- execution ---------------------------------------------------------

    /// Fetches, decodes and executes one instruction, servicing any pending
    /// interrupt first. Returns the executed instruction.
    pub fn step(&mut self) -> Result<Instruction, EmuError> {
        self.poll_interrupts();
        let pc = self.program_counter;
        let bytes = [
            self.read_u8(pc),
            self.read_u8(pc.wrapping_add(1)),
            self.read_u8(pc.wrapping_add(2)),
        ];
        let instruction = decoder::decode(&bytes)?;
        self.run_instruction(instruction)?;
        Ok(instruction)
    }

    /// Runs until BRK. Other errors propagate.
    pub fn run(&mut self) -> Result<(), EmuError> {
        self.run_with_callback(|_| {})
    }

    /// Runs until BRK, invoking `callback` before every instruction. This
    /// is the hook trace drivers and game loops attach to.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<(), EmuError>
    where
        F: FnMut(&mut Self),
    {
        loop {
            callback(self);
            match self.step() {
                Ok(_) => {}
                Err(EmuError::Break { .. }) => return Ok(()),
                Err(error) => return Err(error),
            }
        }
    }

    /// Runs until at least `budget` more cycles have elapsed or the program
    /// hits BRK. Hosts that pace to wall-clock time call this once per tick.
    pub fn run_for(&mut self, budget: u64) -> Result<(), EmuError> {
        let deadline = self.cycles + budget;
        while self.cycles < deadline {
            match self.step() {
                Ok(_) => {}
                Err(EmuError::Break { .. }) => return Ok(()),
                Err(error) => return Err(error),
            }
        }
        Ok(())
    }

    /// Executes one decoded instruction: mutates registers, flags and
    /// memory, and advances PC by the instruction size unless the
    /// instruction set it explicitly (jumps, calls, returns, taken
    /// branches).
    pub fn run_instruction(&mut self, instruction: Instruction) -> Result<(), EmuError> {
        let Instruction {
            op,
            mode,
            operand,
            size,
            cycles,
            ..
        } = instruction;
        self.cycles += cycles as u64;

        let mut pc_set = false;
        match op {
            // BRK is a control-flow sentinel: the harness decides whether it
            // is a normal end-of-program or a fault.
            Operation::Break => {
                self.program_counter = self.program_counter.wrapping_add(size as u16);
                return Err(EmuError::Break {
                    pc: self.program_counter,
                });
            }

            Operation::LoadRegister(register) => self.load_register(register, mode, operand),
            Operation::StoreRegister(register) => self.store_register(register, mode, operand),

            Operation::TransferRegisterTo(source, destination) => {
                self.transfer_register(source, destination)
            }
            Operation::TransferStackPointerToX => self.transfer_stack_pointer_to_x(),
            Operation::TransferXToStackPointer => self.transfer_x_to_stack_pointer(),

            Operation::PushAccumulator => self.push_accumulator(),
            Operation::PullAccumulator => self.pull_accumulator(),
            Operation::PushStatusRegister => self.push_status_register(),
            Operation::PullStatusRegister => self.pull_status_register(),

            Operation::AddWithCarry => self.add_with_carry(mode, operand),
            Operation::SubtractWithCarry => self.subtract_with_carry(mode, operand),

            Operation::LogicalAnd => self.logical_and(mode, operand),
            Operation::ExclusiveOr => self.exclusive_or(mode, operand),
            Operation::BitwiseOr => self.bitwise_or(mode, operand),
            Operation::BitTest => self.bit_test(mode, operand),

            Operation::ShiftLeft => self.shift_left(mode, operand),
            Operation::ShiftRight => self.shift_right(mode, operand),
            Operation::RotateLeft => self.rotate_left(mode, operand),
            Operation::RotateRight => self.rotate_right(mode, operand),

            Operation::Increment => self.increment(mode, operand),
            Operation::IncrementRegister(register) => self.increment_register(register),
            Operation::Decrement => self.decrement(mode, operand),
            Operation::DecrementRegister(register) => self.decrement_register(register),

            Operation::CompareRegister(register) => self.compare_register(register, mode, operand),

            Operation::Branch(condition) => {
                pc_set = self.branch(condition, operand.offset(), size)
            }
            Operation::Jump => {
                self.jump(mode, operand);
                pc_set = true;
            }
            Operation::JumpToSubroutine => {
                self.jump_to_subroutine(operand, size);
                pc_set = true;
            }
            Operation::ReturnFromSubroutine => {
                self.return_from_subroutine();
                pc_set = true;
            }
            Operation::ReturnFromInterrupt => {
                self.return_from_interrupt();
                pc_set = true;
            }

            Operation::ClearStatusFlag(flag) => self.status_register.remove(flag),
            Operation::SetStatusFlag(flag) => self.status_register.insert(flag),

            Operation::NoOperation
            | Operation::DoubleNoOperation
            | Operation::TripleNoOperation => {}

            Operation::LoadAccumulatorAndX => self.load_accumulator_and_x(mode, operand),
            Operation::StoreAccumulatorAndX => self.store_accumulator_and_x(mode, operand),
            Operation::DecrementCompare => self.decrement_compare(mode, operand),
            Operation::IncrementSubtract => self.increment_subtract(mode, operand),
            Operation::ShiftLeftOr => self.shift_left_or(mode, operand),
            Operation::RotateLeftAnd => self.rotate_left_and(mode, operand),
            Operation::ShiftRightEor => self.shift_right_eor(mode, operand),
            Operation::RotateRightAdd => self.rotate_right_add(mode, operand),
        }

        if !pc_set {
            self.program_counter = self.program_counter.wrapping_add(size as u16);
        }
        Ok(())
    }
}
