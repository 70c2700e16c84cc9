//! Renders instructions and CPU state in the nestest reference format.
//!
//! A trace line is byte-compatible with the reference log up to the
//! register dump:
//!
//! ```text
//! C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD
//! ```
//!
//! PC, two spaces, the raw instruction bytes left-justified in a 9-column
//! field (8 for undocumented opcodes, whose `*` prefix eats one column),
//! the assembly with any computed-address suffix, padding to column 48,
//! then the registers.

use super::decoder;
use super::instruction::{AddressingMode, Conditional, Instruction, Operation, Register};
use super::{Cpu, StatusFlags};
use crate::error::EmuError;

fn mnemonic(op: Operation) -> &'static str {
    match op {
        Operation::Break => "BRK",
        Operation::LoadRegister(Register::A) => "LDA",
        Operation::LoadRegister(Register::X) => "LDX",
        Operation::LoadRegister(Register::Y) => "LDY",
        Operation::StoreRegister(Register::A) => "STA",
        Operation::StoreRegister(Register::X) => "STX",
        Operation::StoreRegister(Register::Y) => "STY",
        Operation::TransferRegisterTo(Register::A, Register::X) => "TAX",
        Operation::TransferRegisterTo(Register::A, Register::Y) => "TAY",
        Operation::TransferRegisterTo(Register::X, Register::A) => "TXA",
        Operation::TransferRegisterTo(Register::Y, Register::A) => "TYA",
        Operation::TransferRegisterTo(..) => "T??",
        Operation::TransferStackPointerToX => "TSX",
        Operation::TransferXToStackPointer => "TXS",
        Operation::PushAccumulator => "PHA",
        Operation::PullAccumulator => "PLA",
        Operation::PushStatusRegister => "PHP",
        Operation::PullStatusRegister => "PLP",
        Operation::AddWithCarry => "ADC",
        Operation::SubtractWithCarry => "SBC",
        Operation::LogicalAnd => "AND",
        Operation::ExclusiveOr => "EOR",
        Operation::BitwiseOr => "ORA",
        Operation::ShiftLeft => "ASL",
        Operation::ShiftRight => "LSR",
        Operation::RotateLeft => "ROL",
        Operation::RotateRight => "ROR",
        Operation::Increment => "INC",
        Operation::IncrementRegister(Register::X) => "INX",
        Operation::IncrementRegister(_) => "INY",
        Operation::Decrement => "DEC",
        Operation::DecrementRegister(Register::X) => "DEX",
        Operation::DecrementRegister(_) => "DEY",
        Operation::CompareRegister(Register::A) => "CMP",
        Operation::CompareRegister(Register::X) => "CPX",
        Operation::CompareRegister(Register::Y) => "CPY",
        Operation::BitTest => "BIT",
        Operation::Branch(Conditional::Equal) => "BEQ",
        Operation::Branch(Conditional::NotEqual) => "BNE",
        Operation::Branch(Conditional::CarrySet) => "BCS",
        Operation::Branch(Conditional::CarryClear) => "BCC",
        Operation::Branch(Conditional::Minus) => "BMI",
        Operation::Branch(Conditional::Positive) => "BPL",
        Operation::Branch(Conditional::OverflowSet) => "BVS",
        Operation::Branch(Conditional::OverflowClear) => "BVC",
        Operation::Jump => "JMP",
        Operation::JumpToSubroutine => "JSR",
        Operation::ReturnFromSubroutine => "RTS",
        Operation::ReturnFromInterrupt => "RTI",
        Operation::ClearStatusFlag(flag) => {
            if flag == StatusFlags::CARRY {
                "CLC"
            } else if flag == StatusFlags::DECIMAL_MODE {
                "CLD"
            } else if flag == StatusFlags::INTERRUPT_DISABLE {
                "CLI"
            } else {
                "CLV"
            }
        }
        Operation::SetStatusFlag(flag) => {
            if flag == StatusFlags::CARRY {
                "SEC"
            } else if flag == StatusFlags::DECIMAL_MODE {
                "SED"
            } else {
                "SEI"
            }
        }
        Operation::NoOperation
        | Operation::DoubleNoOperation
        | Operation::TripleNoOperation => "NOP",
        Operation::LoadAccumulatorAndX => "LAX",
        Operation::StoreAccumulatorAndX => "SAX",
        Operation::DecrementCompare => "DCP",
        Operation::IncrementSubtract => "ISB",
        Operation::ShiftLeftOr => "SLO",
        Operation::RotateLeftAnd => "RLA",
        Operation::ShiftRightEor => "SRE",
        Operation::RotateRightAdd => "RRA",
    }
}

/// The operand in canonical 6502 assembly notation. Branch offsets render
/// as their resolved target address, relative to the byte after the
/// instruction at `pc`.
fn format_operand(instruction: &Instruction, pc: u16) -> String {
    let operand = instruction.operand;
    match instruction.mode {
        AddressingMode::Immediate => format!("#${:02X}", operand.byte()),
        AddressingMode::ZeroPage => format!("${:02X}", operand.byte()),
        AddressingMode::ZeroPageX => format!("${:02X},X", operand.byte()),
        AddressingMode::ZeroPageY => format!("${:02X},Y", operand.byte()),
        AddressingMode::Absolute => format!("${:04X}", operand.word()),
        AddressingMode::AbsoluteX => format!("${:04X},X", operand.word()),
        AddressingMode::AbsoluteY => format!("${:04X},Y", operand.word()),
        AddressingMode::Indirect => format!("(${:04X})", operand.word()),
        AddressingMode::IndirectX => format!("(${:02X},X)", operand.byte()),
        AddressingMode::IndirectY => format!("(${:02X}),Y", operand.byte()),
        AddressingMode::Accumulator => "A".to_string(),
        AddressingMode::Implied => String::new(),
        AddressingMode::Relative => {
            let target = pc
                .wrapping_add(instruction.size as u16)
                .wrapping_add(operand.offset() as u16);
            format!("${target:04X}")
        }
    }
}

/// The computed-address suffix: effective addresses and peeked memory for
/// every memory-accessing instruction, so a reader can follow dataflow
/// without a memory dump. Control flow renders none, except JMP indirect
/// which shows its resolved target.
fn memory_suffix(instruction: &Instruction, cpu: &Cpu) -> String {
    match instruction.op {
        Operation::Break
        | Operation::Branch(_)
        | Operation::JumpToSubroutine
        | Operation::ReturnFromSubroutine
        | Operation::ReturnFromInterrupt => return String::new(),
        Operation::Jump => {
            return if instruction.mode == AddressingMode::Indirect {
                let target = cpu.operand_address(instruction.mode, instruction.operand);
                format!(" = {target:04X}")
            } else {
                String::new()
            };
        }
        _ => {}
    }

    let operand = instruction.operand;
    match instruction.mode {
        AddressingMode::ZeroPage | AddressingMode::Absolute => {
            let addr = cpu.operand_address(instruction.mode, operand);
            format!(" = {:02X}", cpu.read_u8(addr))
        }
        AddressingMode::ZeroPageX | AddressingMode::ZeroPageY => {
            let addr = cpu.operand_address(instruction.mode, operand);
            format!(" @ {:02X} = {:02X}", addr, cpu.read_u8(addr))
        }
        AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => {
            let addr = cpu.operand_address(instruction.mode, operand);
            format!(" @ {:04X} = {:02X}", addr, cpu.read_u8(addr))
        }
        AddressingMode::IndirectX => {
            let ptr = operand.byte().wrapping_add(cpu.x_register);
            let target = cpu.operand_address(instruction.mode, operand);
            format!(" @ {:02X} = {:04X} = {:02X}", ptr, target, cpu.read_u8(target))
        }
        AddressingMode::IndirectY => {
            let ptr = operand.byte();
            let base = u16::from_le_bytes([
                cpu.read_u8(ptr as u16),
                cpu.read_u8(ptr.wrapping_add(1) as u16),
            ]);
            let target = base.wrapping_add(cpu.y_register as u16);
            format!(" = {:04X} @ {:04X} = {:02X}", base, target, cpu.read_u8(target))
        }
        _ => String::new(),
    }
}

/// The assembly text for one instruction: `*`-prefixed mnemonic for
/// undocumented opcodes, operand syntax per addressing mode, computed
/// suffix per the current CPU state.
pub fn disassemble(instruction: &Instruction, pc: u16, cpu: &Cpu) -> String {
    let prefix = if instruction.undocumented { "*" } else { "" };
    let operand_text = format_operand(instruction, pc);
    let suffix = memory_suffix(instruction, cpu);
    if operand_text.is_empty() {
        format!("{prefix}{}{suffix}", mnemonic(instruction.op))
    } else {
        format!("{prefix}{} {operand_text}{suffix}", mnemonic(instruction.op))
    }
}

/// One full trace line for the instruction at the current PC.
pub fn trace(cpu: &Cpu) -> Result<String, EmuError> {
    let pc = cpu.program_counter;
    let bytes = [
        cpu.read_u8(pc),
        cpu.read_u8(pc.wrapping_add(1)),
        cpu.read_u8(pc.wrapping_add(2)),
    ];
    let instruction = decoder::decode(&bytes)?;
    let assembly = disassemble(&instruction, pc, cpu);

    let raw: Vec<String> = bytes[..instruction.size as usize]
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect();
    let raw = raw.join(" ");

    // The `*` prefix of undocumented mnemonics borrows a column from the
    // raw-bytes field so the mnemonics themselves stay aligned.
    let width = if instruction.undocumented { 8 } else { 9 };
    let line = format!("{pc:04X}  {raw:<width$} {assembly}");

    Ok(format!(
        "{line:<48}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
        cpu.accumulator,
        cpu.x_register,
        cpu.y_register,
        cpu.status_register.bits(),
        cpu.stack_pointer
    ))
}
