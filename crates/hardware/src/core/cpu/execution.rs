//! Main Execution Cycle.
//!
//! This module implements one CPU step. It performs the following:
//! 1. **Fetch:** Four bytes at PC through the address space.
//! 2. **Length Validation:** Anything but a 32-bit base encoding is a fatal error.
//! 3. **Dispatch:** One handler per opcode group; unknown `funct3`/`funct7` combinations trap.
//! 4. **Close:** `x0` is cleared and PC advances by 4.
//!
//! Control transfers store `target - 4` in PC so that the closing increment lands exactly on
//! the target.

use tracing::{debug, trace};

use super::memory::Width;
use super::{Cpu, InstructionClass, StepOutcome};
use crate::common::constants::INSTRUCTION_BYTES;
use crate::common::{SimError, Trap};
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::decode::{decode, is_base_length, sign_extend};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Decoded;
use crate::isa::rv32i::{funct3, opcodes};

/// Mask clearing bit 0 of a JALR target.
const JALR_TARGET_MASK: u32 = !1;

impl Cpu {
    /// Executes one instruction.
    ///
    /// A failed fetch reports `InaccessibleMemory` and leaves PC where it was. Any other
    /// recoverable trap abandons the instruction and PC still advances by 4.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidInstructionEncoding` if the fetched word is not a 32-bit base
    /// encoding. Nothing has been modified when this is returned.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        let pc = self.pc;

        let inst = match self.fetch(pc) {
            Ok(inst) => inst,
            Err(trap) => {
                debug!(pc = format_args!("{pc:#010x}"), %trap, "fetch trap");
                return Ok(StepOutcome {
                    pc,
                    inst: None,
                    class: InstructionClass::None,
                    trap: Some(trap),
                });
            }
        };

        if !is_base_length(inst) {
            return Err(SimError::InvalidInstructionEncoding { pc, inst });
        }

        let d = decode(inst);
        if self.trace {
            trace!(
                pc = format_args!("{pc:#010x}"),
                inst = format_args!("{inst:#010x}"),
                "{}",
                disassemble(pc, &d)
            );
        }

        let (class, result) = self.execute(&d);
        let trap = result.err();
        if let Some(trap) = trap {
            debug!(pc = format_args!("{pc:#010x}"), %trap, "trap");
        }

        self.regs.clear_zero();
        self.pc = self.pc.wrapping_add(INSTRUCTION_BYTES);

        Ok(StepOutcome {
            pc,
            inst: Some(inst),
            class,
            trap,
        })
    }

    fn execute(&mut self, d: &Decoded) -> (InstructionClass, Result<(), Trap>) {
        match d.opcode {
            opcodes::OP_LOAD => (InstructionClass::Load, self.exec_load(d)),
            opcodes::OP_IMM => (InstructionClass::Alu, self.exec_op_imm(d)),
            opcodes::OP_AUIPC => {
                self.regs.write(d.rd, self.pc.wrapping_add(d.imm));
                (InstructionClass::Alu, Ok(()))
            }
            opcodes::OP_STORE => (InstructionClass::Store, self.exec_store(d)),
            opcodes::OP_REG => (InstructionClass::Alu, self.exec_op(d)),
            opcodes::OP_LUI => {
                self.regs.write(d.rd, d.imm);
                (InstructionClass::Alu, Ok(()))
            }
            opcodes::OP_BRANCH => match self.exec_branch(d) {
                Ok(taken) => (InstructionClass::Branch { taken }, Ok(())),
                Err(trap) => (InstructionClass::Branch { taken: false }, Err(trap)),
            },
            opcodes::OP_JALR => {
                let target = self.regs.read(d.rs1).wrapping_add(d.imm) & JALR_TARGET_MASK;
                self.regs.write(d.rd, self.pc.wrapping_add(INSTRUCTION_BYTES));
                self.jump_to(target);
                (InstructionClass::Jump, Ok(()))
            }
            opcodes::OP_JAL => {
                let target = self.pc.wrapping_add(d.imm);
                self.regs.write(d.rd, self.pc.wrapping_add(INSTRUCTION_BYTES));
                self.jump_to(target);
                (InstructionClass::Jump, Ok(()))
            }
            opcodes::OP_SYSTEM => (InstructionClass::System, Ok(())),
            _ => (
                InstructionClass::Unknown,
                Err(Trap::IllegalInstruction(d.raw)),
            ),
        }
    }

    /// Sets PC so that the end-of-step increment lands on `target`.
    #[inline(always)]
    fn jump_to(&mut self, target: u32) {
        self.pc = target.wrapping_sub(INSTRUCTION_BYTES);
    }

    fn exec_load(&mut self, d: &Decoded) -> Result<(), Trap> {
        let (width, sign_bit) = match d.funct3 {
            funct3::LB => (Width::Byte, Some(7)),
            funct3::LH => (Width::Half, Some(15)),
            funct3::LW => (Width::Word, None),
            funct3::LBU => (Width::Byte, None),
            funct3::LHU => (Width::Half, None),
            _ => return Err(Trap::IllegalInstruction(d.raw)),
        };
        let addr = self.regs.read(d.rs1).wrapping_add(d.imm);
        let raw = self.load(addr, width)?;
        let val = sign_bit.map_or(raw, |bit| sign_extend(raw, bit));
        self.regs.write(d.rd, val);
        Ok(())
    }

    fn exec_store(&mut self, d: &Decoded) -> Result<(), Trap> {
        let width = match d.funct3 {
            funct3::SB => Width::Byte,
            funct3::SH => Width::Half,
            funct3::SW => Width::Word,
            _ => return Err(Trap::IllegalInstruction(d.raw)),
        };
        let addr = self.regs.read(d.rs1).wrapping_add(d.imm);
        self.store(addr, width, self.regs.read(d.rs2))
    }

    fn exec_op_imm(&mut self, d: &Decoded) -> Result<(), Trap> {
        let op = AluOp::from_imm(d.funct3, d.funct7).ok_or(Trap::IllegalInstruction(d.raw))?;
        let val = Alu::execute(op, self.regs.read(d.rs1), d.imm);
        self.regs.write(d.rd, val);
        Ok(())
    }

    fn exec_op(&mut self, d: &Decoded) -> Result<(), Trap> {
        let op = AluOp::from_reg(d.funct3, d.funct7).ok_or(Trap::IllegalInstruction(d.raw))?;
        let val = Alu::execute(op, self.regs.read(d.rs1), self.regs.read(d.rs2));
        self.regs.write(d.rd, val);
        Ok(())
    }

    /// Returns whether the branch was taken.
    fn exec_branch(&mut self, d: &Decoded) -> Result<bool, Trap> {
        let a = self.regs.read(d.rs1);
        let b = self.regs.read(d.rs2);
        let taken = match d.funct3 {
            funct3::BEQ => a == b,
            funct3::BNE => a != b,
            funct3::BLT => (a as i32) < (b as i32),
            funct3::BGE => (a as i32) >= (b as i32),
            funct3::BLTU => a < b,
            funct3::BGEU => a >= b,
            _ => return Err(Trap::IllegalInstruction(d.raw)),
        };
        if taken {
            self.jump_to(self.pc.wrapping_add(d.imm));
        }
        Ok(taken)
    }
}
