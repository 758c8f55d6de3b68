use rv32sim_core::isa::rv32i::{funct3, funct7, opcodes};

/// Fluent encoder for RV32I instruction words.
///
/// `opcode` is the 5-bit group (bits 6-2); the length bits `0b11` are added by `build`.
/// The immediate is placed according to the format implied by the opcode group.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    funct7: u32,
    imm: i32,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn rs2(mut self, rs2: u32) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn funct7(mut self, funct7: u32) -> Self {
        self.funct7 = funct7;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    // --- Helpers for Common Instructions ---

    fn reg(mut self, f3: u32, f7: u32, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.opcode = opcodes::OP_REG;
        self.funct3 = f3;
        self.funct7 = f7;
        self.rd = rd;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self
    }

    fn itype(mut self, op: u32, f3: u32, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode = op;
        self.funct3 = f3;
        self.rd = rd;
        self.rs1 = rs1;
        self.imm = imm;
        self
    }

    fn stype(mut self, op: u32, f3: u32, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode = op;
        self.funct3 = f3;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.imm = imm;
        self
    }

    pub fn add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(funct3::ADD_SUB, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sub(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(funct3::ADD_SUB, funct7::SUB_SRA, rd, rs1, rs2)
    }

    pub fn sra(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(funct3::SRL_SRA, funct7::SUB_SRA, rd, rs1, rs2)
    }

    pub fn slt(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(funct3::SLT, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn addi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(opcodes::OP_IMM, funct3::ADD_SUB, rd, rs1, imm)
    }

    pub fn andi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(opcodes::OP_IMM, funct3::AND, rd, rs1, imm)
    }

    pub fn slli(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.itype(opcodes::OP_IMM, funct3::SLL, rd, rs1, shamt as i32)
    }

    pub fn srai(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.itype(
            opcodes::OP_IMM,
            funct3::SRL_SRA,
            rd,
            rs1,
            ((funct7::SUB_SRA << 5) | shamt) as i32,
        )
    }

    pub fn lb(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(opcodes::OP_LOAD, funct3::LB, rd, rs1, imm)
    }

    pub fn lbu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(opcodes::OP_LOAD, funct3::LBU, rd, rs1, imm)
    }

    pub fn lh(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(opcodes::OP_LOAD, funct3::LH, rd, rs1, imm)
    }

    pub fn lhu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(opcodes::OP_LOAD, funct3::LHU, rd, rs1, imm)
    }

    pub fn lw(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(opcodes::OP_LOAD, funct3::LW, rd, rs1, imm)
    }

    pub fn sb(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.stype(opcodes::OP_STORE, funct3::SB, rs1, rs2, imm)
    }

    pub fn sh(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.stype(opcodes::OP_STORE, funct3::SH, rs1, rs2, imm)
    }

    pub fn sw(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.stype(opcodes::OP_STORE, funct3::SW, rs1, rs2, imm)
    }

    pub fn beq(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.stype(opcodes::OP_BRANCH, funct3::BEQ, rs1, rs2, imm)
    }

    pub fn bne(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.stype(opcodes::OP_BRANCH, funct3::BNE, rs1, rs2, imm)
    }

    pub fn blt(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.stype(opcodes::OP_BRANCH, funct3::BLT, rs1, rs2, imm)
    }

    pub fn bltu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.stype(opcodes::OP_BRANCH, funct3::BLTU, rs1, rs2, imm)
    }

    pub fn jal(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = opcodes::OP_JAL;
        self.rd = rd;
        self.imm = imm;
        self
    }

    pub fn jalr(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(opcodes::OP_JALR, 0, rd, rs1, imm)
    }

    pub fn lui(mut self, rd: u32, imm20: u32) -> Self {
        self.opcode = opcodes::OP_LUI;
        self.rd = rd;
        self.imm = (imm20 << 12) as i32;
        self
    }

    pub fn auipc(mut self, rd: u32, imm20: u32) -> Self {
        self.opcode = opcodes::OP_AUIPC;
        self.rd = rd;
        self.imm = (imm20 << 12) as i32;
        self
    }

    pub fn system(self) -> Self {
        self.opcode(opcodes::OP_SYSTEM)
    }

    /// Encodes the instruction word.
    pub fn build(self) -> u32 {
        let imm = self.imm as u32;
        let low = (self.opcode & 0x1F) << 2 | 0b11;
        let rd = (self.rd & 0x1F) << 7;
        let f3 = (self.funct3 & 0x7) << 12;
        let rs1 = (self.rs1 & 0x1F) << 15;
        let rs2 = (self.rs2 & 0x1F) << 20;
        let f7 = (self.funct7 & 0x7F) << 25;

        match self.opcode {
            opcodes::OP_REG => f7 | rs2 | rs1 | f3 | rd | low,
            opcodes::OP_STORE => {
                (imm >> 5 & 0x7F) << 25 | rs2 | rs1 | f3 | (imm & 0x1F) << 7 | low
            }
            opcodes::OP_BRANCH => {
                (imm >> 12 & 1) << 31
                    | (imm >> 5 & 0x3F) << 25
                    | rs2
                    | rs1
                    | f3
                    | (imm >> 1 & 0xF) << 8
                    | (imm >> 11 & 1) << 7
                    | low
            }
            opcodes::OP_LUI | opcodes::OP_AUIPC => (imm & 0xFFFF_F000) | rd | low,
            opcodes::OP_JAL => {
                (imm >> 20 & 1) << 31
                    | (imm >> 1 & 0x3FF) << 21
                    | (imm >> 11 & 1) << 20
                    | (imm >> 12 & 0xFF) << 12
                    | rd
                    | low
            }
            _ => (imm & 0xFFF) << 20 | rs1 | f3 | rd | low,
        }
    }
}
