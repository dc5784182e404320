use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::csr::Csr;
use crate::reg::Reg;

/// RV64 opcodes known to the renderer: the RV64I base, M, Zicsr, fence, and
/// the F/D sign-injection instructions that have register-identity aliases.
/// The variant spelling matches the canonical mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Lui,
    Auipc,
    Jal,
    Jalr,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Lb,
    Lh,
    Lw,
    Ld,
    Lbu,
    Lhu,
    Lwu,
    Sb,
    Sh,
    Sw,
    Sd,
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
    Addiw,
    Slliw,
    Srliw,
    Sraiw,
    Addw,
    Subw,
    Sllw,
    Srlw,
    Sraw,
    Fence,
    FenceI,
    Ecall,
    Ebreak,
    Csrrw,
    Csrrs,
    Csrrc,
    Csrrwi,
    Csrrsi,
    Csrrci,
    Mul,
    Mulh,
    Mulhsu,
    Mulhu,
    Div,
    Divu,
    Rem,
    Remu,
    Mulw,
    Divw,
    Divuw,
    Remw,
    Remuw,
    FsgnjS,
    FsgnjnS,
    FsgnjxS,
    FsgnjD,
    FsgnjnD,
    FsgnjxD,
}

impl Op {
    /// Canonical (non-aliased) mnemonic, lowercase.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Op::Lui => "lui",
            Op::Auipc => "auipc",
            Op::Jal => "jal",
            Op::Jalr => "jalr",
            Op::Beq => "beq",
            Op::Bne => "bne",
            Op::Blt => "blt",
            Op::Bge => "bge",
            Op::Bltu => "bltu",
            Op::Bgeu => "bgeu",
            Op::Lb => "lb",
            Op::Lh => "lh",
            Op::Lw => "lw",
            Op::Ld => "ld",
            Op::Lbu => "lbu",
            Op::Lhu => "lhu",
            Op::Lwu => "lwu",
            Op::Sb => "sb",
            Op::Sh => "sh",
            Op::Sw => "sw",
            Op::Sd => "sd",
            Op::Addi => "addi",
            Op::Slti => "slti",
            Op::Sltiu => "sltiu",
            Op::Xori => "xori",
            Op::Ori => "ori",
            Op::Andi => "andi",
            Op::Slli => "slli",
            Op::Srli => "srli",
            Op::Srai => "srai",
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Sll => "sll",
            Op::Slt => "slt",
            Op::Sltu => "sltu",
            Op::Xor => "xor",
            Op::Srl => "srl",
            Op::Sra => "sra",
            Op::Or => "or",
            Op::And => "and",
            Op::Addiw => "addiw",
            Op::Slliw => "slliw",
            Op::Srliw => "srliw",
            Op::Sraiw => "sraiw",
            Op::Addw => "addw",
            Op::Subw => "subw",
            Op::Sllw => "sllw",
            Op::Srlw => "srlw",
            Op::Sraw => "sraw",
            Op::Fence => "fence",
            Op::FenceI => "fence.i",
            Op::Ecall => "ecall",
            Op::Ebreak => "ebreak",
            Op::Csrrw => "csrrw",
            Op::Csrrs => "csrrs",
            Op::Csrrc => "csrrc",
            Op::Csrrwi => "csrrwi",
            Op::Csrrsi => "csrrsi",
            Op::Csrrci => "csrrci",
            Op::Mul => "mul",
            Op::Mulh => "mulh",
            Op::Mulhsu => "mulhsu",
            Op::Mulhu => "mulhu",
            Op::Div => "div",
            Op::Divu => "divu",
            Op::Rem => "rem",
            Op::Remu => "remu",
            Op::Mulw => "mulw",
            Op::Divw => "divw",
            Op::Divuw => "divuw",
            Op::Remw => "remw",
            Op::Remuw => "remuw",
            Op::FsgnjS => "fsgnj.s",
            Op::FsgnjnS => "fsgnjn.s",
            Op::FsgnjxS => "fsgnjx.s",
            Op::FsgnjD => "fsgnj.d",
            Op::FsgnjnD => "fsgnjn.d",
            Op::FsgnjxD => "fsgnjx.d",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Signed immediate, rendered in decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simm(pub i32);

impl fmt::Display for Simm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

bitflags! {
/// Fence predecessor/successor ordering set, rendered as a subset of "iorw".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemOrder: u8 {
    const W = 1 << 0;
    const R = 1 << 1;
    const O = 1 << 2;
    const I = 1 << 3;
}
}

impl fmt::Display for MemOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, letter) in [
            (MemOrder::I, "i"),
            (MemOrder::O, "o"),
            (MemOrder::R, "r"),
            (MemOrder::W, "w"),
        ] {
            if self.contains(flag) {
                f.write_str(letter)?;
            }
        }
        Ok(())
    }
}

/// Base register plus signed displacement, as used by jalr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegOffset {
    pub base: Reg,
    pub offset: Simm,
}

impl fmt::Display for RegOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.offset, self.base)
    }
}

/// One operand. The variant in each slot is fixed by the opcode; the
/// renderer relies on that and never branches on the variant at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arg {
    Reg(Reg),
    Simm(Simm),
    Csr(Csr),
    MemOrder(MemOrder),
    RegOffset(RegOffset),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Reg(r) => r.fmt(f),
            Arg::Simm(s) => s.fmt(f),
            Arg::Csr(c) => c.fmt(f),
            Arg::MemOrder(m) => m.fmt(f),
            Arg::RegOffset(ro) => ro.fmt(f),
        }
    }
}

pub const MAX_ARGS: usize = 6;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("too many operands for {op}: {got}")]
pub struct TooManyArgs {
    pub op: Op,
    pub got: usize,
}

/// A decoded instruction: opcode plus up to [`MAX_ARGS`] operand slots in
/// architectural order. `None` marks the end of the list; present slots
/// never follow an absent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inst {
    pub op: Op,
    pub args: [Option<Arg>; MAX_ARGS],
}

impl Inst {
    pub fn new(op: Op, args: &[Arg]) -> Result<Self, TooManyArgs> {
        if args.len() > MAX_ARGS {
            return Err(TooManyArgs {
                op,
                got: args.len(),
            });
        }
        let mut slots = [None; MAX_ARGS];
        for (slot, arg) in slots.iter_mut().zip(args) {
            *slot = Some(*arg);
        }
        Ok(Self { op, args: slots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_rendering() {
        assert_eq!(Arg::Simm(Simm(-12)).to_string(), "-12");
        assert_eq!(Arg::Csr(Csr::Frm).to_string(), "frm");
        assert_eq!(MemOrder::all().to_string(), "iorw");
        assert_eq!((MemOrder::R | MemOrder::W).to_string(), "rw");
        assert_eq!(
            RegOffset {
                base: Reg::X1,
                offset: Simm(-8)
            }
            .to_string(),
            "-8(x1)"
        );
    }

    #[test]
    fn mnemonics_with_suffixes() {
        assert_eq!(Op::FenceI.to_string(), "fence.i");
        assert_eq!(Op::FsgnjxD.to_string(), "fsgnjx.d");
    }

    #[test]
    fn new_rejects_operand_overflow() {
        let args = [Arg::Simm(Simm(0)); 7];
        assert_eq!(
            Inst::new(Op::Addi, &args),
            Err(TooManyArgs {
                op: Op::Addi,
                got: 7
            })
        );
    }

    #[test]
    fn new_pads_trailing_slots() {
        let i = Inst::new(Op::Ecall, &[]).unwrap();
        assert!(i.args.iter().all(Option::is_none));
    }
}
