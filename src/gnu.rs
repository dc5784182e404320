//! GNU assembler syntax for decoded instructions, as printed by GNU
//! binutils (2.40 baseline) objdump. The interesting part is the
//! pseudo-instruction aliases: opcode-specific rewrites of the mnemonic and
//! operand list that fire on exact operand conditions (an operand equal to
//! x0, a specific immediate literal, a particular CSR).

use crate::csr::Csr;
use crate::inst::{Arg, Inst, Op, RegOffset, Simm};
use crate::reg::Reg;

/// Renders `inst` as one line of GNU syntax, without a trailing newline.
///
/// Pure function over the instruction: the same input always yields the same
/// string, and the input is never modified. Operand slots are trusted to
/// hold the variant the opcode requires (the decoder's contract); a mismatch
/// panics rather than silently misrendering.
pub fn gnu_syntax(inst: &Inst) -> String {
    let mut op = inst.op.to_string();
    let mut args: Vec<String> = inst
        .args
        .iter()
        .map_while(Option::as_ref)
        .map(|a| a.to_string().to_lowercase())
        .collect();

    // Binutils 2.40 drops the "i" suffix from immediate-form mnemonics
    // unconditionally; the alias rules below may rename again.
    if let Some(base) = collapse_imm(inst.op) {
        op = base.to_string();
    }

    match inst.op {
        Op::Addi => {
            if simm(inst, 2).0 == 0 {
                if reg(inst, 0) == Reg::X0 && reg(inst, 1) == Reg::X0 {
                    op = "nop".into();
                    args.clear();
                } else {
                    op = "mv".into();
                    args.pop();
                }
            }
        }

        Op::Addiw => {
            if simm(inst, 2).0 == 0 {
                op = "sext.w".into();
                args.pop();
            }
        }

        Op::Xori => {
            if simm(inst, 2).0 == -1 {
                op = "not".into();
                args.pop();
            }
        }

        Op::Beq => {
            if reg(inst, 1) == Reg::X0 {
                op = "beqz".into();
                args[1] = args[2].clone();
                args.pop();
            }
        }

        Op::Bge => {
            if reg(inst, 1) == Reg::X0 {
                op = "bgez".into();
                args[1] = args[2].clone();
                args.pop();
            } else if reg(inst, 0) == Reg::X0 {
                op = "blez".into();
                args[1] = args[2].clone();
                args.pop();
            }
        }

        Op::Blt => {
            if reg(inst, 1) == Reg::X0 {
                op = "bltz".into();
                args[1] = args[2].clone();
                args.pop();
            } else if reg(inst, 0) == Reg::X0 {
                op = "bgtz".into();
                args[0] = args[1].clone();
                args[1] = args[2].clone();
                args.pop();
            }
        }

        Op::Bne => {
            if reg(inst, 1) == Reg::X0 {
                op = "bnez".into();
                args[1] = args[2].clone();
                args.pop();
            }
        }

        Op::Csrrc | Op::Csrrci => {
            // Nonzero rd keeps the collapsed spelling (csrrc for both forms).
            if reg(inst, 0) == Reg::X0 {
                op = "csrc".into();
                args[0] = args[1].clone();
                args[1] = args[2].clone();
                args.pop();
            }
        }

        Op::Csrrs => {
            if reg(inst, 2) == Reg::X0 {
                match csr(inst, 1) {
                    Csr::Fcsr => {
                        op = "frcsr".into();
                        args.truncate(1);
                    }
                    Csr::Fflags => {
                        op = "frflags".into();
                        args.truncate(1);
                    }
                    Csr::Frm => {
                        op = "frrm".into();
                        args.truncate(1);
                    }
                    // rdcycleh, rdinstreth and rdtimeh are RV32-only
                    // counterparts and do not exist here.
                    Csr::Cycle => {
                        op = "rdcycle".into();
                        args.truncate(1);
                    }
                    Csr::Instret => {
                        op = "rdinstret".into();
                        args.truncate(1);
                    }
                    Csr::Time => {
                        op = "rdtime".into();
                        args.truncate(1);
                    }
                    _ => {
                        op = "csrr".into();
                        args.pop();
                    }
                }
            } else if reg(inst, 0) == Reg::X0 {
                op = "csrs".into();
                args[0] = args[1].clone();
                args[1] = args[2].clone();
                args.pop();
            }
        }

        Op::Csrrsi => {
            if reg(inst, 0) == Reg::X0 {
                op = "csrs".into();
                args[0] = args[1].clone();
                args[1] = args[2].clone();
                args.pop();
            }
        }

        Op::Csrrw => match csr(inst, 1) {
            Csr::Fcsr => {
                op = "fscsr".into();
                args[1] = args[2].clone();
                args.pop();
            }
            Csr::Fflags => {
                op = "fsflags".into();
                args[1] = args[2].clone();
                args.pop();
            }
            Csr::Frm => {
                op = "fsrm".into();
                args[1] = args[2].clone();
                args.pop();
            }
            _ => {
                if reg(inst, 0) == Reg::X0 {
                    op = "csrw".into();
                    args[0] = args[1].clone();
                    args[1] = args[2].clone();
                    args.pop();
                }
            }
        },

        Op::Csrrwi => {
            if reg(inst, 0) == Reg::X0 {
                op = "csrw".into();
                args[0] = args[1].clone();
                args[1] = args[2].clone();
                args.pop();
            }
        }

        // When both pred and succ are iorw, objdump omits them.
        Op::Fence => {
            if args[0] == "iorw" && args[1] == "iorw" {
                args.clear();
            }
        }

        Op::FsgnjxD => {
            if reg(inst, 1) == reg(inst, 2) {
                op = "fabs.d".into();
                args.pop();
            }
        }

        Op::FsgnjxS => {
            if reg(inst, 1) == reg(inst, 2) {
                op = "fabs.s".into();
                args.pop();
            }
        }

        Op::FsgnjD => {
            if reg(inst, 1) == reg(inst, 2) {
                op = "fmv.d".into();
                args.pop();
            }
        }

        Op::FsgnjS => {
            if reg(inst, 1) == reg(inst, 2) {
                op = "fmv.s".into();
                args.pop();
            }
        }

        Op::FsgnjnD => {
            if reg(inst, 1) == reg(inst, 2) {
                op = "fneg.d".into();
                args.pop();
            }
        }

        Op::FsgnjnS => {
            if reg(inst, 1) == reg(inst, 2) {
                op = "fneg.s".into();
                args.pop();
            }
        }

        Op::Jal => {
            if reg(inst, 0) == Reg::X0 {
                op = "j".into();
                args[0] = args[1].clone();
                args.pop();
            } else if reg(inst, 0) == Reg::X1 {
                // Mnemonic stays jal; the x1 destination is implied.
                args[0] = args[1].clone();
                args.pop();
            }
        }

        Op::Jalr => {
            let ro = reg_offset(inst, 1);
            if reg(inst, 0) == Reg::X0 && ro.offset.0 == 0 {
                if ro.base == Reg::X1 {
                    op = "ret".into();
                    args.clear();
                } else {
                    op = "jr".into();
                    args[0] = ro.base.to_string();
                    args.pop();
                }
            }
        }

        Op::Sltiu => {
            if simm(inst, 2).0 == 1 {
                op = "seqz".into();
                args.pop();
            }
        }

        Op::Slt => {
            if reg(inst, 1) == Reg::X0 {
                op = "sgtz".into();
                args[1] = args[2].clone();
                args.pop();
            } else if reg(inst, 2) == Reg::X0 {
                op = "sltz".into();
                args.pop();
            }
        }

        Op::Sltu => {
            if reg(inst, 1) == Reg::X0 {
                op = "snez".into();
                args[1] = args[2].clone();
                args.pop();
            }
        }

        Op::Sub => {
            if reg(inst, 1) == Reg::X0 {
                op = "neg".into();
                args[1] = args[2].clone();
                args.pop();
            }
        }

        Op::Subw => {
            if reg(inst, 1) == Reg::X0 {
                op = "negw".into();
                args[1] = args[2].clone();
                args.pop();
            }
        }

        _ => {}
    }

    if args.is_empty() {
        op
    } else {
        format!("{} {}", op, args.join(","))
    }
}

/// Base spelling for immediate-form opcodes; `None` for everything else.
fn collapse_imm(op: Op) -> Option<Op> {
    Some(match op {
        Op::Addi => Op::Add,
        Op::Addiw => Op::Addw,
        Op::Andi => Op::And,
        Op::Csrrci => Op::Csrrc,
        Op::Csrrsi => Op::Csrrs,
        Op::Csrrwi => Op::Csrrw,
        Op::Ori => Op::Or,
        Op::Slli => Op::Sll,
        Op::Slliw => Op::Sllw,
        Op::Srai => Op::Sra,
        Op::Sraiw => Op::Sraw,
        Op::Srli => Op::Srl,
        Op::Srliw => Op::Srlw,
        Op::Xori => Op::Xor,
        _ => return None,
    })
}

// Operand accessors. Each opcode fixes the variant in every slot, so a
// mismatch means the decoder broke its contract; panic with the opcode and
// slot rather than emit a wrong operand.

fn arg(inst: &Inst, i: usize) -> &Arg {
    match inst.args[i] {
        Some(ref a) => a,
        None => panic!("{}: operand {i} is absent", inst.op),
    }
}

fn reg(inst: &Inst, i: usize) -> Reg {
    match arg(inst, i) {
        Arg::Reg(r) => *r,
        other => panic!("{}: operand {i} is {other:?}, expected a register", inst.op),
    }
}

fn simm(inst: &Inst, i: usize) -> Simm {
    match arg(inst, i) {
        Arg::Simm(s) => *s,
        other => panic!(
            "{}: operand {i} is {other:?}, expected an immediate",
            inst.op
        ),
    }
}

fn csr(inst: &Inst, i: usize) -> Csr {
    match arg(inst, i) {
        Arg::Csr(c) => *c,
        other => panic!("{}: operand {i} is {other:?}, expected a csr", inst.op),
    }
}

fn reg_offset(inst: &Inst, i: usize) -> RegOffset {
    match arg(inst, i) {
        Arg::RegOffset(ro) => *ro,
        other => panic!(
            "{}: operand {i} is {other:?}, expected a register+offset",
            inst.op
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_covers_exactly_the_imm_forms() {
        assert_eq!(collapse_imm(Op::Addi), Some(Op::Add));
        assert_eq!(collapse_imm(Op::Csrrwi), Some(Op::Csrrw));
        assert_eq!(collapse_imm(Op::Sraiw), Some(Op::Sraw));
        assert_eq!(collapse_imm(Op::Slti), None);
        assert_eq!(collapse_imm(Op::Sltiu), None);
        assert_eq!(collapse_imm(Op::Add), None);
    }

    #[test]
    #[should_panic(expected = "expected a register")]
    fn wrong_operand_variant_panics() {
        // addi's first operand must be a register; an immediate there is a
        // broken decoder contract and must not render.
        let inst = Inst::new(
            Op::Addi,
            &[Arg::Simm(Simm(0)), Arg::Simm(Simm(0)), Arg::Simm(Simm(0))],
        )
        .unwrap();
        gnu_syntax(&inst);
    }

    #[test]
    #[should_panic(expected = "operand 2 is absent")]
    fn missing_operand_panics() {
        // addi's alias condition reads the immediate slot, which is empty.
        let inst = Inst::new(Op::Addi, &[Arg::Reg(Reg::X5), Arg::Reg(Reg::X6)]).unwrap();
        gnu_syntax(&inst);
    }
}
