//! Default-path rendering: immediate-suffix collapse and the plain
//! mnemonic + comma-joined operand form.

use pretty_assertions::assert_eq;

use riscv64_rs::{gnu_syntax, Arg, Inst, Op, Reg, RegOffset, Simm};

fn r(reg: Reg) -> Arg {
    Arg::Reg(reg)
}

fn imm(v: i32) -> Arg {
    Arg::Simm(Simm(v))
}

fn render(op: Op, args: &[Arg]) -> String {
    gnu_syntax(&Inst::new(op, args).unwrap())
}

#[test]
fn immediate_suffix_collapse() {
    let ri = [r(Reg::X5), r(Reg::X6), imm(10)];
    assert_eq!(render(Op::Addi, &ri), "add x5,x6,10");
    assert_eq!(render(Op::Andi, &ri), "and x5,x6,10");
    assert_eq!(render(Op::Ori, &ri), "or x5,x6,10");
    assert_eq!(render(Op::Xori, &ri), "xor x5,x6,10");
    assert_eq!(render(Op::Addiw, &ri), "addw x5,x6,10");

    let sh = [r(Reg::X5), r(Reg::X6), imm(3)];
    assert_eq!(render(Op::Slli, &sh), "sll x5,x6,3");
    assert_eq!(render(Op::Srli, &sh), "srl x5,x6,3");
    assert_eq!(render(Op::Srai, &sh), "sra x5,x6,3");
    assert_eq!(render(Op::Slliw, &sh), "sllw x5,x6,3");
    assert_eq!(render(Op::Srliw, &sh), "srlw x5,x6,3");
    assert_eq!(render(Op::Sraiw, &sh), "sraw x5,x6,3");
}

#[test]
fn no_collapse_for_slti() {
    // slti/sltiu keep their spelling; only seqz rewrites sltiu.
    assert_eq!(
        render(Op::Slti, &[r(Reg::X5), r(Reg::X6), imm(10)]),
        "slti x5,x6,10"
    );
}

#[test]
fn plain_register_ops() {
    let rrr = [r(Reg::X5), r(Reg::X6), r(Reg::X7)];
    assert_eq!(render(Op::Add, &rrr), "add x5,x6,x7");
    assert_eq!(render(Op::Mulhsu, &rrr), "mulhsu x5,x6,x7");
    assert_eq!(render(Op::Remuw, &rrr), "remuw x5,x6,x7");
    // sub with a live rs1 never aliases.
    assert_eq!(render(Op::Sub, &rrr), "sub x5,x6,x7");
}

#[test]
fn loads_and_stores() {
    let at = |base, offset| {
        Arg::RegOffset(RegOffset {
            base,
            offset: Simm(offset),
        })
    };
    assert_eq!(render(Op::Ld, &[r(Reg::X5), at(Reg::X2, -8)]), "ld x5,-8(x2)");
    assert_eq!(render(Op::Sd, &[r(Reg::X5), at(Reg::X2, 16)]), "sd x5,16(x2)");
    assert_eq!(render(Op::Lbu, &[r(Reg::X5), at(Reg::X10, 0)]), "lbu x5,0(x10)");
}

#[test]
fn upper_immediates_and_jumps() {
    assert_eq!(render(Op::Lui, &[r(Reg::X5), imm(0xfffff)]), "lui x5,1048575");
    assert_eq!(render(Op::Auipc, &[r(Reg::X5), imm(-1)]), "auipc x5,-1");
}

#[test]
fn no_operand_ops() {
    assert_eq!(render(Op::Ecall, &[]), "ecall");
    assert_eq!(render(Op::Ebreak, &[]), "ebreak");
    assert_eq!(render(Op::FenceI, &[]), "fence.i");
}

#[test]
fn render_is_deterministic() {
    let inst = Inst::new(Op::Addi, &[r(Reg::X5), r(Reg::X6), imm(0)]).unwrap();
    assert_eq!(gnu_syntax(&inst), gnu_syntax(&inst));
    let copy = inst;
    assert_eq!(gnu_syntax(&inst), gnu_syntax(&copy));
}

#[test]
fn json_round_trip_matches_decoder_interface() {
    let inst = Inst::new(Op::Beq, &[r(Reg::X5), r(Reg::X0), imm(12)]).unwrap();
    let json = serde_json::to_string(&inst).unwrap();
    let back: Inst = serde_json::from_str(&json).unwrap();
    assert_eq!(back, inst);
    assert_eq!(gnu_syntax(&back), "beqz x5,12");
}
