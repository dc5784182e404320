use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Architectural registers: integer registers X0..X31 followed by the
/// floating-point registers F0..F31. X0 is hard-wired to zero; most
/// pseudo-instruction aliases key on an operand being equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Reg {
    X0 = 0,
    X1,
    X2,
    X3,
    X4,
    X5,
    X6,
    X7,
    X8,
    X9,
    X10,
    X11,
    X12,
    X13,
    X14,
    X15,
    X16,
    X17,
    X18,
    X19,
    X20,
    X21,
    X22,
    X23,
    X24,
    X25,
    X26,
    X27,
    X28,
    X29,
    X30,
    X31,
    F0,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    F25,
    F26,
    F27,
    F28,
    F29,
    F30,
    F31,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid register number {0}")]
pub struct InvalidReg(pub u8);

const REGS: [Reg; 64] = {
    use Reg::*;
    [
        X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, X10, X11, X12, X13, X14, X15, X16, X17, X18, X19,
        X20, X21, X22, X23, X24, X25, X26, X27, X28, X29, X30, X31, F0, F1, F2, F3, F4, F5, F6,
        F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
        F25, F26, F27, F28, F29, F30, F31,
    ]
};

impl Reg {
    /// Integer register `xN`.
    pub fn x(n: u8) -> Result<Self, InvalidReg> {
        if n < 32 {
            Ok(REGS[n as usize])
        } else {
            Err(InvalidReg(n))
        }
    }

    /// Floating-point register `fN`.
    pub fn f(n: u8) -> Result<Self, InvalidReg> {
        if n < 32 {
            Ok(REGS[32 + n as usize])
        } else {
            Err(InvalidReg(n))
        }
    }
}

impl TryFrom<u8> for Reg {
    type Error = InvalidReg;

    fn try_from(n: u8) -> Result<Self, InvalidReg> {
        REGS.get(n as usize).copied().ok_or(InvalidReg(n))
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = *self as u8;
        if n < 32 {
            write!(f, "x{n}")
        } else {
            write!(f, "f{}", n - 32)
        }
    }
}
