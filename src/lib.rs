pub mod csr;
pub mod gnu;
pub mod inst;
pub mod reg;

pub use csr::Csr;
pub use gnu::gnu_syntax;
pub use inst::{Arg, Inst, MemOrder, Op, RegOffset, Simm, TooManyArgs, MAX_ARGS};
pub use reg::{InvalidReg, Reg};
