use serde::{Deserialize, Serialize};
use std::fmt;

/// Control and status registers, with the architectural CSR address as the
/// discriminant. The floating-point and counter CSRs get dedicated read/write
/// aliases in GNU syntax; everything else renders generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u16)]
pub enum Csr {
    Fflags = 0x001,
    Frm = 0x002,
    Fcsr = 0x003,
    Sstatus = 0x100,
    Sie = 0x104,
    Stvec = 0x105,
    Scounteren = 0x106,
    Sscratch = 0x140,
    Sepc = 0x141,
    Scause = 0x142,
    Stval = 0x143,
    Sip = 0x144,
    Satp = 0x180,
    Mstatus = 0x300,
    Misa = 0x301,
    Medeleg = 0x302,
    Mideleg = 0x303,
    Mie = 0x304,
    Mtvec = 0x305,
    Mcounteren = 0x306,
    Mscratch = 0x340,
    Mepc = 0x341,
    Mcause = 0x342,
    Mtval = 0x343,
    Mip = 0x344,
    Cycle = 0xC00,
    Time = 0xC01,
    Instret = 0xC02,
    Mvendorid = 0xF11,
    Marchid = 0xF12,
    Mimpid = 0xF13,
    Mhartid = 0xF14,
}

impl Csr {
    pub fn address(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            Csr::Fflags => "fflags",
            Csr::Frm => "frm",
            Csr::Fcsr => "fcsr",
            Csr::Sstatus => "sstatus",
            Csr::Sie => "sie",
            Csr::Stvec => "stvec",
            Csr::Scounteren => "scounteren",
            Csr::Sscratch => "sscratch",
            Csr::Sepc => "sepc",
            Csr::Scause => "scause",
            Csr::Stval => "stval",
            Csr::Sip => "sip",
            Csr::Satp => "satp",
            Csr::Mstatus => "mstatus",
            Csr::Misa => "misa",
            Csr::Medeleg => "medeleg",
            Csr::Mideleg => "mideleg",
            Csr::Mie => "mie",
            Csr::Mtvec => "mtvec",
            Csr::Mcounteren => "mcounteren",
            Csr::Mscratch => "mscratch",
            Csr::Mepc => "mepc",
            Csr::Mcause => "mcause",
            Csr::Mtval => "mtval",
            Csr::Mip => "mip",
            Csr::Cycle => "cycle",
            Csr::Time => "time",
            Csr::Instret => "instret",
            Csr::Mvendorid => "mvendorid",
            Csr::Marchid => "marchid",
            Csr::Mimpid => "mimpid",
            Csr::Mhartid => "mhartid",
        }
    }
}

impl fmt::Display for Csr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
