pub mod assembler;
pub mod encoder;

pub mod isa {
    pub mod sap1; // classic five-instruction SAP-1 set
}

pub use assembler::{AsmError, Assembler};
pub use encoder::{Isa, MachineWord};
