//! RISC-V architecture-specific components.
//!
//! This module contains the architectural state that lives outside the integer register
//! file. It currently holds one piece:
//! 1. **CSRs:** Control and Status Register addresses, field masks and the `CsrFile` table.

/// Control and Status Register (CSR) definitions and access logic.
pub mod csr;
