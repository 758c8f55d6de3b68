//! # Error Tests
//!
//! Display formats and conversions of traps and fatal errors.

use rv32sim_core::common::{AccessType, ConfigError, MemoryError, SimError, Trap};

#[test]
fn test_trap_display() {
    assert_eq!(
        Trap::IllegalInstruction(0x0000_7013).to_string(),
        "IllegalInstruction(0x00007013)"
    );
    assert_eq!(
        Trap::MisalignedAccess {
            access: AccessType::Read,
            addr: 0x1_0001
        }
        .to_string(),
        "MisalignedAccess(load @ 0x00010001)"
    );
    assert_eq!(
        Trap::InaccessibleMemory {
            access: AccessType::Fetch,
            addr: 0x4000_0000
        }
        .to_string(),
        "InaccessibleMemory(fetch @ 0x40000000)"
    );
    assert_eq!(Trap::InvalidRegister(0x7C0).to_string(), "InvalidRegister(0x7c0)");
}

#[test]
fn test_trap_from_memory_keeps_address() {
    let unmapped = MemoryError::Unmapped(0x2_0000);
    assert_eq!(
        Trap::from_memory(AccessType::Write, &unmapped),
        Trap::InaccessibleMemory {
            access: AccessType::Write,
            addr: 0x2_0000
        }
    );

    let denied = MemoryError::AccessDenied {
        region: "ROM".to_string(),
        addr: 0x10,
    };
    assert_eq!(denied.addr(), 0x10);
    assert_eq!(
        Trap::from_memory(AccessType::Write, &denied),
        Trap::InaccessibleMemory {
            access: AccessType::Write,
            addr: 0x10
        }
    );
}

#[test]
fn test_trap_kinds_are_distinct() {
    let kinds = [
        Trap::IllegalInstruction(0).kind(),
        Trap::MisalignedAccess {
            access: AccessType::Read,
            addr: 0,
        }
        .kind(),
        Trap::InaccessibleMemory {
            access: AccessType::Read,
            addr: 0,
        }
        .kind(),
        Trap::InvalidRegister(0).kind(),
    ];
    for (i, a) in kinds.iter().enumerate() {
        for b in &kinds[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_access_type_classification() {
    assert!(AccessType::Fetch.is_load());
    assert!(AccessType::Read.is_load());
    assert!(!AccessType::Write.is_load());
}

#[test]
fn test_sim_error_messages() {
    let err = SimError::InvalidInstructionEncoding {
        pc: 0x40,
        inst: 0x0000_0001,
    };
    let msg = err.to_string();
    assert!(msg.contains("0x00000001"));
    assert!(msg.contains("0x00000040"));

    let err = SimError::ImageTooLarge {
        addr: 0,
        len: 70_000,
        available: 65_536,
    };
    assert!(err.to_string().contains("70000"));

    let err: SimError = ConfigError::MisalignedUart(0x8000_0001).into();
    assert!(matches!(err, SimError::Config(ConfigError::MisalignedUart(_))));
    assert_eq!(err.to_string(), "UART base 0x80000001 is not 2-byte aligned");
}
