use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    Unauthorized = 3,

    // Lookup errors
    NotFound = 4,

    // Validation errors
    InvalidInput = 5,
    CapacityExceeded = 6,

    // Internal consistency
    InvariantViolation = 7,
}
