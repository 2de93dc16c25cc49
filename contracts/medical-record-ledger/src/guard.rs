//! Access predicates. Each `is_*` function only reads state; the matching
//! `require_*` turns a false predicate into [`LedgerError::Unauthorized`] so
//! operations can chain them with `?` before touching storage.

use soroban_sdk::{Address, Env};

use crate::error::LedgerError;
use crate::storage;

pub fn is_administrator(env: &Env, caller: &Address) -> bool {
    match storage::load_config(env) {
        Ok(config) => config.admin == *caller,
        Err(_) => false,
    }
}

pub fn is_registered_doctor(env: &Env, caller: &Address) -> bool {
    storage::has_doctor(env, caller)
}

pub fn is_registered_patient(env: &Env, caller: &Address) -> bool {
    storage::has_patient(env, caller)
}

pub fn is_authorized_doctor(env: &Env, caller: &Address, patient: &Address) -> bool {
    storage::get_roster(env, patient).contains(caller)
}

pub fn is_self_or_authorized_doctor(env: &Env, caller: &Address, patient: &Address) -> bool {
    caller == patient || is_authorized_doctor(env, caller, patient)
}

pub fn is_self_or_administrator(env: &Env, caller: &Address, patient: &Address) -> bool {
    caller == patient || is_administrator(env, caller)
}

fn require(allowed: bool) -> Result<(), LedgerError> {
    if allowed {
        Ok(())
    } else {
        Err(LedgerError::Unauthorized)
    }
}

pub fn require_administrator(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    caller.require_auth();
    require(is_administrator(env, caller))
}

pub fn require_registered_doctor(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    caller.require_auth();
    require(is_registered_doctor(env, caller))
}

/// A registered doctor that the patient currently authorizes.
pub fn require_authorized_doctor(
    env: &Env,
    caller: &Address,
    patient: &Address,
) -> Result<(), LedgerError> {
    caller.require_auth();
    require(is_registered_doctor(env, caller) && is_authorized_doctor(env, caller, patient))
}

pub fn require_self_or_authorized_doctor(
    env: &Env,
    caller: &Address,
    patient: &Address,
) -> Result<(), LedgerError> {
    caller.require_auth();
    require(is_self_or_authorized_doctor(env, caller, patient))
}

pub fn require_self_or_administrator(
    env: &Env,
    caller: &Address,
    patient: &Address,
) -> Result<(), LedgerError> {
    caller.require_auth();
    require(is_self_or_administrator(env, caller, patient))
}
