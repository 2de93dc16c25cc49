use soroban_sdk::{contracttype, log, panic_with_error, Address, Env, Map, Vec};

use crate::error::LedgerError;
use crate::events;
use crate::guard;
use crate::registry;
use crate::storage;

/// The doctors a patient has authorized.
///
/// `granted` answers membership in constant time and `doctors` keeps grant
/// order for enumeration. Both halves are only changed through
/// [`PermissionRoster::grant`] and [`PermissionRoster::revoke`] and are
/// persisted together as one ledger entry, so a doctor is in `granted`
/// exactly when it appears once in `doctors`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermissionRoster {
    pub granted: Map<Address, bool>,
    pub doctors: Vec<Address>,
}

impl PermissionRoster {
    pub fn new(env: &Env) -> Self {
        PermissionRoster {
            granted: Map::new(env),
            doctors: Vec::new(env),
        }
    }

    pub fn contains(&self, doctor: &Address) -> bool {
        self.granted.get(doctor.clone()).unwrap_or(false)
    }

    pub fn len(&self) -> u32 {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    /// Returns `false` when the doctor was already authorized.
    pub fn grant(&mut self, doctor: &Address) -> bool {
        if self.contains(doctor) {
            return false;
        }
        self.granted.set(doctor.clone(), true);
        self.doctors.push_back(doctor.clone());
        true
    }

    /// Returns `false` when the doctor was not authorized.
    pub fn revoke(&mut self, doctor: &Address) -> bool {
        if !self.contains(doctor) {
            return false;
        }
        self.granted.remove(doctor.clone());
        remove_first(&mut self.doctors, doctor)
    }

    pub fn is_consistent(&self) -> bool {
        if self.granted.len() != self.doctors.len() {
            return false;
        }

        let mut seen: Map<Address, bool> = Map::new(self.doctors.env());
        for doctor in self.doctors.iter() {
            if seen.contains_key(doctor.clone()) {
                return false;
            }
            if !self.granted.get(doctor.clone()).unwrap_or(false) {
                return false;
            }
            seen.set(doctor, true);
        }

        true
    }
}

/// Order-preserving removal of the first occurrence of `target`: every later
/// element moves one slot left and the list shrinks by one.
fn remove_first(list: &mut Vec<Address>, target: &Address) -> bool {
    let len = list.len();

    let mut found = None;
    for i in 0..len {
        if list.get_unchecked(i) == *target {
            found = Some(i);
            break;
        }
    }

    let Some(start) = found else {
        return false;
    };

    for i in start..len - 1 {
        list.set(i, list.get_unchecked(i + 1));
    }
    list.pop_back();

    true
}

fn ensure_consistent(env: &Env, roster: &PermissionRoster) {
    if !roster.is_consistent() {
        panic_with_error!(env, LedgerError::InvariantViolation);
    }
}

pub fn grant_permission(
    env: &Env,
    caller: &Address,
    patient: &Address,
    doctor: &Address,
) -> Result<bool, LedgerError> {
    let config = storage::load_config(env)?;
    guard::require_self_or_administrator(env, caller, patient)?;
    registry::ensure_patient(env, patient)?;
    registry::ensure_doctor(env, doctor)?;

    let mut roster = storage::get_roster(env, patient);
    if roster.contains(doctor) {
        return Ok(false);
    }
    if roster.len() >= config.limits.max_authorized_doctors {
        return Err(LedgerError::CapacityExceeded);
    }

    roster.grant(doctor);
    ensure_consistent(env, &roster);
    storage::set_roster(env, patient, &roster);

    log!(env, "permission granted: patient={}, doctor={}", patient, doctor);
    events::emit_permission_granted(env, patient.clone(), doctor.clone(), caller.clone());

    Ok(true)
}

pub fn revoke_permission(
    env: &Env,
    caller: &Address,
    patient: &Address,
    doctor: &Address,
) -> Result<bool, LedgerError> {
    storage::load_config(env)?;
    guard::require_self_or_administrator(env, caller, patient)?;
    registry::ensure_patient(env, patient)?;

    let mut roster = storage::get_roster(env, patient);
    if !roster.revoke(doctor) {
        return Ok(false);
    }
    ensure_consistent(env, &roster);
    storage::set_roster(env, patient, &roster);

    log!(env, "permission revoked: patient={}, doctor={}", patient, doctor);
    events::emit_permission_revoked(env, patient.clone(), doctor.clone(), caller.clone());

    Ok(true)
}

pub fn get_patient_permissions(
    env: &Env,
    caller: &Address,
    patient: &Address,
) -> Result<Vec<Address>, LedgerError> {
    storage::load_config(env)?;
    guard::require_self_or_authorized_doctor(env, caller, patient)?;
    registry::ensure_patient(env, patient)?;

    Ok(storage::get_roster(env, patient).doctors)
}
