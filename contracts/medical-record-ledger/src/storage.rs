use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::error::LedgerError;
use crate::roster::PermissionRoster;

pub const DEFAULT_MAX_DOCTORS: u32 = 200;
pub const DEFAULT_MAX_AUTHORIZED_DOCTORS: u32 = 64;
pub const DEFAULT_MAX_ENTRIES_PER_PATIENT: u32 = 512;
pub const DEFAULT_MAX_ENTRIES_PER_DOCTOR: u32 = 1024;

/// Upper bounds on every list the ledger keeps. Each list is kept in a
/// single ledger entry, so it has to stay within the host's entry size limit.
/// `max_doctors` caps the registry, `max_authorized_doctors` each patient's
/// roster, `max_entries_per_patient` each of a patient's report, history and
/// test result lists, and `max_entries_per_doctor` each of a doctor's report
/// history and active patient lists.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerLimits {
    pub max_doctors: u32,
    pub max_authorized_doctors: u32,
    pub max_entries_per_patient: u32,
    pub max_entries_per_doctor: u32,
}

impl LedgerLimits {
    pub fn standard() -> Self {
        LedgerLimits {
            max_doctors: DEFAULT_MAX_DOCTORS,
            max_authorized_doctors: DEFAULT_MAX_AUTHORIZED_DOCTORS,
            max_entries_per_patient: DEFAULT_MAX_ENTRIES_PER_PATIENT,
            max_entries_per_doctor: DEFAULT_MAX_ENTRIES_PER_DOCTOR,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.max_doctors > 0
            && self.max_authorized_doctors > 0
            && self.max_entries_per_patient > 0
            && self.max_entries_per_doctor > 0
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub admin: Address,
    pub limits: LedgerLimits,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorInfo {
    pub name: String,
    pub contact: String,
    pub experience_years: u32,
    pub specialty: String,
    pub emergency_available: bool,
    pub available_time: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Doctor {
    pub id: Address,
    pub info: DoctorInfo,
    pub active_patients: Vec<Address>,
    pub report_history: Vec<String>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientInfo {
    pub conditions: String,
    pub medications: String,
    pub allergies: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub id: Address,
    pub info: PatientInfo,
    pub medical_history: Vec<String>,
    pub test_results: Vec<String>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicalReport {
    pub patient: Address,
    pub doctor: Address,
    pub report_number: u64,
    pub date: String,
    pub content_hash: String,
    pub recorded_at: u64,
}

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageKey {
    Config,                 // LedgerConfig, written once
    DoctorIds,              // Vec<Address> in registration order
    AuditSequence,          // u64, last emitted audit sequence
    Doctor(Address),        // doctor -> Doctor
    Patient(Address),       // patient -> Patient
    Roster(Address),        // patient -> PermissionRoster
    Reports(Address),       // patient -> Vec<MedicalReport>
}

// Configuration
pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

pub fn load_config(env: &Env) -> Result<LedgerConfig, LedgerError> {
    env.storage()
        .instance()
        .get(&StorageKey::Config)
        .ok_or(LedgerError::NotInitialized)
}

// Doctor storage functions
pub fn get_doctor(env: &Env, doctor: &Address) -> Option<Doctor> {
    env.storage()
        .persistent()
        .get(&StorageKey::Doctor(doctor.clone()))
}

pub fn has_doctor(env: &Env, doctor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&StorageKey::Doctor(doctor.clone()))
}

pub fn set_doctor(env: &Env, doctor: &Doctor) {
    env.storage()
        .persistent()
        .set(&StorageKey::Doctor(doctor.id.clone()), doctor);
}

pub fn get_doctor_ids(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&StorageKey::DoctorIds)
        .unwrap_or(Vec::new(env))
}

pub fn add_doctor_id(env: &Env, doctor: &Address) {
    let mut ids = get_doctor_ids(env);
    ids.push_back(doctor.clone());
    env.storage().persistent().set(&StorageKey::DoctorIds, &ids);
}

// Patient storage functions
pub fn get_patient(env: &Env, patient: &Address) -> Option<Patient> {
    env.storage()
        .persistent()
        .get(&StorageKey::Patient(patient.clone()))
}

pub fn has_patient(env: &Env, patient: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&StorageKey::Patient(patient.clone()))
}

pub fn set_patient(env: &Env, patient: &Patient) {
    env.storage()
        .persistent()
        .set(&StorageKey::Patient(patient.id.clone()), patient);
}

// Roster storage functions
pub fn get_roster(env: &Env, patient: &Address) -> PermissionRoster {
    env.storage()
        .persistent()
        .get(&StorageKey::Roster(patient.clone()))
        .unwrap_or(PermissionRoster::new(env))
}

pub fn set_roster(env: &Env, patient: &Address, roster: &PermissionRoster) {
    env.storage()
        .persistent()
        .set(&StorageKey::Roster(patient.clone()), roster);
}

// Report storage functions
pub fn get_reports(env: &Env, patient: &Address) -> Vec<MedicalReport> {
    env.storage()
        .persistent()
        .get(&StorageKey::Reports(patient.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn set_reports(env: &Env, patient: &Address, reports: &Vec<MedicalReport>) {
    env.storage()
        .persistent()
        .set(&StorageKey::Reports(patient.clone()), reports);
}

// Audit sequence
pub fn get_audit_sequence(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::AuditSequence)
        .unwrap_or(0u64)
}

pub fn next_audit_sequence(env: &Env) -> u64 {
    let next = get_audit_sequence(env) + 1;
    env.storage().instance().set(&StorageKey::AuditSequence, &next);
    next
}
