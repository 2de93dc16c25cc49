#![no_std]

mod error;
mod events;
mod guard;
mod registry;
mod reports;
mod roster;
mod storage;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use error::*;
pub use events::*;
pub use roster::PermissionRoster;
pub use storage::{
    Doctor, DoctorInfo, LedgerConfig, LedgerLimits, MedicalReport, Patient, PatientInfo,
};

#[contract]
pub struct MedicalRecordLedger;

#[contractimpl]
impl MedicalRecordLedger {
    /// Initialize the ledger with its administrator. `None` selects the
    /// standard list limits.
    pub fn initialize(
        env: Env,
        admin: Address,
        limits: Option<LedgerLimits>,
    ) -> Result<(), LedgerError> {
        if storage::has_config(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }
        admin.require_auth();

        let limits = limits.unwrap_or(LedgerLimits::standard());
        if !limits.is_valid() {
            return Err(LedgerError::InvalidInput);
        }

        storage::set_config(&env, &LedgerConfig { admin: admin.clone(), limits });
        log!(&env, "ledger initialized, admin={}", admin);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, LedgerError> {
        Ok(storage::load_config(&env)?.admin)
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, LedgerError> {
        storage::load_config(&env)
    }

    /// Number of audit events emitted so far
    pub fn audit_sequence(env: Env) -> u64 {
        storage::get_audit_sequence(&env)
    }

    // Identity registry

    pub fn register_doctor(
        env: Env,
        admin: Address,
        doctor: Address,
        info: DoctorInfo,
    ) -> Result<(), LedgerError> {
        registry::register_doctor(&env, &admin, &doctor, info)
    }

    pub fn register_patient(
        env: Env,
        admin: Address,
        patient: Address,
        info: PatientInfo,
    ) -> Result<(), LedgerError> {
        registry::register_patient(&env, &admin, &patient, info)
    }

    pub fn is_doctor(env: Env, account: Address) -> bool {
        guard::is_registered_doctor(&env, &account)
    }

    pub fn is_patient(env: Env, account: Address) -> bool {
        guard::is_registered_patient(&env, &account)
    }

    pub fn get_doctor_info(env: Env, doctor: Address) -> Result<Doctor, LedgerError> {
        registry::get_doctor_info(&env, &doctor)
    }

    pub fn get_all_doctors(env: Env) -> Result<Vec<Doctor>, LedgerError> {
        registry::get_all_doctors(&env)
    }

    /// Content hashes of every report the calling doctor has written
    pub fn get_doctor_reports_history(env: Env, doctor: Address) -> Result<Vec<String>, LedgerError> {
        registry::get_doctor_reports_history(&env, &doctor)
    }

    pub fn get_active_patients(env: Env, doctor: Address) -> Result<Vec<Address>, LedgerError> {
        registry::get_active_patients(&env, &doctor)
    }

    pub fn assign_active_patient(
        env: Env,
        doctor: Address,
        patient: Address,
    ) -> Result<bool, LedgerError> {
        registry::assign_active_patient(&env, &doctor, &patient)
    }

    // Patient records

    pub fn get_patient_info(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<PatientInfo, LedgerError> {
        registry::get_patient_info(&env, &caller, &patient)
    }

    pub fn get_patient_medical_history(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<Vec<String>, LedgerError> {
        registry::get_patient_medical_history(&env, &caller, &patient)
    }

    pub fn get_patient_test_results(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<Vec<String>, LedgerError> {
        registry::get_patient_test_results(&env, &caller, &patient)
    }

    pub fn add_medical_history(
        env: Env,
        doctor: Address,
        patient: Address,
        reference: String,
    ) -> Result<(), LedgerError> {
        registry::add_medical_history(&env, &doctor, &patient, reference)
    }

    pub fn add_test_result(
        env: Env,
        doctor: Address,
        patient: Address,
        reference: String,
    ) -> Result<(), LedgerError> {
        registry::add_test_result(&env, &doctor, &patient, reference)
    }

    // Permission roster

    /// Authorize `doctor` to read the patient's data. Returns `false` when
    /// the doctor was already authorized.
    pub fn grant_permission(
        env: Env,
        caller: Address,
        patient: Address,
        doctor: Address,
    ) -> Result<bool, LedgerError> {
        roster::grant_permission(&env, &caller, &patient, &doctor)
    }

    /// Withdraw a doctor's authorization. Returns `false` when the doctor was
    /// not authorized.
    pub fn revoke_permission(
        env: Env,
        caller: Address,
        patient: Address,
        doctor: Address,
    ) -> Result<bool, LedgerError> {
        roster::revoke_permission(&env, &caller, &patient, &doctor)
    }

    pub fn get_patient_permissions(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<Vec<Address>, LedgerError> {
        roster::get_patient_permissions(&env, &caller, &patient)
    }

    // Report ledger

    pub fn write_report(
        env: Env,
        doctor: Address,
        patient: Address,
        report_number: u64,
        date: String,
        content_hash: String,
    ) -> Result<(), LedgerError> {
        reports::write_report(&env, &doctor, &patient, report_number, date, content_hash)
    }

    pub fn get_medical_reports(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<Vec<MedicalReport>, LedgerError> {
        reports::get_medical_reports(&env, &caller, &patient)
    }

    pub fn get_report_count(env: Env, caller: Address, patient: Address) -> Result<u32, LedgerError> {
        reports::get_report_count(&env, &caller, &patient)
    }
}
