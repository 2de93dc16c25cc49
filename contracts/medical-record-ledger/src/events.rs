use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::storage::{self, DoctorInfo, PatientInfo};

// Event topics. The second topic is always the identity the event is about.
pub const DOCTOR_REGISTERED: Symbol = symbol_short!("doc_reg");
pub const PATIENT_REGISTERED: Symbol = symbol_short!("pat_reg");
pub const PERMISSION_GRANTED: Symbol = symbol_short!("granted");
pub const PERMISSION_REVOKED: Symbol = symbol_short!("revoked");
pub const REPORT_ADDED: Symbol = symbol_short!("report");
pub const HISTORY_ADDED: Symbol = symbol_short!("hist_add");
pub const TEST_RESULT_ADDED: Symbol = symbol_short!("test_add");
pub const PATIENT_ASSIGNED: Symbol = symbol_short!("assigned");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorRegisteredEvent {
    pub sequence: u64,
    pub admin: Address,
    pub doctor: Address,
    pub info: DoctorInfo,
    pub reregistered: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub sequence: u64,
    pub admin: Address,
    pub patient: Address,
    pub info: PatientInfo,
    pub reregistered: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermissionChangedEvent {
    pub sequence: u64,
    pub patient: Address,
    pub doctor: Address,
    pub changed_by: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicalReportAddedEvent {
    pub sequence: u64,
    pub patient: Address,
    pub doctor: Address,
    pub report_number: u64,
    pub date: String,
    pub content_hash: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferenceAddedEvent {
    pub sequence: u64,
    pub patient: Address,
    pub doctor: Address,
    pub reference: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActivePatientAssignedEvent {
    pub sequence: u64,
    pub doctor: Address,
    pub patient: Address,
    pub timestamp: u64,
}

pub fn emit_doctor_registered(
    env: &Env,
    admin: Address,
    doctor: Address,
    info: DoctorInfo,
    reregistered: bool,
) {
    let event = DoctorRegisteredEvent {
        sequence: storage::next_audit_sequence(env),
        admin,
        doctor: doctor.clone(),
        info,
        reregistered,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((DOCTOR_REGISTERED, doctor), event);
}

pub fn emit_patient_registered(
    env: &Env,
    admin: Address,
    patient: Address,
    info: PatientInfo,
    reregistered: bool,
) {
    let event = PatientRegisteredEvent {
        sequence: storage::next_audit_sequence(env),
        admin,
        patient: patient.clone(),
        info,
        reregistered,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((PATIENT_REGISTERED, patient), event);
}

pub fn emit_permission_granted(env: &Env, patient: Address, doctor: Address, granted_by: Address) {
    emit_permission_changed(env, PERMISSION_GRANTED, patient, doctor, granted_by);
}

pub fn emit_permission_revoked(env: &Env, patient: Address, doctor: Address, revoked_by: Address) {
    emit_permission_changed(env, PERMISSION_REVOKED, patient, doctor, revoked_by);
}

fn emit_permission_changed(
    env: &Env,
    topic: Symbol,
    patient: Address,
    doctor: Address,
    changed_by: Address,
) {
    let event = PermissionChangedEvent {
        sequence: storage::next_audit_sequence(env),
        patient: patient.clone(),
        doctor,
        changed_by,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((topic, patient), event);
}

pub fn emit_medical_report_added(
    env: &Env,
    patient: Address,
    doctor: Address,
    report_number: u64,
    date: String,
    content_hash: String,
) {
    let event = MedicalReportAddedEvent {
        sequence: storage::next_audit_sequence(env),
        patient: patient.clone(),
        doctor,
        report_number,
        date,
        content_hash,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((REPORT_ADDED, patient), event);
}

pub fn emit_medical_history_added(env: &Env, patient: Address, doctor: Address, reference: String) {
    emit_reference_added(env, HISTORY_ADDED, patient, doctor, reference);
}

pub fn emit_test_result_added(env: &Env, patient: Address, doctor: Address, reference: String) {
    emit_reference_added(env, TEST_RESULT_ADDED, patient, doctor, reference);
}

fn emit_reference_added(
    env: &Env,
    topic: Symbol,
    patient: Address,
    doctor: Address,
    reference: String,
) {
    let event = ReferenceAddedEvent {
        sequence: storage::next_audit_sequence(env),
        patient: patient.clone(),
        doctor,
        reference,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((topic, patient), event);
}

pub fn emit_active_patient_assigned(env: &Env, doctor: Address, patient: Address) {
    let event = ActivePatientAssignedEvent {
        sequence: storage::next_audit_sequence(env),
        doctor: doctor.clone(),
        patient,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((PATIENT_ASSIGNED, doctor), event);
}
