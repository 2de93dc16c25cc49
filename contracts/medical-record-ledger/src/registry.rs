use soroban_sdk::{log, Address, Env, String, Vec};

use crate::error::LedgerError;
use crate::events;
use crate::guard;
use crate::storage::{self, Doctor, DoctorInfo, Patient, PatientInfo};

pub fn load_doctor(env: &Env, doctor: &Address) -> Result<Doctor, LedgerError> {
    storage::get_doctor(env, doctor).ok_or(LedgerError::NotFound)
}

pub fn load_patient(env: &Env, patient: &Address) -> Result<Patient, LedgerError> {
    storage::get_patient(env, patient).ok_or(LedgerError::NotFound)
}

pub fn ensure_doctor(env: &Env, doctor: &Address) -> Result<(), LedgerError> {
    if storage::has_doctor(env, doctor) {
        Ok(())
    } else {
        Err(LedgerError::NotFound)
    }
}

pub fn ensure_patient(env: &Env, patient: &Address) -> Result<(), LedgerError> {
    if storage::has_patient(env, patient) {
        Ok(())
    } else {
        Err(LedgerError::NotFound)
    }
}

/// Creates the doctor, or resets an existing one: re-registration replaces
/// the info and clears active patients and report history. Only new doctors
/// count against `max_doctors`.
pub fn register_doctor(
    env: &Env,
    admin: &Address,
    doctor: &Address,
    info: DoctorInfo,
) -> Result<(), LedgerError> {
    let config = storage::load_config(env)?;
    guard::require_administrator(env, admin)?;

    let reregistered = storage::has_doctor(env, doctor);
    if !reregistered && storage::get_doctor_ids(env).len() >= config.limits.max_doctors {
        return Err(LedgerError::CapacityExceeded);
    }

    let record = Doctor {
        id: doctor.clone(),
        info: info.clone(),
        active_patients: Vec::new(env),
        report_history: Vec::new(env),
    };
    storage::set_doctor(env, &record);
    if !reregistered {
        storage::add_doctor_id(env, doctor);
    }

    log!(env, "doctor registered: {}, reregistered={}", doctor, reregistered);
    events::emit_doctor_registered(env, admin.clone(), doctor.clone(), info, reregistered);

    Ok(())
}

/// Creates the patient, or resets an existing one's info and clinical
/// references. The permission roster lives in its own entry and is kept.
pub fn register_patient(
    env: &Env,
    admin: &Address,
    patient: &Address,
    info: PatientInfo,
) -> Result<(), LedgerError> {
    storage::load_config(env)?;
    guard::require_administrator(env, admin)?;

    let reregistered = storage::has_patient(env, patient);
    let record = Patient {
        id: patient.clone(),
        info: info.clone(),
        medical_history: Vec::new(env),
        test_results: Vec::new(env),
    };
    storage::set_patient(env, &record);

    log!(env, "patient registered: {}, reregistered={}", patient, reregistered);
    events::emit_patient_registered(env, admin.clone(), patient.clone(), info, reregistered);

    Ok(())
}

pub fn get_doctor_info(env: &Env, doctor: &Address) -> Result<Doctor, LedgerError> {
    storage::load_config(env)?;
    load_doctor(env, doctor)
}

pub fn get_all_doctors(env: &Env) -> Result<Vec<Doctor>, LedgerError> {
    storage::load_config(env)?;

    let mut doctors = Vec::new(env);
    for id in storage::get_doctor_ids(env).iter() {
        if let Some(doctor) = storage::get_doctor(env, &id) {
            doctors.push_back(doctor);
        }
    }
    Ok(doctors)
}

pub fn get_doctor_reports_history(env: &Env, doctor: &Address) -> Result<Vec<String>, LedgerError> {
    storage::load_config(env)?;
    guard::require_registered_doctor(env, doctor)?;
    Ok(load_doctor(env, doctor)?.report_history)
}

pub fn get_active_patients(env: &Env, doctor: &Address) -> Result<Vec<Address>, LedgerError> {
    storage::load_config(env)?;
    guard::require_registered_doctor(env, doctor)?;
    Ok(load_doctor(env, doctor)?.active_patients)
}

/// Adds the patient to the doctor's active list. Returns `false` when the
/// patient was already listed.
pub fn assign_active_patient(
    env: &Env,
    doctor: &Address,
    patient: &Address,
) -> Result<bool, LedgerError> {
    let config = storage::load_config(env)?;
    guard::require_authorized_doctor(env, doctor, patient)?;
    ensure_patient(env, patient)?;

    let mut record = load_doctor(env, doctor)?;
    if record.active_patients.contains(patient) {
        return Ok(false);
    }
    if record.active_patients.len() >= config.limits.max_entries_per_doctor {
        return Err(LedgerError::CapacityExceeded);
    }

    record.active_patients.push_back(patient.clone());
    storage::set_doctor(env, &record);

    events::emit_active_patient_assigned(env, doctor.clone(), patient.clone());

    Ok(true)
}

#[derive(Clone, Copy)]
enum ClinicalList {
    MedicalHistory,
    TestResults,
}

fn append_clinical_reference(
    env: &Env,
    doctor: &Address,
    patient: &Address,
    reference: String,
    list: ClinicalList,
) -> Result<(), LedgerError> {
    let config = storage::load_config(env)?;
    guard::require_authorized_doctor(env, doctor, patient)?;
    if reference.len() == 0 {
        return Err(LedgerError::InvalidInput);
    }

    let mut record = load_patient(env, patient)?;
    let entries = match list {
        ClinicalList::MedicalHistory => &mut record.medical_history,
        ClinicalList::TestResults => &mut record.test_results,
    };
    if entries.len() >= config.limits.max_entries_per_patient {
        return Err(LedgerError::CapacityExceeded);
    }
    entries.push_back(reference.clone());
    storage::set_patient(env, &record);

    match list {
        ClinicalList::MedicalHistory => {
            events::emit_medical_history_added(env, patient.clone(), doctor.clone(), reference)
        }
        ClinicalList::TestResults => {
            events::emit_test_result_added(env, patient.clone(), doctor.clone(), reference)
        }
    }

    Ok(())
}

pub fn add_medical_history(
    env: &Env,
    doctor: &Address,
    patient: &Address,
    reference: String,
) -> Result<(), LedgerError> {
    append_clinical_reference(env, doctor, patient, reference, ClinicalList::MedicalHistory)
}

pub fn add_test_result(
    env: &Env,
    doctor: &Address,
    patient: &Address,
    reference: String,
) -> Result<(), LedgerError> {
    append_clinical_reference(env, doctor, patient, reference, ClinicalList::TestResults)
}

/// Loads a patient record after checking the caller is the patient or one of
/// its authorized doctors.
fn read_patient(env: &Env, caller: &Address, patient: &Address) -> Result<Patient, LedgerError> {
    storage::load_config(env)?;
    guard::require_self_or_authorized_doctor(env, caller, patient)?;
    load_patient(env, patient)
}

pub fn get_patient_info(
    env: &Env,
    caller: &Address,
    patient: &Address,
) -> Result<PatientInfo, LedgerError> {
    Ok(read_patient(env, caller, patient)?.info)
}

pub fn get_patient_medical_history(
    env: &Env,
    caller: &Address,
    patient: &Address,
) -> Result<Vec<String>, LedgerError> {
    Ok(read_patient(env, caller, patient)?.medical_history)
}

pub fn get_patient_test_results(
    env: &Env,
    caller: &Address,
    patient: &Address,
) -> Result<Vec<String>, LedgerError> {
    Ok(read_patient(env, caller, patient)?.test_results)
}
