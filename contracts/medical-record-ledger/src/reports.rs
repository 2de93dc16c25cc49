use soroban_sdk::{log, Address, Env, String, Vec};

use crate::error::LedgerError;
use crate::events;
use crate::guard;
use crate::registry;
use crate::storage::{self, LedgerLimits, MedicalReport};

/// Both lists touched by a report write, staged in memory. Nothing is
/// persisted until every append has succeeded.
struct ReportWrite {
    reports: Vec<MedicalReport>,
    history: Vec<String>,
}

impl ReportWrite {
    fn stage(
        reports: Vec<MedicalReport>,
        history: Vec<String>,
        report: MedicalReport,
        limits: &LedgerLimits,
    ) -> Result<Self, LedgerError> {
        let mut staged = ReportWrite { reports, history };

        if staged.reports.len() >= limits.max_entries_per_patient {
            return Err(LedgerError::CapacityExceeded);
        }
        let content_hash = report.content_hash.clone();
        staged.reports.push_back(report);

        if staged.history.len() >= limits.max_entries_per_doctor {
            return Err(LedgerError::CapacityExceeded);
        }
        staged.history.push_back(content_hash);

        Ok(staged)
    }
}

pub fn write_report(
    env: &Env,
    doctor: &Address,
    patient: &Address,
    report_number: u64,
    date: String,
    content_hash: String,
) -> Result<(), LedgerError> {
    let config = storage::load_config(env)?;
    guard::require_registered_doctor(env, doctor)?;
    registry::ensure_patient(env, patient)?;

    if date.len() == 0 || content_hash.len() == 0 {
        return Err(LedgerError::InvalidInput);
    }

    let mut doctor_record = registry::load_doctor(env, doctor)?;
    let report = MedicalReport {
        patient: patient.clone(),
        doctor: doctor.clone(),
        report_number,
        date: date.clone(),
        content_hash: content_hash.clone(),
        recorded_at: env.ledger().timestamp(),
    };

    let staged = ReportWrite::stage(
        storage::get_reports(env, patient),
        doctor_record.report_history.clone(),
        report,
        &config.limits,
    )?;

    storage::set_reports(env, patient, &staged.reports);
    doctor_record.report_history = staged.history;
    storage::set_doctor(env, &doctor_record);

    log!(env, "report {} written for {} by {}", report_number, patient, doctor);
    events::emit_medical_report_added(
        env,
        patient.clone(),
        doctor.clone(),
        report_number,
        date,
        content_hash,
    );

    Ok(())
}

pub fn get_medical_reports(
    env: &Env,
    caller: &Address,
    patient: &Address,
) -> Result<Vec<MedicalReport>, LedgerError> {
    storage::load_config(env)?;
    guard::require_self_or_authorized_doctor(env, caller, patient)?;
    registry::ensure_patient(env, patient)?;

    Ok(storage::get_reports(env, patient))
}

pub fn get_report_count(env: &Env, caller: &Address, patient: &Address) -> Result<u32, LedgerError> {
    Ok(get_medical_reports(env, caller, patient)?.len())
}
