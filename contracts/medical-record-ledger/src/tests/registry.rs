#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address};

use super::utils::{doctor_info, patient_info, setup, setup_with_limits, small_limits};
use crate::{LedgerError, LedgerLimits};

#[test]
fn initialize_twice_fails() {
    let ctx = setup();
    let other = Address::generate(&ctx.env);

    let result = ctx.client.try_initialize(&other, &None);
    assert_eq!(result, Err(Ok(LedgerError::AlreadyInitialized)));
    assert_eq!(ctx.client.get_admin(), ctx.admin);
}

#[test]
fn initialize_rejects_zero_limits() {
    let env = soroban_sdk::Env::default();
    env.mock_all_auths();
    let client = crate::MedicalRecordLedgerClient::new(
        &env,
        &env.register(crate::MedicalRecordLedger, ()),
    );
    let admin = Address::generate(&env);

    let result = client.try_initialize(&admin, &Some(small_limits(0, 1, 1)));
    assert_eq!(result, Err(Ok(LedgerError::InvalidInput)));
    assert_eq!(client.try_get_admin(), Err(Ok(LedgerError::NotInitialized)));
}

#[test]
fn operations_before_initialize_fail() {
    let env = soroban_sdk::Env::default();
    env.mock_all_auths();
    let client = crate::MedicalRecordLedgerClient::new(
        &env,
        &env.register(crate::MedicalRecordLedger, ()),
    );
    let admin = Address::generate(&env);
    let doctor = Address::generate(&env);

    let result = client.try_register_doctor(&admin, &doctor, &doctor_info(&env, "Dr. Early"));
    assert_eq!(result, Err(Ok(LedgerError::NotInitialized)));
    assert_eq!(client.try_get_all_doctors(), Err(Ok(LedgerError::NotInitialized)));
}

#[test]
fn custom_limits_are_stored() {
    let ctx = setup_with_limits(Some(small_limits(2, 3, 4)));
    let config = ctx.client.get_config();

    assert_eq!(config.admin, ctx.admin);
    assert_eq!(config.limits, small_limits(2, 3, 4));
}

#[test]
fn admin_registers_doctor() {
    let ctx = setup();
    let doctor = ctx.register_doctor("Dr. Alice");

    let record = ctx.client.get_doctor_info(&doctor);
    assert_eq!(record.id, doctor);
    assert_eq!(record.info, doctor_info(&ctx.env, "Dr. Alice"));
    assert!(record.active_patients.is_empty());
    assert!(record.report_history.is_empty());
    assert!(ctx.client.is_doctor(&doctor));
    assert!(!ctx.client.is_patient(&doctor));
}

#[test]
fn non_admin_cannot_register() {
    let ctx = setup();
    let intruder = Address::generate(&ctx.env);
    let doctor = Address::generate(&ctx.env);
    let patient = Address::generate(&ctx.env);

    let result = ctx
        .client
        .try_register_doctor(&intruder, &doctor, &doctor_info(&ctx.env, "Dr. Fake"));
    assert_eq!(result, Err(Ok(LedgerError::Unauthorized)));

    let result = ctx
        .client
        .try_register_patient(&intruder, &patient, &patient_info(&ctx.env));
    assert_eq!(result, Err(Ok(LedgerError::Unauthorized)));

    assert!(!ctx.client.is_doctor(&doctor));
    assert!(!ctx.client.is_patient(&patient));
    assert!(ctx.client.get_all_doctors().is_empty());
    assert_eq!(ctx.client.audit_sequence(), 0);
}

#[test]
fn get_all_doctors_in_registration_order() {
    let ctx = setup();
    let first = ctx.register_doctor("Dr. First");
    let second = ctx.register_doctor("Dr. Second");
    let third = ctx.register_doctor("Dr. Third");

    let doctors = ctx.client.get_all_doctors();
    assert_eq!(doctors.len(), 3);
    assert_eq!(doctors.get(0).unwrap().id, first);
    assert_eq!(doctors.get(1).unwrap().id, second);
    assert_eq!(doctors.get(2).unwrap().id, third);
}

#[test]
fn reregistering_doctor_resets_lists_without_duplicating() {
    let ctx = setup();
    let (patient, doctor) = ctx.linked_pair();

    ctx.client.write_report(
        &doctor,
        &patient,
        &1,
        &ctx.text("2024-01-01"),
        &ctx.text("QmFirst"),
    );
    ctx.client.assign_active_patient(&doctor, &patient);

    ctx.client
        .register_doctor(&ctx.admin, &doctor, &doctor_info(&ctx.env, "Dr. Renamed"));

    let record = ctx.client.get_doctor_info(&doctor);
    assert_eq!(record.info.name, ctx.text("Dr. Renamed"));
    assert!(record.report_history.is_empty());
    assert!(record.active_patients.is_empty());
    assert_eq!(ctx.client.get_all_doctors().len(), 1);

    // Reports already on the patient's ledger are untouched.
    assert_eq!(ctx.client.get_medical_reports(&patient, &patient).len(), 1);
}

#[test]
fn reregistering_patient_keeps_roster() {
    let ctx = setup();
    let (patient, doctor) = ctx.linked_pair();
    ctx.client
        .add_test_result(&doctor, &patient, &ctx.text("ipfs://cbc-panel"));

    ctx.client
        .register_patient(&ctx.admin, &patient, &patient_info(&ctx.env));

    assert!(ctx.client.get_patient_test_results(&patient, &patient).is_empty());
    let roster = ctx.client.get_patient_permissions(&patient, &patient);
    assert_eq!(roster, soroban_sdk::vec![&ctx.env, doctor.clone()]);
    assert_eq!(ctx.client.get_patient_info(&doctor, &patient), patient_info(&ctx.env));
}

#[test]
fn unknown_doctor_lookup_fails() {
    let ctx = setup();
    let nobody = Address::generate(&ctx.env);

    assert_eq!(ctx.client.try_get_doctor_info(&nobody), Err(Ok(LedgerError::NotFound)));
}

#[test]
fn history_and_active_patients_are_self_only() {
    let ctx = setup();
    let doctor = ctx.register_doctor("Dr. Owner");
    let patient = ctx.register_patient();

    assert!(ctx.client.get_doctor_reports_history(&doctor).is_empty());
    assert!(ctx.client.get_active_patients(&doctor).is_empty());

    // A caller who is not a registered doctor has no history to read.
    assert_eq!(
        ctx.client.try_get_doctor_reports_history(&patient),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(
        ctx.client.try_get_active_patients(&patient),
        Err(Ok(LedgerError::Unauthorized))
    );
}

#[test]
fn assign_active_patient_requires_authorization() {
    let ctx = setup();
    let patient = ctx.register_patient();
    let doctor = ctx.register_doctor("Dr. Waiting");

    assert_eq!(
        ctx.client.try_assign_active_patient(&doctor, &patient),
        Err(Ok(LedgerError::Unauthorized))
    );

    ctx.client.grant_permission(&patient, &patient, &doctor);
    assert!(ctx.client.assign_active_patient(&doctor, &patient));
    assert!(!ctx.client.assign_active_patient(&doctor, &patient));

    let active = ctx.client.get_active_patients(&doctor);
    assert_eq!(active, soroban_sdk::vec![&ctx.env, patient.clone()]);
}

#[test]
fn doctor_registry_capacity_is_enforced() {
    let ctx = setup_with_limits(Some(LedgerLimits {
        max_doctors: 2,
        ..small_limits(4, 8, 8)
    }));
    let first = ctx.register_doctor("Dr. First");
    let second = ctx.register_doctor("Dr. Second");
    let late = Address::generate(&ctx.env);

    let result = ctx
        .client
        .try_register_doctor(&ctx.admin, &late, &doctor_info(&ctx.env, "Dr. Late"));
    assert_eq!(result, Err(Ok(LedgerError::CapacityExceeded)));
    assert!(!ctx.client.is_doctor(&late));

    // Re-registering a known doctor does not grow the registry.
    ctx.client
        .register_doctor(&ctx.admin, &first, &doctor_info(&ctx.env, "Dr. First, MD"));

    let doctors = ctx.client.get_all_doctors();
    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors.get(0).unwrap().id, first);
    assert_eq!(doctors.get(1).unwrap().id, second);
}

#[test]
fn initialize_rejects_empty_registry() {
    let env = soroban_sdk::Env::default();
    env.mock_all_auths();
    let client = crate::MedicalRecordLedgerClient::new(
        &env,
        &env.register(crate::MedicalRecordLedger, ()),
    );
    let admin = Address::generate(&env);
    let limits = LedgerLimits {
        max_doctors: 0,
        ..small_limits(1, 1, 1)
    };

    assert_eq!(
        client.try_initialize(&admin, &Some(limits)),
        Err(Ok(LedgerError::InvalidInput))
    );
}
