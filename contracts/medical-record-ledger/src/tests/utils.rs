#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::{DoctorInfo, LedgerLimits, MedicalRecordLedger, MedicalRecordLedgerClient, PatientInfo};

pub struct TestContext {
    pub env: Env,
    pub client: MedicalRecordLedgerClient<'static>,
    pub admin: Address,
}

impl TestContext {
    pub fn text(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    pub fn register_doctor(&self, name: &str) -> Address {
        let doctor = Address::generate(&self.env);
        self.client
            .register_doctor(&self.admin, &doctor, &doctor_info(&self.env, name));
        doctor
    }

    pub fn register_patient(&self) -> Address {
        let patient = Address::generate(&self.env);
        self.client
            .register_patient(&self.admin, &patient, &patient_info(&self.env));
        patient
    }

    /// Registers a patient and a doctor and authorizes the doctor.
    pub fn linked_pair(&self) -> (Address, Address) {
        let patient = self.register_patient();
        let doctor = self.register_doctor("Dr. Linked");
        self.client.grant_permission(&patient, &patient, &doctor);
        (patient, doctor)
    }
}

pub fn setup() -> TestContext {
    setup_with_limits(None)
}

pub fn setup_with_limits(limits: Option<LedgerLimits>) -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MedicalRecordLedger, ());
    let client = MedicalRecordLedgerClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.initialize(&admin, &limits);

    TestContext { env, client, admin }
}

/// Limits with a roomy registry; the other three lists are capped as given.
pub fn small_limits(authorized: u32, per_patient: u32, per_doctor: u32) -> LedgerLimits {
    LedgerLimits {
        max_doctors: 16,
        max_authorized_doctors: authorized,
        max_entries_per_patient: per_patient,
        max_entries_per_doctor: per_doctor,
    }
}

pub fn doctor_info(env: &Env, name: &str) -> DoctorInfo {
    DoctorInfo {
        name: String::from_str(env, name),
        contact: String::from_str(env, "+1-555-0100"),
        experience_years: 12,
        specialty: String::from_str(env, "Cardiology"),
        emergency_available: true,
        available_time: String::from_str(env, "Mon-Fri 09:00-17:00"),
    }
}

pub fn patient_info(env: &Env) -> PatientInfo {
    PatientInfo {
        conditions: String::from_str(env, "Hypertension"),
        medications: String::from_str(env, "Lisinopril 10mg"),
        allergies: String::from_str(env, "Penicillin"),
    }
}
