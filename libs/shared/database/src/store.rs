use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use shared_models::appointment::{Appointment, AppointmentStatus};
use shared_models::auth::User;
use shared_models::disease::{ConditionMatch, SymptomRecord};
use shared_models::doctor::{Doctor, Specialty};
use shared_models::medicine::Medicine;
use shared_models::EntityId;

use crate::ids::IdGenerator;
use crate::seed;

/// Fields of an appointment before the store assigns id, status and timestamp.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub user_id: EntityId,
    pub doctor_id: EntityId,
    pub date: String,
    pub time: String,
}

/// Process-lifetime application data. Nothing here survives a restart.
///
/// Each mutable collection sits behind its own lock so a write to one never
/// waits on another. The catalogue tables are fixed at construction.
#[derive(Debug)]
pub struct MemoryStore {
    ids: IdGenerator,
    users: RwLock<Vec<User>>,
    symptom_records: RwLock<Vec<SymptomRecord>>,
    appointments: RwLock<Vec<Appointment>>,
    doctors: Vec<Doctor>,
    medicines: HashMap<String, Medicine>,
    specialties: Vec<Specialty>,
    symptom_table: HashMap<String, ConditionMatch>,
}

impl MemoryStore {
    pub fn new(
        doctors: Vec<Doctor>,
        medicines: HashMap<String, Medicine>,
        specialties: Vec<Specialty>,
        symptom_table: HashMap<String, ConditionMatch>,
    ) -> Self {
        Self {
            ids: IdGenerator::new(),
            users: RwLock::new(Vec::new()),
            symptom_records: RwLock::new(Vec::new()),
            appointments: RwLock::new(Vec::new()),
            doctors,
            medicines: medicines
                .into_iter()
                .map(|(name, medicine)| (name.to_lowercase(), medicine))
                .collect(),
            specialties,
            symptom_table,
        }
    }

    pub fn seeded() -> Self {
        Self::new(
            seed::doctors(),
            seed::medicines(),
            seed::specialties(),
            seed::symptom_table(),
        )
    }

    // Users

    pub async fn insert_user(&self, email: String, name: String) -> User {
        let user = User {
            id: self.ids.next_id(),
            email,
            name,
            created_at: Utc::now(),
        };

        self.users.write().await.push(user.clone());
        debug!("Stored user {}", user.id);
        user
    }

    /// First registration wins when an email was registered more than once.
    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned()
    }

    pub async fn users_len(&self) -> usize {
        self.users.read().await.len()
    }

    // Symptom records

    pub async fn insert_symptom_record(
        &self,
        symptoms: Vec<String>,
        analysis: ConditionMatch,
    ) -> SymptomRecord {
        let record = SymptomRecord {
            id: self.ids.next_id(),
            symptoms,
            analysis,
            created_at: Utc::now(),
        };

        self.symptom_records.write().await.push(record.clone());
        debug!("Stored symptom record {}", record.id);
        record
    }

    pub async fn symptom_records_len(&self) -> usize {
        self.symptom_records.read().await.len()
    }

    // Appointments

    pub async fn insert_appointment(&self, new: NewAppointment) -> Appointment {
        let appointment = Appointment {
            id: self.ids.next_id(),
            user_id: new.user_id,
            doctor_id: new.doctor_id,
            date: new.date,
            time: new.time,
            status: AppointmentStatus::Confirmed,
            created_at: Utc::now(),
        };

        self.appointments.write().await.push(appointment.clone());
        debug!("Stored appointment {}", appointment.id);
        appointment
    }

    pub async fn appointments_for_user(&self, user_id: EntityId) -> Vec<Appointment> {
        self.appointments
            .read()
            .await
            .iter()
            .filter(|appointment| appointment.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn appointments_len(&self) -> usize {
        self.appointments.read().await.len()
    }

    // Catalogue

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn find_doctor(&self, id: EntityId) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == id)
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn find_medicine(&self, name: &str) -> Option<&Medicine> {
        self.medicines.get(&name.to_lowercase())
    }

    pub fn lookup_symptoms(&self, key: &str) -> Option<&ConditionMatch> {
        self.symptom_table.get(key)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}
