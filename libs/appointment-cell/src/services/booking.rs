use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_database::{AppState, MemoryStore, NewAppointment};
use shared_models::appointment::Appointment;
use shared_models::error::AppError;
use shared_models::EntityId;
use shared_utils::validation::{require, require_text};

use crate::models::BookAppointmentRequest;

/// Books without slot or conflict checks: every complete request is
/// confirmed immediately.
pub struct BookingService {
    store: Arc<MemoryStore>,
}

impl BookingService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    /// Fields are checked in wire order so the error names the first gap.
    pub fn validate(request: BookAppointmentRequest) -> Result<NewAppointment, AppError> {
        Ok(NewAppointment {
            user_id: require(request.user_id, "userId")?,
            doctor_id: require(request.doctor_id, "doctorId")?,
            date: require_text(request.date, "date")?,
            time: require_text(request.time, "time")?,
        })
    }

    pub async fn book(&self, request: BookAppointmentRequest) -> Result<Appointment, AppError> {
        let new = Self::validate(request)?;
        debug!("Booking doctor {} for user {} on {} {}", new.doctor_id, new.user_id, new.date, new.time);

        if self.store.find_doctor(new.doctor_id).is_none() {
            warn!("Booking references unknown doctor {}", new.doctor_id);
        }

        let appointment = self.store.insert_appointment(new).await;
        info!("Appointment {} confirmed", appointment.id);
        Ok(appointment)
    }

    pub async fn list_for_user(&self, user_id: EntityId) -> Vec<Appointment> {
        self.store.appointments_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> BookAppointmentRequest {
        BookAppointmentRequest {
            user_id: Some(1),
            doctor_id: Some(2),
            date: Some("2026-11-02".to_string()),
            time: Some("10:30".to_string()),
        }
    }

    #[test]
    fn validate_accepts_complete_request() {
        let new = BookingService::validate(complete()).unwrap();
        assert_eq!(new.doctor_id, 2);
        assert_eq!(new.time, "10:30");
    }

    #[test]
    fn validate_names_first_missing_field() {
        let request = BookAppointmentRequest {
            doctor_id: None,
            date: None,
            ..complete()
        };

        match BookingService::validate(request) {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Missing required field: doctorId"),
            other => panic!("Expected ValidationError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn blank_time_is_missing() {
        let request = BookAppointmentRequest {
            time: Some(String::new()),
            ..complete()
        };

        assert!(BookingService::validate(request).is_err());
    }
}
