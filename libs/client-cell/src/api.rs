use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use appointment_cell::models::{
    AppointmentListResponse, BookAppointmentRequest, BookAppointmentResponse,
};
use auth_cell::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use disease_cell::models::{AnalyzeSymptomsRequest, AnalyzeSymptomsResponse, SymptomAnalysis};
use doctor_cell::models::{DoctorListResponse, SpecialtyListResponse};
use medicine_cell::models::{ComparePricesRequest, ComparePricesResponse, PriceComparison};
use monitoring_cell::models::HealthCheckResponse;
use shared_models::appointment::Appointment;
use shared_models::doctor::{Doctor, Specialty};
use shared_models::EntityId;

use crate::error::ClientError;

/// Thin typed wrapper over the JSON endpoints. `base_url` points at the
/// `/api` prefix, e.g. `http://localhost:3000/api`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ClientError> {
        let request = RegisterRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            full_name: Some(full_name.to_string()),
        };
        self.post("/auth/register", &request).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let request = LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };
        self.post("/auth/login", &request).await
    }

    pub async fn analyze_symptoms(
        &self,
        symptoms: Vec<String>,
        severity: Option<&str>,
        duration: Option<&str>,
    ) -> Result<SymptomAnalysis, ClientError> {
        let request = AnalyzeSymptomsRequest {
            symptoms: Some(symptoms),
            severity: severity.map(str::to_string),
            duration: duration.map(|d| Value::String(d.to_string())),
        };
        let response: AnalyzeSymptomsResponse =
            self.post("/disease/analyze-symptoms", &request).await?;
        Ok(response.analysis)
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, ClientError> {
        let response: DoctorListResponse = self.get("/doctors").await?;
        Ok(response.doctors)
    }

    pub async fn specialties(&self) -> Result<Vec<Specialty>, ClientError> {
        let response: SpecialtyListResponse = self.get("/doctors/specialties").await?;
        Ok(response.specialties)
    }

    pub async fn compare_prices(
        &self,
        medicine_name: &str,
        strength: &str,
    ) -> Result<PriceComparison, ClientError> {
        let request = ComparePricesRequest {
            medicine_name: Some(medicine_name.to_string()),
            strength: Some(strength.to_string()),
        };
        let response: ComparePricesResponse = self.post("/medicine/compare-prices", &request).await?;
        Ok(response.medicine)
    }

    pub async fn book_appointment(
        &self,
        request: &BookAppointmentRequest,
    ) -> Result<Appointment, ClientError> {
        let response: BookAppointmentResponse = self.post("/appointments/book", request).await?;
        Ok(response.appointment)
    }

    pub async fn list_appointments(&self, user_id: EntityId) -> Result<Vec<Appointment>, ClientError> {
        let response: AppointmentListResponse =
            self.get(&format!("/appointments?userId={}", user_id)).await?;
        Ok(response.appointments)
    }

    pub async fn health(&self) -> Result<HealthCheckResponse, ClientError> {
        self.get("/health").await
    }
}
