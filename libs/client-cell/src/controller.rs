use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, warn};

use appointment_cell::models::BookAppointmentRequest;
use shared_models::auth::User;
use shared_models::doctor::Doctor;
use shared_models::EntityId;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::notifications::{NotificationKind, Notifications};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Auth,
    Dashboard,
    Symptoms,
    Doctors,
    Medicines,
    Appointments,
}

impl Page {
    /// Pages reachable without a logged-in user.
    pub fn is_public(&self) -> bool {
        matches!(self, Page::Auth | Page::Dashboard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Register,
}

/// Named regions whose markup is replaced wholesale on each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    AnalysisResult,
    DoctorsList,
    DoctorSelect,
    PriceComparison,
    AppointmentsList,
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub doctor_id: Option<EntityId>,
    pub date: String,
    pub time: String,
}

pub const LOGIN_REQUIRED: &str = "Please login first";

/// One page-worth of client state. Everything lives in memory, so a new
/// controller always starts logged out on the auth page.
pub struct ViewController {
    api: ApiClient,
    current_user: Option<User>,
    doctors: Vec<Doctor>,
    page: Page,
    auth_form: AuthForm,
    blocking_notice: Option<String>,
    containers: HashMap<Container, String>,
    notifications: Notifications,
    selected_doctor: Option<EntityId>,
    login_email: String,
}

impl ViewController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            current_user: None,
            doctors: Vec::new(),
            page: Page::Auth,
            auth_form: AuthForm::Login,
            blocking_notice: None,
            containers: HashMap::new(),
            notifications: Notifications::new(),
            selected_doctor: None,
            login_email: String::new(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn auth_form(&self) -> AuthForm {
        self.auth_form
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn container(&self, container: Container) -> Option<&str> {
        self.containers.get(&container).map(String::as_str)
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn selected_doctor(&self) -> Option<EntityId> {
        self.selected_doctor
    }

    pub fn login_email(&self) -> &str {
        &self.login_email
    }

    /// Modal notice raised by the navigation guard; reading it dismisses it.
    pub fn take_blocking_notice(&mut self) -> Option<String> {
        self.blocking_notice.take()
    }

    pub fn prune_notifications(&mut self, now: Instant) {
        self.notifications.prune(now);
    }

    fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notifications.push(message, kind);
    }

    fn fail(&mut self, error: ClientError) -> ClientError {
        warn!("Client action failed: {}", error);
        self.notify(error.user_message(), NotificationKind::Error);
        error
    }

    fn invalid(&mut self, message: &str) -> ClientError {
        self.fail(ClientError::Validation(message.to_string()))
    }

    fn render(&mut self, container: Container, html: String) {
        self.containers.insert(container, html);
    }

    // Navigation

    /// Anything but the dashboard needs a user; otherwise the auth page is
    /// shown with a blocking notice.
    pub fn navigate(&mut self, page: Page) -> Page {
        if !self.is_authenticated() && !page.is_public() {
            debug!("Blocked navigation to {:?} while logged out", page);
            self.page = Page::Auth;
            self.blocking_notice = Some(LOGIN_REQUIRED.to_string());
        } else {
            self.page = page;
        }
        self.page
    }

    pub fn toggle_auth_form(&mut self) -> AuthForm {
        self.auth_form = match self.auth_form {
            AuthForm::Login => AuthForm::Register,
            AuthForm::Register => AuthForm::Login,
        };
        self.auth_form
    }

    // Session

    /// Page load: cache the doctor list and fill the booking select.
    pub async fn load_doctors(&mut self) -> Result<(), ClientError> {
        let result = self.api.list_doctors().await;
        let doctors = result.map_err(|e| self.fail(e))?;
        self.render(Container::DoctorSelect, render::render_doctor_options(&doctors));
        self.doctors = doctors;
        Ok(())
    }

    pub async fn register(&mut self, form: RegisterForm) -> Result<(), ClientError> {
        if form.name.is_empty() || form.email.is_empty() || form.password.is_empty() {
            return Err(self.invalid("Please fill all fields"));
        }

        let result = self
            .api
            .register(&form.name, &form.email, &form.password)
            .await;
        let response = result.map_err(|e| self.fail(e))?;

        self.sign_in(response.user, "Registration successful!");
        Ok(())
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ClientError> {
        self.login_email = email.to_string();
        if email.is_empty() || password.is_empty() {
            return Err(self.invalid("Please fill all fields"));
        }

        let result = self.api.login(email, password).await;
        let response = result.map_err(|e| self.fail(e))?;

        self.sign_in(response.user, "Login successful!");
        Ok(())
    }

    fn sign_in(&mut self, user: User, message: &str) {
        debug!("Signed in as user {}", user.id);
        self.current_user = Some(user);
        self.page = Page::Dashboard;
        self.notify(message, NotificationKind::Success);
    }

    pub fn logout(&mut self) {
        self.current_user = None;
        self.page = Page::Auth;
        self.login_email.clear();
        self.notify("Logged out successfully", NotificationKind::Success);
    }

    // Symptoms

    /// Comma-separated free text; blanks between commas are dropped.
    pub fn parse_symptoms(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub async fn analyze_symptoms(
        &mut self,
        input: &str,
        severity: &str,
        duration: &str,
    ) -> Result<(), ClientError> {
        let symptoms = Self::parse_symptoms(input);
        if symptoms.is_empty() {
            return Err(self.invalid("Please enter at least one symptom"));
        }

        let result = self
            .api
            .analyze_symptoms(symptoms, Some(severity), Some(duration))
            .await;
        let analysis = result.map_err(|e| self.fail(e))?;

        self.render(Container::AnalysisResult, render::render_analysis(&analysis));
        Ok(())
    }

    // Doctors

    pub fn select_specialty(&mut self, specialty: &str) {
        let html = render::render_specialty_doctors(specialty, &self.doctors);
        self.render(Container::DoctorsList, html);
    }

    // Medicines

    pub async fn compare_prices(&mut self, name: &str, strength: &str) -> Result<(), ClientError> {
        if name.is_empty() || strength.is_empty() {
            return Err(self.invalid("Please enter medicine name and strength"));
        }

        let result = self.api.compare_prices(name, strength).await;
        let medicine = result.map_err(|e| self.fail(e))?;

        self.render(Container::PriceComparison, render::render_price_comparison(&medicine));
        Ok(())
    }

    // Appointments

    pub fn book_from_doctor(&mut self, doctor_id: EntityId) -> Page {
        let page = self.navigate(Page::Appointments);
        self.selected_doctor = Some(doctor_id);
        page
    }

    /// A form without a doctor falls back to the one picked via
    /// `book_from_doctor`.
    pub async fn book_appointment(&mut self, form: BookingForm) -> Result<(), ClientError> {
        let doctor_id = form.doctor_id.or(self.selected_doctor);
        let (Some(doctor_id), false, false) = (doctor_id, form.date.is_empty(), form.time.is_empty())
        else {
            return Err(self.invalid("Please fill all fields"));
        };

        let Some(user_id) = self.current_user.as_ref().map(|u| u.id) else {
            return Err(self.fail(ClientError::NotAuthenticated));
        };

        let request = BookAppointmentRequest {
            user_id: Some(user_id),
            doctor_id: Some(doctor_id),
            date: Some(form.date),
            time: Some(form.time),
        };

        let result = self.api.book_appointment(&request).await;
        result.map_err(|e| self.fail(e))?;

        self.notify("Appointment booked successfully!", NotificationKind::Success);
        self.load_appointments().await
    }

    pub async fn load_appointments(&mut self) -> Result<(), ClientError> {
        let Some(user_id) = self.current_user.as_ref().map(|u| u.id) else {
            return Err(self.fail(ClientError::NotAuthenticated));
        };

        let result = self.api.list_appointments(user_id).await;
        let appointments = result.map_err(|e| self.fail(e))?;

        let html = render::render_appointments(&appointments, &self.doctors);
        self.render(Container::AppointmentsList, html);
        Ok(())
    }
}
