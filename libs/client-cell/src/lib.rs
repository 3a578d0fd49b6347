//! Headless model of the browser client: the API client, the page state
//! machine and the markup each view renders.

pub mod api;
pub mod controller;
pub mod error;
pub mod notifications;
pub mod render;

pub use api::ApiClient;
pub use controller::{AuthForm, BookingForm, Container, Page, RegisterForm, ViewController};
pub use error::ClientError;
pub use notifications::{Notification, NotificationKind, Notifications, NOTIFICATION_TTL};
