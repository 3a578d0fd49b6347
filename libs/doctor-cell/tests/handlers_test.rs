use axum::extract::State;

use doctor_cell::handlers::{list_doctors, list_specialties};
use shared_utils::test_utils::test_state;

#[tokio::test]
async fn test_list_doctors_returns_seed_set() {
    let state = test_state();

    let response = list_doctors(State(state)).await.0;

    assert!(response.success);
    let names: Vec<&str> = response.doctors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Dr. Raj Kumar", "Dr. Priya Singh", "Dr. Arun Patel"]);
    assert_eq!(response.doctors[0].specialty, "Cardiology");
    assert_eq!(response.doctors[0].fee, 500);
    assert_eq!(response.doctors[2].fee, 350);
}

#[tokio::test]
async fn test_doctor_list_is_stable_across_calls() {
    let state = test_state();

    let first = list_doctors(State(state.clone())).await.0;
    let second = list_doctors(State(state)).await.0;

    assert_eq!(first.doctors, second.doctors);
    assert_eq!(second.doctors.len(), 3);
}

#[tokio::test]
async fn test_list_specialties_in_seed_order() {
    let state = test_state();

    let response = list_specialties(State(state)).await.0;

    assert!(response.success);
    let names: Vec<&str> = response.specialties.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Cardiology", "Neurology", "Pulmonology"]);
    assert_eq!(response.specialties[0].icon, "Heart");
    assert_eq!(response.specialties[2].conditions, ["cough", "asthma"]);
}
