use assert_matches::assert_matches;
use axum::extract::State;

use disease_cell::handlers::analyze_symptoms;
use disease_cell::models::AnalyzeSymptomsRequest;
use shared_models::error::AppError;
use shared_utils::extractor::ApiJson;
use shared_utils::test_utils::test_state;

fn request(symptoms: &[&str], severity: Option<&str>) -> AnalyzeSymptomsRequest {
    AnalyzeSymptomsRequest {
        symptoms: Some(symptoms.iter().map(|s| s.to_string()).collect()),
        severity: severity.map(str::to_string),
        duration: None,
    }
}

#[tokio::test]
async fn test_chest_pain_is_cardiac() {
    let state = test_state();

    let response = analyze_symptoms(State(state), ApiJson(request(&["chest pain"], None)))
        .await
        .unwrap()
        .0;

    assert!(response.success);
    let analysis = response.analysis;
    assert_eq!(analysis.possible_condition, "Cardiac Issue");
    assert_eq!(analysis.severity, "high");
    assert_eq!(analysis.symptoms, ["chest pain"]);
    assert!(analysis
        .suggested_doctors
        .iter()
        .flatten()
        .any(|doctor| doctor.id == 1));
}

#[tokio::test]
async fn test_unknown_symptom_suggests_every_doctor() {
    let state = test_state();

    let analysis = analyze_symptoms(State(state), ApiJson(request(&["unknown symptom"], None)))
        .await
        .unwrap()
        .0
        .analysis;

    assert_eq!(analysis.possible_condition, "General Health Issue");
    assert_eq!(analysis.severity, "medium");
    let ids: Vec<u64> = analysis.suggested_doctors.iter().flatten().map(|d| d.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn test_recommendations_are_fixed() {
    let state = test_state();

    for symptoms in [&["headache"][..], &["fever", "cough"][..], &["rash"][..]] {
        let analysis = analyze_symptoms(State(state.clone()), ApiJson(request(symptoms, Some("low"))))
            .await
            .unwrap()
            .0
            .analysis;
        assert_eq!(
            analysis.recommendations,
            ["Rest and hydration", "Avoid stress", "Consult a doctor", "Take prescribed medicines"]
        );
    }
    assert_eq!(state.store.symptom_records_len().await, 3);
}

#[tokio::test]
async fn test_empty_symptom_list_falls_back() {
    let state = test_state();

    let analysis = analyze_symptoms(State(state), ApiJson(request(&[], Some("low"))))
        .await
        .unwrap()
        .0
        .analysis;

    assert_eq!(analysis.possible_condition, "General Health Issue");
    assert_eq!(analysis.severity, "low");
}

#[tokio::test]
async fn test_symptoms_are_required() {
    let state = test_state();

    let result = analyze_symptoms(State(state), ApiJson(AnalyzeSymptomsRequest::default())).await;

    assert_matches!(result, Err(AppError::ValidationError(msg)) if msg.contains("symptoms"));
}
