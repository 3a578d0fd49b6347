// Fixed catalogue loaded into every new store.

use std::collections::HashMap;

use shared_models::disease::ConditionMatch;
use shared_models::doctor::{Doctor, Specialty};
use shared_models::medicine::Medicine;

pub fn doctors() -> Vec<Doctor> {
    vec![
        Doctor::new(1, "Dr. Raj Kumar", "Cardiology", 500),
        Doctor::new(2, "Dr. Priya Singh", "Neurology", 400),
        Doctor::new(3, "Dr. Arun Patel", "Gastroenterology", 350),
    ]
}

/// Keyed by lowercase medicine name.
pub fn medicines() -> HashMap<String, Medicine> {
    HashMap::from([
        ("paracetamol".to_string(), Medicine::new("Crocin", 120, "Dolo")),
        ("ibuprofen".to_string(), Medicine::new("Brufen", 150, "Combiflam")),
        ("amoxicillin".to_string(), Medicine::new("Amoxycare", 250, "Moxikind")),
    ])
}

pub fn specialties() -> Vec<Specialty> {
    vec![
        Specialty::new("Cardiology", "Heart", &["chest pain", "high bp"]),
        Specialty::new("Neurology", "Brain", &["headache", "migraine"]),
        Specialty::new("Pulmonology", "Lungs", &["cough", "asthma"]),
    ]
}

/// Exact comma-joined symptom keys. Order inside a key matters.
pub fn symptom_table() -> HashMap<String, ConditionMatch> {
    HashMap::from([
        ("fever,cough".to_string(), ConditionMatch::new("Cold/Flu", "medium", &[1, 2])),
        ("chest pain".to_string(), ConditionMatch::new("Cardiac Issue", "high", &[1])),
        ("headache".to_string(), ConditionMatch::new("Tension Headache", "low", &[2])),
    ])
}
