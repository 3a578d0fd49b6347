// Markup fragments written into the page containers. Every value that can
// come from a user or the server passes through `escape_html`.

use disease_cell::models::SymptomAnalysis;
use medicine_cell::models::PriceComparison;
use shared_models::appointment::Appointment;
use shared_models::doctor::Doctor;

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn doctor_item(html: &mut String, doctor: &Doctor, fee_label: &str, button_label: &str) {
    html.push_str("<div class=\"doctor-item\">");
    html.push_str(&format!("<h4>{}</h4>", escape_html(&doctor.name)));
    html.push_str(&format!("<p>Specialty: {}</p>", escape_html(&doctor.specialty)));
    html.push_str(&format!("<p>{}: ₹{}</p>", fee_label, doctor.fee));
    html.push_str(&format!(
        "<button onclick=\"bookFromDoctor({})\" class=\"btn btn-primary\">{}</button>",
        doctor.id, button_label
    ));
    html.push_str("</div>");
}

pub fn render_analysis(analysis: &SymptomAnalysis) -> String {
    let symptoms: Vec<String> = analysis.symptoms.iter().map(|s| escape_html(s)).collect();

    let mut html = String::from("<div class=\"result-box\">");
    html.push_str("<h3>Analysis Result</h3>");
    html.push_str(&format!("<p><strong>Symptoms:</strong> {}</p>", symptoms.join(", ")));
    html.push_str(&format!(
        "<p><strong>Possible Condition:</strong> {}</p>",
        escape_html(&analysis.possible_condition)
    ));
    html.push_str(&format!(
        "<p><strong>Severity:</strong> <span class=\"severity\">{}</span></p>",
        escape_html(&analysis.severity)
    ));
    html.push_str("</div>");

    html.push_str("<div class=\"card\"><h3>Recommendations</h3><ul>");
    for recommendation in &analysis.recommendations {
        html.push_str(&format!("<li>✓ {}</li>", escape_html(recommendation)));
    }
    html.push_str("</ul></div>");

    // Unknown doctor ids arrive as empty slots and are skipped.
    let doctors: Vec<&Doctor> = analysis.suggested_doctors.iter().flatten().collect();
    if !doctors.is_empty() {
        html.push_str("<div class=\"card\"><h3>Suggested Doctors</h3>");
        for doctor in doctors {
            doctor_item(&mut html, doctor, "Fee", "Book Appointment");
        }
        html.push_str("</div>");
    }

    html
}

pub fn render_doctor_options(doctors: &[Doctor]) -> String {
    let mut html = String::from("<option value=\"\">Choose a doctor...</option>");
    for doctor in doctors {
        html.push_str(&format!(
            "<option value=\"{}\">{} - {}</option>",
            doctor.id,
            escape_html(&doctor.name),
            escape_html(&doctor.specialty)
        ));
    }
    html
}

/// `specialty` is matched case-insensitively against the cached list.
pub fn render_specialty_doctors(specialty: &str, doctors: &[Doctor]) -> String {
    let mut html = format!(
        "<div class=\"card\"><h3>Available Doctors - {}</h3>",
        escape_html(specialty)
    );
    for doctor in doctors.iter().filter(|d| d.has_specialty(specialty)) {
        doctor_item(&mut html, doctor, "Consultation Fee", "Book Now");
    }
    html.push_str("</div>");
    html
}

pub fn render_price_comparison(medicine: &PriceComparison) -> String {
    let strength = medicine.strength.as_deref().unwrap_or("");

    let mut html = String::from("<div class=\"medicine-card\"><div class=\"medicine-header\">");
    html.push_str(&format!(
        "<h3>{} - {}</h3>",
        escape_html(&medicine.name),
        escape_html(strength)
    ));
    html.push_str(&format!(
        "<span class=\"price-tag\">₹{}</span>",
        medicine.cheapest_option.price
    ));
    html.push_str("</div><div class=\"price-list\">");

    for quote in &medicine.price_comparison {
        let cheapest = quote.platform == medicine.cheapest_option.platform;
        html.push_str(if cheapest {
            "<div class=\"price-item cheapest\">"
        } else {
            "<div class=\"price-item\">"
        });
        html.push_str(&format!(
            "<div class=\"price-item-platform\">{}</div>",
            escape_html(&quote.platform)
        ));
        html.push_str(&format!("<div class=\"price-item-price\">₹{}</div>", quote.price));
        html.push_str(&format!("<div class=\"price-item-discount\">Save {}%</div>", quote.discount));
        html.push_str("<button class=\"btn btn-primary\">Buy Now</button>");
        html.push_str("</div>");
    }

    html.push_str("</div></div>");
    html
}

/// `doctors` is the cached list, used to show names instead of ids.
pub fn render_appointments(appointments: &[Appointment], doctors: &[Doctor]) -> String {
    let mut html = String::from("<div class=\"card\"><h3>Your Appointments</h3>");

    if appointments.is_empty() {
        html.push_str("<p>No appointments booked yet</p>");
    }

    for appointment in appointments {
        let doctor = doctors
            .iter()
            .find(|d| d.id == appointment.doctor_id)
            .map(|d| escape_html(&d.name))
            .unwrap_or_else(|| format!("Doctor #{}", appointment.doctor_id));

        html.push_str(&format!(
            "<p>✓ {} on {} at {} ({})</p>",
            doctor,
            escape_html(&appointment.date),
            escape_html(&appointment.time),
            appointment.status.as_str()
        ));
    }

    html.push_str("</div>");
    html
}
