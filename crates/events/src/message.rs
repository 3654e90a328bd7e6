//! Email rendering for rental notifications.
//!
//! Both messages are sent as `multipart/alternative` with a plain-text body
//! and an HTML body carrying the same information.

use camquest_core::rental::{format_currency, pluralize, rental_days, request_reference};
use camquest_core::types::Timestamp;
use camquest_db::models::camera::Camera;
use camquest_db::models::rental_request::RentalRequest;

/// Brand name used in subjects and footers.
pub const BRAND: &str = "CamQuest";

/// A rendered email ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// `June 1, 2025`
fn format_date(ts: Timestamp) -> String {
    ts.format("%B %-d, %Y").to_string()
}

/// Minimal HTML escaping for values that come from customers or admins.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Facts shared by both messages.
struct Summary {
    reference: String,
    period: String,
    duration: String,
    quantity: String,
    daily_rate: String,
    total: String,
}

impl Summary {
    fn new(rental: &RentalRequest, camera: &Camera) -> Self {
        Self {
            reference: request_reference(rental.id),
            period: format!(
                "{} to {}",
                format_date(rental.start_date),
                format_date(rental.end_date)
            ),
            duration: pluralize(rental_days(rental.start_date, rental.end_date), "day"),
            quantity: pluralize(i64::from(rental.quantity), "unit"),
            daily_rate: format_currency(camera.price_per_day),
            total: format_currency(rental.total_price),
        }
    }
}

/// Admin-facing "new rental request" message.
pub fn admin_notification(rental: &RentalRequest, camera: &Camera) -> RenderedEmail {
    let s = Summary::new(rental, camera);
    let status = rental.status.label();

    let subject = format!("[{BRAND}] New Rental Request: {}", camera.name);

    let text = format!(
        "NEW RENTAL REQUEST\n\
         \n\
         Camera: {camera_name} ({category})\n\
         \n\
         RENTAL DETAILS\n\
         Request ID: {reference}\n\
         Rental Period: {period} ({duration})\n\
         Quantity: {quantity}\n\
         Daily Rate: {rate}\n\
         Total Price: {total}\n\
         Status: {status}\n\
         \n\
         CUSTOMER INFORMATION\n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         \n\
         This is an automated notification from {BRAND} Rental System.\n",
        camera_name = camera.name,
        category = camera.category,
        reference = s.reference,
        period = s.period,
        duration = s.duration,
        quantity = s.quantity,
        rate = s.daily_rate,
        total = s.total,
        name = rental.customer_name,
        email = rental.customer_email,
        phone = rental.customer_phone,
    );

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #3b82f6;">New Rental Request</h2>
  <h3>{camera_name}</h3>
  <p>Category: {category}</p>
  <h3>Rental Details</h3>
  <p><strong>Request ID:</strong> {reference}</p>
  <p><strong>Rental Period:</strong> {period} ({duration})</p>
  <p><strong>Quantity:</strong> {quantity}</p>
  <p><strong>Daily Rate:</strong> {rate}</p>
  <p><strong>Total Price:</strong> {total}</p>
  <p><strong>Status:</strong> {status}</p>
  <h3>Customer Information</h3>
  <p><strong>Name:</strong> {name}</p>
  <p><strong>Email:</strong> {email}</p>
  <p><strong>Phone:</strong> {phone}</p>
  <p style="color: #666; font-size: 12px;">This is an automated notification from {BRAND} Rental System.</p>
</div>"#,
        camera_name = escape_html(&camera.name),
        category = escape_html(&camera.category),
        reference = s.reference,
        period = s.period,
        duration = s.duration,
        quantity = s.quantity,
        rate = s.daily_rate,
        total = s.total,
        name = escape_html(&rental.customer_name),
        email = escape_html(&rental.customer_email),
        phone = escape_html(&rental.customer_phone),
    );

    RenderedEmail {
        subject,
        text,
        html,
    }
}

/// Customer-facing confirmation. `contact_email` is the address customers
/// are told to write to with questions.
pub fn customer_confirmation(
    rental: &RentalRequest,
    camera: &Camera,
    contact_email: &str,
) -> RenderedEmail {
    let s = Summary::new(rental, camera);

    let subject = format!(
        "Your {BRAND} Rental Request - Confirmation #{}",
        s.reference
    );

    let text = format!(
        "{brand_upper} - PROFESSIONAL CAMERA RENTALS\n\
         \n\
         YOUR RENTAL REQUEST HAS BEEN RECEIVED\n\
         Request ID: {reference}\n\
         \n\
         Dear {name},\n\
         \n\
         Thank you for submitting your rental request with {BRAND}. We have received your \
         request and our team will review it shortly. You will receive another notification \
         once your request has been approved.\n\
         \n\
         RENTAL SUMMARY\n\
         Camera: {camera_name} ({category})\n\
         Rental Period: {period}\n\
         Duration: {duration}\n\
         Quantity: {quantity}\n\
         Daily Rate: {rate}\n\
         Total Price: {total}\n\
         \n\
         If you have any questions or need to make changes to your rental request, please \
         contact us at {contact_email}.\n\
         \n\
         Best regards,\n\
         The {BRAND} Team\n",
        brand_upper = BRAND.to_uppercase(),
        reference = s.reference,
        name = rental.customer_name,
        camera_name = camera.name,
        category = camera.category,
        period = s.period,
        duration = s.duration,
        quantity = s.quantity,
        rate = s.daily_rate,
        total = s.total,
    );

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1 style="color: #3b82f6;">{BRAND}</h1>
  <h2>Your Rental Request Has Been Received</h2>
  <p>Request ID: {reference}</p>
  <p>Dear {name},</p>
  <p>Thank you for submitting your rental request with {BRAND}. We have received your request and our team will review it shortly. You will receive another notification once your request has been approved.</p>
  <h3>Rental Summary</h3>
  <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
    <tr><td>Camera:</td><td>{camera_name} ({category})</td></tr>
    <tr><td>Rental Period:</td><td>{period}</td></tr>
    <tr><td>Duration:</td><td>{duration}</td></tr>
    <tr><td>Quantity:</td><td>{quantity}</td></tr>
    <tr><td>Daily Rate:</td><td>{rate}</td></tr>
    <tr><td><strong>Total Price:</strong></td><td><strong>{total}</strong></td></tr>
  </table>
  <p>If you have any questions or need to make changes to your rental request, please contact us at <a href="mailto:{contact}">{contact}</a>.</p>
  <p>Best regards,<br>The {BRAND} Team</p>
</div>"#,
        reference = s.reference,
        name = escape_html(&rental.customer_name),
        camera_name = escape_html(&camera.name),
        category = escape_html(&camera.category),
        period = s.period,
        duration = s.duration,
        quantity = s.quantity,
        rate = s.daily_rate,
        total = s.total,
        contact = escape_html(contact_email),
    );

    RenderedEmail {
        subject,
        text,
        html,
    }
}

#[cfg(test)]
mod tests {
    use camquest_core::rental::RentalStatus;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn camera() -> Camera {
        Camera {
            id: 1,
            name: "Veo Sports Camera".into(),
            description: "Action".into(),
            category: "Sports Camera".into(),
            price_per_day: 35.0,
            total_units: 8,
            available_units: 5,
            specifications: vec![],
            image_url: "https://example.com/veo.jpg".into(),
        }
    }

    fn rental() -> RentalRequest {
        RentalRequest {
            id: 7,
            camera_id: 1,
            customer_name: "Ada <Lovelace>".into(),
            customer_email: "ada@example.com".into(),
            customer_phone: "555-0100".into(),
            start_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 6, 4, 0, 0, 0).unwrap(),
            quantity: 2,
            total_price: 210.0,
            status: RentalStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn admin_subject_names_camera() {
        let email = admin_notification(&rental(), &camera());
        assert_eq!(
            email.subject,
            "[CamQuest] New Rental Request: Veo Sports Camera"
        );
    }

    #[test]
    fn admin_text_has_rental_details() {
        let email = admin_notification(&rental(), &camera());
        assert!(email.text.contains("Request ID: RNT-0007"));
        assert!(email
            .text
            .contains("Rental Period: June 1, 2025 to June 4, 2025 (3 days)"));
        assert!(email.text.contains("Quantity: 2 units"));
        assert!(email.text.contains("Daily Rate: $35.00"));
        assert!(email.text.contains("Total Price: $210.00"));
        assert!(email.text.contains("Status: Pending"));
    }

    #[test]
    fn html_escapes_customer_values() {
        let email = admin_notification(&rental(), &camera());
        assert!(email.html.contains("Ada &lt;Lovelace&gt;"));
        assert!(!email.html.contains("<Lovelace>"));
        // Plain text keeps the raw value.
        assert!(email.text.contains("Name: Ada <Lovelace>"));
    }

    #[test]
    fn customer_subject_carries_reference() {
        let email = customer_confirmation(&rental(), &camera(), "admin@camquest.local");
        assert_eq!(
            email.subject,
            "Your CamQuest Rental Request - Confirmation #RNT-0007"
        );
        assert!(email.text.contains("contact us at admin@camquest.local"));
        assert!(email.text.contains("Duration: 3 days"));
    }

    #[test]
    fn single_day_single_unit_is_singular() {
        let mut r = rental();
        r.quantity = 1;
        r.end_date = r.start_date;
        let email = customer_confirmation(&r, &camera(), "admin@camquest.local");
        assert!(email.text.contains("Duration: 1 day\n"));
        assert!(email.text.contains("Quantity: 1 unit\n"));
    }
}
