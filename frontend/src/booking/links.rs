use urlencoding::encode;

use crate::booking::fields::BookingRequest;

fn detail_lines(req: &BookingRequest, heading: &str) -> String {
    [
        heading.to_string(),
        String::new(),
        format!("Name: {}", req.name),
        format!("Email: {}", req.email),
        format!("Phone: {}", req.phone),
        format!("Service: {}", req.service),
        format!("Date: {}", req.date),
        format!("Time: {}", req.time),
        format!("Message: {}", req.message),
    ]
    .join("\n")
}

pub fn email_subject(req: &BookingRequest) -> String {
    format!("New Booking Request - {}", req.service)
}

pub fn email_body(req: &BookingRequest) -> String {
    detail_lines(req, "New booking request:")
}

pub fn whatsapp_text(req: &BookingRequest) -> String {
    detail_lines(req, "Hi! Booking request:")
}

pub fn mailto_link(recipient: &str, subject: &str, body: &str) -> String {
    format!("mailto:{}?subject={}&body={}", recipient, encode(subject), encode(body))
}

pub fn whatsapp_link(number: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", number, encode(text))
}
