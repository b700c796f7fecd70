use chrono::{DateTime, Local};
use gloo_net::http::Request;
use serde::Serialize;
use web_sys::RequestMode;

use super::lead::LeadForm;
use crate::config;
use crate::error::SubmitError;

/// Row appended to the lead sheet.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub sheet_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub time: String,
    pub date: String,
    pub lead_location: String,
}

impl LeadPayload {
    pub fn new(form: &LeadForm, at: DateTime<Local>) -> Self {
        Self {
            sheet_name: config::SHEET_NAME.to_string(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            message: form.message.trim().to_string(),
            time: at.format("%H:%M:%S").to_string(),
            date: at.format("%d/%m/%Y").to_string(),
            lead_location: config::LEAD_LOCATION.to_string(),
        }
    }
}

/// Fire-and-forget POST. The webhook answers opaquely in `no-cors` mode, so
/// a dispatched request counts as delivered.
pub async fn submit_lead(payload: &LeadPayload) -> Result<(), SubmitError> {
    let url = config::get_webhook_url();
    if url.is_empty() {
        return Err(SubmitError::NotConfigured);
    }
    let body = serde_json::to_string(payload)?;

    // text/plain keeps this a simple request; no-cors drops anything else.
    Request::post(url)
        .mode(RequestMode::NoCors)
        .header("Content-Type", "text/plain;charset=utf-8")
        .body(body)
        .send()
        .await?;

    log::info!("lead from {} dispatched", config::LEAD_LOCATION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn payload_uses_sheet_keys() {
        let form = LeadForm {
            name: " Asha ".into(),
            email: "asha@example.com".into(),
            phone: "5550109999".into(),
            message: "Call after 6".into(),
        };
        let at = Local.with_ymd_and_hms(2026, 3, 9, 14, 5, 7).unwrap();
        let json = serde_json::to_value(LeadPayload::new(&form, at)).unwrap();

        assert_eq!(json["sheetName"], config::SHEET_NAME);
        assert_eq!(json["name"], "Asha");
        assert_eq!(json["email"], "asha@example.com");
        assert_eq!(json["phone"], "5550109999");
        assert_eq!(json["message"], "Call after 6");
        assert_eq!(json["time"], "14:05:07");
        assert_eq!(json["date"], "09/03/2026");
        assert_eq!(json["leadLocation"], config::LEAD_LOCATION);
        assert_eq!(json.as_object().unwrap().len(), 8);
    }
}
