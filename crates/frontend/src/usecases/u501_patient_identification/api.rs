use crate::shared::api_utils::post_form;
use crate::shared::config::PromsConfig;
use crate::shared::error::{AppError, AppResult};
use contracts::usecases::u501_patient_identification::{
    request::ValidateCredentialsRequest,
    response::{PatientInformation, ValidateCredentialsResponse},
};
use serde_json::Value;

/// Returns the patient's demographics and the visit subject.
pub async fn validate_credentials(
    config: &PromsConfig,
    request: &ValidateCredentialsRequest,
) -> AppResult<(PatientInformation, Value)> {
    let response = post_form(&config.validate_credentials, request).await?;
    let status = response.status();
    let status_text = response.status_text();
    // Failed identifications still carry a JSON body with the reason.
    let body: ValidateCredentialsResponse = match response.json().await {
        Ok(body) => body,
        Err(_) => return Err(AppError::server(status, status_text)),
    };
    if !body.is_success() {
        let reason = body.error.unwrap_or_else(|| status_text.clone());
        log::warn!("Identification rejected: {}", reason);
        return Err(AppError::Rejected(reason));
    }
    Ok((
        body.patient_information.unwrap_or_default(),
        body.session_subject.unwrap_or(Value::Null),
    ))
}
