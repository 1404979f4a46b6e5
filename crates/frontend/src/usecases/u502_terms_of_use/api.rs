use crate::shared::api_utils::{ensure_ok, get_json, post_form};
use crate::shared::config::PromsConfig;
use crate::shared::error::{AppError, AppResult};
use contracts::usecases::u502_terms_of_use::{
    request::{AcceptTermsRequest, TermsConfigurationRequest},
    response::{TermsOfUse, TermsStatusResponse, NO_ACCEPTED_VERSION},
};

fn check_status(response: TermsStatusResponse) -> AppResult<TermsStatusResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(AppError::Rejected(response.error.unwrap_or(response.status)))
    }
}

/// Version the current patient last accepted, `"none"` if never.
pub async fn fetch_accepted_version(config: &PromsConfig) -> AppResult<String> {
    let response: TermsStatusResponse = get_json(&config.terms_status).await?;
    let response = check_status(response)?;
    Ok(response
        .tou_accepted
        .unwrap_or_else(|| NO_ACCEPTED_VERSION.to_string()))
}

pub async fn fetch_terms(config: &PromsConfig) -> AppResult<TermsOfUse> {
    get_json(&config.terms_document).await
}

pub async fn record_acceptance(config: &PromsConfig, version: &str) -> AppResult<()> {
    let body = AcceptTermsRequest {
        tou_accepted: version.to_string(),
    };
    let response = ensure_ok(post_form(&config.terms_status, &body).await?)?;
    let status: TermsStatusResponse = response.json().await?;
    check_status(status)?;
    log::info!("Terms of Use version {} accepted", version);
    Ok(())
}

pub async fn save_configuration(config: &PromsConfig, enabled: bool) -> AppResult<()> {
    let body = TermsConfigurationRequest { enabled };
    ensure_ok(post_form(&config.terms_node, &body).await?)?;
    Ok(())
}
