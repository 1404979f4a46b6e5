use crate::shared::api_utils::{delete, ensure_ok, get_json, post_empty_json};
use crate::shared::config::VocabulariesConfig;
use crate::shared::error::{AppError, AppResult};
use contracts::domain::a002_vocabulary::{
    LocalVocabulary, RemoteVocabulary, VocabularyActionResponse, VocabularyDescriptor,
};
use contracts::shared::ListResponse;

pub fn remote_url(config: &VocabulariesConfig) -> String {
    match &config.api_key {
        Some(key) if !key.is_empty() => format!("{}&apikey={}", config.remote_list, urlencoding::encode(key)),
        _ => config.remote_list.clone(),
    }
}

/// `<base>&identifier=<acronym>&<param>=<value>...`
pub fn install_url(config: &VocabulariesConfig, acronym: &str) -> String {
    let params: String = config
        .install_params
        .iter()
        .map(|(key, value)| format!("&{}={}", key, urlencoding::encode(value)))
        .collect();
    format!(
        "{}&identifier={}{}",
        config.install_base,
        urlencoding::encode(acronym),
        params
    )
}

pub fn uninstall_url(config: &VocabulariesConfig, acronym: &str) -> String {
    format!("{}{}", config.uninstall_base, urlencoding::encode(acronym))
}

pub async fn fetch_remote(config: &VocabulariesConfig) -> AppResult<Vec<VocabularyDescriptor>> {
    let list: Vec<RemoteVocabulary> = get_json(&remote_url(config)).await?;
    Ok(list.into_iter().map(VocabularyDescriptor::from).collect())
}

/// Installed vocabularies, reshaped like the remote ones.
pub async fn fetch_local(config: &VocabulariesConfig) -> AppResult<Vec<VocabularyDescriptor>> {
    let list: ListResponse<LocalVocabulary> = get_json(&config.local_list).await?;
    Ok(list.rows.into_iter().map(VocabularyDescriptor::from).collect())
}

pub async fn install(config: &VocabulariesConfig, acronym: &str) -> AppResult<()> {
    let response: VocabularyActionResponse = post_empty_json(&install_url(config, acronym)).await?;
    if response.is_successful {
        Ok(())
    } else {
        Err(AppError::Rejected(
            response
                .error
                .unwrap_or_else(|| "The vocabulary could not be installed".to_string()),
        ))
    }
}

pub async fn uninstall(config: &VocabulariesConfig, acronym: &str) -> AppResult<()> {
    let response = delete(&uninstall_url(config, acronym)).await?;
    ensure_ok(response).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    #[test]
    fn test_install_url() {
        let config = AppConfig::default().vocabularies;
        assert_eq!(
            install_url(&config, "HP"),
            "/Vocabularies?action=install&identifier=HP&vocabularySource=bioontology"
        );
        assert_eq!(uninstall_url(&config, "HP"), "/Vocabularies/HP");
    }

    #[test]
    fn test_remote_url_with_key() {
        let mut config = AppConfig::default().vocabularies;
        assert_eq!(remote_url(&config), config.remote_list);
        config.api_key = Some("abc".into());
        assert!(remote_url(&config).ends_with("&apikey=abc"));
    }
}
