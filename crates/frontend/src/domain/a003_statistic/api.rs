use crate::shared::api_utils::get_json;
use crate::shared::config::StatisticsConfig;
use crate::shared::error::AppResult;
use contracts::domain::a003_statistic::{StatisticDefinition, StatisticResult};
use contracts::shared::ListResponse;

pub async fn fetch_definitions(config: &StatisticsConfig) -> AppResult<ListResponse<StatisticDefinition>> {
    get_json(&config.definitions_query).await
}

/// `/Statistics.query?name=&xVar=&yVar=`
pub fn compute_url(config: &StatisticsConfig, stat: &StatisticDefinition) -> String {
    format!(
        "{}?name={}&xVar={}&yVar={}",
        config.compute,
        urlencoding::encode(&stat.name),
        urlencoding::encode(&stat.x_var.uuid),
        urlencoding::encode(&stat.y_var.uuid),
    )
}

pub async fn compute(config: &StatisticsConfig, stat: &StatisticDefinition) -> AppResult<StatisticResult> {
    let body: serde_json::Value = get_json(&compute_url(config, stat)).await?;
    Ok(result_for(stat, body))
}

pub fn result_for(stat: &StatisticDefinition, body: serde_json::Value) -> StatisticResult {
    StatisticResult {
        path: stat.path.clone(),
        name: stat.name.clone(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use contracts::domain::a003_statistic::VariableRef;

    fn definition(path: &str, name: &str) -> StatisticDefinition {
        StatisticDefinition {
            path: path.into(),
            name: name.into(),
            x_var: VariableRef { uuid: "x-1".into() },
            y_var: VariableRef { uuid: "y-2".into() },
        }
    }

    #[test]
    fn test_results_keep_definition_path() {
        let a = result_for(&definition("/Statistics/s1", "Age"), serde_json::Value::Null);
        let b = result_for(&definition("/Statistics/s2", "Age"), serde_json::Value::Null);
        assert_eq!(a.path, "/Statistics/s1");
        assert_ne!(a.path, b.path);
    }

    #[test]
    fn test_compute_url() {
        let config = AppConfig::default().statistics;
        let stat = definition("/Statistics/s1", "Age by sex");
        assert_eq!(
            compute_url(&config, &stat),
            "/Statistics.query?name=Age%20by%20sex&xVar=x-1&yVar=y-2"
        );
    }
}
