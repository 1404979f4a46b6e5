pub mod a001_form;
pub mod a002_vocabulary;
pub mod a003_statistic;
pub mod a004_questionnaire;
