pub mod common;

pub mod a001_project;
pub mod a002_requirement;
pub mod a003_analysis_session;
pub mod a004_design_document;
pub mod a005_test_case;
