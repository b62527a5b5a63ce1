pub mod case_study;
pub mod media;
pub mod profile;
pub mod project;
