mod common;
mod forms_test;
mod health_test;
