mod catalog_test;
mod errors_test;
mod postgres_test;
mod record_test;
