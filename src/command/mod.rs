pub mod import_dataset;
