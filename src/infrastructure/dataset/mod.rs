mod medicine_catalog;

pub use medicine_catalog::MedicineCatalog;
