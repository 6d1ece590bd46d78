pub mod a001_department;
pub mod a002_ward_category;
pub mod a003_resource;
pub mod a004_insurance_provider;
pub mod a005_product_tax;
pub mod a006_dosage;
