pub mod blood_gas;
pub mod bmi;
pub mod crcl;
pub mod dose;
pub mod drip;
pub mod gcs;
pub mod infusion;
pub mod news2;
