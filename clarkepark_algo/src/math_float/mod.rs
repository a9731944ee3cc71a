pub mod clarke_transform;
pub mod park_transform;
pub mod trigonometry;
