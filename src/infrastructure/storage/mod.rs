mod s3_image_store;

pub mod s3 {
    pub use super::s3_image_store::*;
}
