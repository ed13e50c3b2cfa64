pub mod etl;
pub mod normalize;
pub mod transform;

pub use crate::domain::model::{Domain, Gender, NormalizedRecord, RawRecord};
pub use crate::domain::ports::{SourcePort, TargetPort};
pub use crate::utils::error::Result;
