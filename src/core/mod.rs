pub mod client;
pub mod hierarchy;
pub mod service;

pub use crate::domain::model::{
    Code, Depth, District, DistrictTree, Province, ProvinceTree, SearchResults, Ward,
};
pub use crate::domain::ports::{AddressDirectory, ConfigProvider};
pub use crate::utils::error::Result;
