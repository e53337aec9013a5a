//! linkdb 领域模型
//!
//! 本模块包含 linkdb 数据访问层的核心领域模型：记录（Record）、
//! 值（Value）、模式描述符（TableSchema）以及统一错误类型（StoreError）

pub mod data_type;
pub mod error;
pub mod ids;
pub mod record;
pub mod schema;
pub mod value;

pub use data_type::DataType;
pub use error::{Result, StoreError};
pub use ids::RecordId;
pub use record::Record;
pub use schema::{ColumnDef, TableSchema};
pub use value::Value;
