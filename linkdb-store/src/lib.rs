//! linkdb 存储层
//!
//! 对单张 SQL 表提供 CRUD 数据访问：参数化语句拼装（statement）、
//! 统一服务契约（service）、SQLite 实现与模式内省（sqlite）。
//!
//! 本层的正确性契约是：语句文本 + 参数绑定顺序。
//! 用户提供的值只通过绑定参数进入语句，永远不做字符串插值。

pub mod options;
pub mod service;
pub mod sqlite;
pub mod statement;
pub mod test_support;

pub use options::ConnectOptions;
pub use service::DatabaseService;
pub use sqlite::SqliteStore;
