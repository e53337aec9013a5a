//! 集成测试辅助
//!
//! 提供内存库上的现成服务实例（用原型的书签表模式）和
//! 常用的记录构造函数，供 tests/ 下的集成测试复用。

use rusqlite::Connection;

use linkdb_domain::{Record, Result, StoreError, Value};

pub use crate::sqlite::SqliteStore;

/// 原型的书签表：id + title/description/url
pub const LINKS_TABLE_SQL: &str = "CREATE TABLE links (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  title TEXT,
  description TEXT,
  url TEXT
)";

/// 在内存库里建好书签表并构造服务
pub fn new_links_store_in_memory() -> Result<SqliteStore> {
  let conn = open_in_memory()?;
  conn
    .execute_batch(LINKS_TABLE_SQL)
    .map_err(|err| StoreError::store("failed to create the links table", err))?;
  SqliteStore::from_connection(conn, "links")
}

/// 打开一个空的内存库连接
pub fn open_in_memory() -> Result<Connection> {
  Connection::open_in_memory()
    .map_err(|err| StoreError::store("failed to open in-memory database", err))
}

/// 构造一条书签记录（identity 缺失）
pub fn link_record(title: &str, description: &str, url: &str) -> Record<'static> {
  let mut record = Record::new();
  record.set("title", Value::from(title.to_string()));
  record.set("description", Value::from(description.to_string()));
  record.set("url", Value::from(url.to_string()));
  record
}

/// 拿到服务底下的裸连接（测试里用来制造后端故障）
pub fn raw_connection(store: &SqliteStore) -> &Connection {
  store.connection()
}
