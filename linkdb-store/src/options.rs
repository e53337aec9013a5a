//! 连接参数
//!
//! 由外部引导代码（原型里是硬编码的 Main）提供，本层只消费。
//! 嵌入式引擎没有 host/port/用户名/密码，网络侧参数收敛为数据库文件路径。

use std::path::PathBuf;

/// 连接参数
///
/// - `database`: 数据库文件路径
/// - `table`: 要操作的目标表名
///
/// # Examples
///
/// use linkdb_store::ConnectOptions;
///
/// let options = ConnectOptions::new("/tmp/links.db", "links");
/// assert_eq!(options.table, "links");
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
  /// 数据库文件路径
  pub database: PathBuf,
  /// 目标表名
  pub table: String,
}

impl ConnectOptions {
  pub fn new(database: impl Into<PathBuf>, table: impl Into<String>) -> Self {
    Self { database: database.into(), table: table.into() }
  }
}
