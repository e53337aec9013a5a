//! 统一错误类型
//!
//! 所有存储侧操作只暴露一种错误类型 `StoreError`：
//! 底层驱动的失败统一包装进 `Store` 变体（携带操作描述与原始错误），
//! 其余变体表示数据访问层自身的不变量违反。

use std::error::Error as StdError;

use crate::ids::RecordId;
use thiserror::Error;

/// 数据访问层结果别名
pub type Result<T> = std::result::Result<T, StoreError>;

/// 数据访问层错误类型
///
/// 传播策略：每个面向存储的操作要么成功返回，要么以 `StoreError` 失败。
/// 没有部分成功，没有静默重试，也不吞掉存在性探测的失败。
///
/// 线程安全: Send + Sync
#[derive(Error, Debug)]
pub enum StoreError {
  /// 底层存储拒绝了操作（连接失败、约束违反、语法错误等）
  #[error("{message}")]
  Store {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
  },

  /// 记录的 identity 已经被赋值，不允许二次赋值
  #[error("record identity already assigned (current id={current})")]
  IdentityAlreadySet { current: RecordId },

  /// 记录的列里出现了主键列（identity 单独存放，不允许混进列映射）
  #[error("identity column '{name}' must not appear among record values")]
  IdentityColumnInValues { name: String },

  /// 记录里出现了模式中不存在的列
  #[error("column '{name}' does not exist in table schema")]
  UnknownColumn { name: String },

  /// 记录没有任何列，无法生成 INSERT/UPDATE 语句
  #[error("record has no columns")]
  EmptyRecord,

  /// 模式必须至少有一个数据列
  #[error("table '{table}' must have at least one data column")]
  SchemaMustHaveColumns { table: String },

  /// 主键列重复出现在数据列列表里
  #[error("identity column '{name}' is also listed as a data column")]
  IdColumnListedTwice { name: String },
}

impl StoreError {
  /// 包装一个底层存储错误，附带操作描述
  ///
  /// # Examples
  ///
  /// use linkdb_domain::StoreError;
  /// use std::io;
  ///
  /// let err = StoreError::store(
  ///   "an error occurred while retrieving row with id=1",
  ///   io::Error::new(io::ErrorKind::Other, "boom"),
  /// );
  /// assert!(err.to_string().contains("id=1"));
  ///
  pub fn store(message: impl Into<String>, source: impl StdError + Send + Sync + 'static) -> Self {
    StoreError::Store { message: message.into(), source: Some(Box::new(source)) }
  }

  /// 只有描述、没有底层原因的存储错误
  pub fn message(message: impl Into<String>) -> Self {
    StoreError::Store { message: message.into(), source: None }
  }
}
