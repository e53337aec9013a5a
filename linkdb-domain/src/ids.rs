//! ID 类型定义（newtype 模式）
//!
//! 使用 newtype 模式提供类型安全的记录标识，防止和普通整数混淆。

/// 记录 ID（newtype 模式）
///
/// 表的主键值，由存储端在插入时生成。
/// 底层类型：`i64` (支持负数，SQLite 兼容)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(i64);

impl RecordId {
  #[inline]
  pub fn new(id: i64) -> Self {
    Self(id)
  }

  #[inline]
  pub fn into_inner(self) -> i64 {
    self.0
  }
}

impl From<i64> for RecordId {
  #[inline]
  fn from(id: i64) -> Self {
    Self(id)
  }
}

impl From<RecordId> for i64 {
  #[inline]
  fn from(id: RecordId) -> Self {
    id.0
  }
}

impl std::fmt::Display for RecordId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}
