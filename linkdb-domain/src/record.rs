//! 记录
//!
//! 定义表中一行数据的内存表示：一个单独存放的 identity（主键值），
//! 加上按插入顺序保存的"列名 -> 值"映射。

use crate::error::{Result, StoreError};
use crate::ids::RecordId;
use crate::value::Value;

/// 记录实体
///
/// 表示表中的一行数据。identity 在持久化之前缺失，插入成功后由
/// 服务层回填，此后不可再变（set-once 语义，二次赋值报错）。
///
/// 不变量：
/// - 主键列名不会作为键出现在列映射里（验证在服务层进行）
/// - 列的插入顺序被保留；顺序只影响展示，不影响正确性
///
/// 生命周期: 'r (值可能引用外部数据)
/// 线程安全: Send + Sync
#[derive(Debug, Clone, Default)]
pub struct Record<'r> {
  identity: Option<RecordId>,
  columns: Vec<(String, Value<'r>)>,
}

impl<'r> Record<'r> {
  /// 创建一个空记录（identity 缺失）
  ///
  /// # Examples
  ///
  /// use linkdb_domain::Record;
  ///
  /// let record = Record::new();
  /// assert!(record.identity().is_none());
  /// assert!(record.is_empty());
  ///
  pub fn new() -> Self {
    Self { identity: None, columns: Vec::new() }
  }

  /// 创建一个带 identity 的记录
  ///
  /// 用于把查询结果行物化成记录：identity 来自存储端，已知且固定。
  ///
  /// # Examples
  ///
  /// use linkdb_domain::{Record, RecordId};
  ///
  /// let record = Record::with_identity(RecordId::new(1));
  /// assert_eq!(record.identity(), Some(RecordId::new(1)));
  ///
  pub fn with_identity(id: RecordId) -> Self {
    Self { identity: Some(id), columns: Vec::new() }
  }

  /// 获取 identity
  pub fn identity(&self) -> Option<RecordId> {
    self.identity
  }

  /// 赋值 identity（只允许一次）
  ///
  /// 插入成功后由服务层调用，用存储端生成的主键回填。
  /// 如果 identity 已经存在则报错——原实现里是静默 no-op，
  /// 这里按不变量违反处理。
  ///
  /// # Examples
  ///
  /// use linkdb_domain::{Record, RecordId};
  ///
  /// let mut record = Record::new();
  /// assert!(record.assign_identity(RecordId::new(1)).is_ok());
  /// assert!(record.assign_identity(RecordId::new(2)).is_err());
  ///
  pub fn assign_identity(&mut self, id: RecordId) -> Result<()> {
    match self.identity {
      Some(current) => Err(StoreError::IdentityAlreadySet { current }),
      None => {
        self.identity = Some(id);
        Ok(())
      }
    }
  }

  /// 设置列值
  ///
  /// 列已存在时原位覆盖（保留原有位置），否则追加到末尾。
  ///
  /// # Examples
  ///
  /// use linkdb_domain::{Record, Value};
  ///
  /// let mut record = Record::new();
  /// record.set("title", Value::from("A"));
  /// record.set("title", Value::from("B"));
  /// assert_eq!(record.get("title").and_then(|v| v.as_text()), Some("B"));
  /// assert_eq!(record.len(), 1);
  ///
  pub fn set(&mut self, name: impl Into<String>, value: Value<'r>) {
    let name = name.into();
    match self.columns.iter_mut().find(|(n, _)| *n == name) {
      Some((_, slot)) => *slot = value,
      None => self.columns.push((name, value)),
    }
  }

  /// 获取列值（按列名）
  ///
  /// 列不存在时返回 `None`。
  pub fn get(&self, name: &str) -> Option<&Value<'r>> {
    self
      .columns
      .iter()
      .find(|(n, _)| n == name)
      .map(|(_, v)| v)
  }

  /// 列名列表（插入顺序）
  ///
  /// # Examples
  ///
  /// use linkdb_domain::{Record, Value};
  ///
  /// let mut record = Record::new();
  /// record.set("title", Value::from("A"));
  /// record.set("url", Value::from("C"));
  /// assert_eq!(record.column_names(), vec!["title", "url"]);
  ///
  pub fn column_names(&self) -> Vec<&str> {
    self.columns.iter().map(|(n, _)| n.as_str()).collect()
  }

  /// 所有列值的只读快照（插入顺序）
  pub fn values(&self) -> &[(String, Value<'r>)] {
    &self.columns
  }

  /// 列数
  pub fn len(&self) -> usize {
    self.columns.len()
  }

  /// 是否没有任何列
  pub fn is_empty(&self) -> bool {
    self.columns.is_empty()
  }

  /// 转换为所有权的记录
  ///
  /// 将借用数据克隆为拥有数据，返回 `Record<'static>`。
  pub fn into_owned(self) -> Record<'static> {
    Record {
      identity: self.identity,
      columns: self
        .columns
        .into_iter()
        .map(|(n, v)| (n, v.into_owned()))
        .collect(),
    }
  }
}

// 保证 Record 是 Send + Sync
unsafe impl<'r> Send for Record<'r> {}
unsafe impl<'r> Sync for Record<'r> {}
