//! 模式描述符
//!
//! 定义目标表的显式模式：表名、主键列名、按序排列的数据列定义。
//! 描述符在服务构造时由一次性的存储内省生成，之后不再做运行时反射。

use crate::data_type::DataType;
use crate::error::{Result, StoreError};

/// 列定义
///
/// 描述一个数据列：列名加声明类型。
///
/// 生命周期: 'static
/// 线程安全: Send + Sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
  pub name: String,
  pub data_type: DataType,
}

impl ColumnDef {
  /// 创建新列定义
  ///
  /// # Examples
  ///
  /// use linkdb_domain::{ColumnDef, DataType};
  ///
  /// let column = ColumnDef::new("title", DataType::Text);
  /// assert_eq!(column.name, "title");
  /// assert_eq!(column.data_type, DataType::Text);
  ///
  pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
    Self { name: name.into(), data_type }
  }
}

/// 表模式描述符
///
/// 定义服务操作的那一张表：表名、主键列名、数据列列表（有序）。
///
/// 不变量:
/// - columns 非空
/// - id_column 不出现在 columns 里（identity 单独存放）
/// - 列名在表中唯一
///
/// 生命周期: 'static
/// 线程安全: Send + Sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
  table: String,
  id_column: String,
  columns: Vec<ColumnDef>,
}

impl TableSchema {
  /// 创建新模式描述符
  ///
  /// 不变量检查：
  /// - 至少要有一个数据列
  /// - 主键列不能重复出现在数据列里
  ///
  /// # Examples
  ///
  /// use linkdb_domain::{ColumnDef, DataType, TableSchema};
  ///
  /// let schema = TableSchema::new(
  ///   "links",
  ///   "id",
  ///   vec![
  ///     ColumnDef::new("title", DataType::Text),
  ///     ColumnDef::new("url", DataType::Text),
  ///   ],
  /// ).unwrap();
  /// assert_eq!(schema.table(), "links");
  ///
  pub fn new(
    table: impl Into<String>,
    id_column: impl Into<String>,
    columns: Vec<ColumnDef>,
  ) -> Result<Self> {
    let table = table.into();
    let id_column = id_column.into();

    if columns.is_empty() {
      return Err(StoreError::SchemaMustHaveColumns { table });
    }

    if columns.iter().any(|col| col.name == id_column) {
      return Err(StoreError::IdColumnListedTwice { name: id_column });
    }

    Ok(Self { table, id_column, columns })
  }

  /// 表名
  pub fn table(&self) -> &str {
    &self.table
  }

  /// 主键列名
  pub fn id_column(&self) -> &str {
    &self.id_column
  }

  /// 数据列定义（有序，不含主键列）
  pub fn columns(&self) -> &[ColumnDef] {
    &self.columns
  }

  /// 查找列定义（按名称）
  ///
  /// # Examples
  ///
  /// use linkdb_domain::{ColumnDef, DataType, TableSchema};
  ///
  /// let schema = TableSchema::new(
  ///   "links",
  ///   "id",
  ///   vec![ColumnDef::new("title", DataType::Text)],
  /// ).unwrap();
  ///
  /// assert!(schema.get_column("title").is_some());
  /// assert!(schema.get_column("nonexistent").is_none());
  ///
  pub fn get_column(&self, name: &str) -> Option<&ColumnDef> {
    self.columns.iter().find(|col| col.name == name)
  }

  /// 数据列名列表（有序，不含主键列）
  pub fn column_names(&self) -> Vec<String> {
    self.columns.iter().map(|col| col.name.clone()).collect()
  }
}

// 取保 TableSchema 是 Send + Sync
unsafe impl Send for TableSchema {}
unsafe impl Sync for TableSchema {}
