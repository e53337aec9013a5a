//! 参数化语句拼装
//!
//! 把模式描述符 + 记录拼成固定形状的 CRUD 语句。
//! 标识符（表名、列名）用双引号括起并转义；值一律走 `?N` 绑定参数，
//! 绝不拼进语句文本——这是本层唯一真正的正确性契约。

use linkdb_domain::{Record, RecordId, Result, StoreError, TableSchema, Value};

/// 一条待执行的语句：SQL 文本 + 按序排列的绑定参数
///
/// 参数顺序与文本中的 `?1..?N` 占位符一一对应。
///
/// 生命周期: 'r (参数可能借用记录里的数据)
#[derive(Debug, Clone, PartialEq)]
pub struct Statement<'r> {
  pub sql: String,
  pub params: Vec<Value<'r>>,
}

/// 括起一个 SQL 标识符（双引号，内部引号翻倍）
///
/// 标识符来自配置和模式内省，不来自用户输入，但照样转义。
///
/// # Examples
///
/// use linkdb_store::statement::quote_ident;
///
/// assert_eq!(quote_ident("links"), "\"links\"");
/// assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
///
pub fn quote_ident(name: &str) -> String {
  let mut quoted = String::with_capacity(name.len() + 2);
  quoted.push('"');
  for ch in name.chars() {
    if ch == '"' {
      quoted.push('"');
    }
    quoted.push(ch);
  }
  quoted.push('"');
  quoted
}

/// 无过滤全量查询
///
/// 列顺序固定：主键列在前，数据列按模式顺序排列。
/// 行映射依赖这个顺序。
pub fn select_all(schema: &TableSchema) -> Statement<'static> {
  Statement {
    sql: format!(
      "SELECT {} FROM {}",
      column_list(schema),
      quote_ident(schema.table())
    ),
    params: Vec::new(),
  }
}

/// 按主键查询单行
pub fn select_by_id(schema: &TableSchema, id: RecordId) -> Statement<'static> {
  Statement {
    sql: format!(
      "SELECT {} FROM {} WHERE {} = ?1",
      column_list(schema),
      quote_ident(schema.table()),
      quote_ident(schema.id_column())
    ),
    params: vec![Value::Integer(id.into_inner())],
  }
}

/// 轻量存在性探测
pub fn exists(schema: &TableSchema, id: RecordId) -> Statement<'static> {
  Statement {
    sql: format!(
      "SELECT 1 FROM {} WHERE {} = ?1 LIMIT 1",
      quote_ident(schema.table()),
      quote_ident(schema.id_column())
    ),
    params: vec![Value::Integer(id.into_inner())],
  }
}

/// 插入语句
///
/// 只插入记录里实际存在的列，按记录的插入顺序绑定参数。
/// 主键列由存储端生成，不出现在列清单里。
pub fn insert<'r>(schema: &TableSchema, record: &Record<'r>) -> Result<Statement<'r>> {
  validate_record(schema, record)?;

  let mut names = Vec::with_capacity(record.len());
  let mut placeholders = Vec::with_capacity(record.len());
  let mut params = Vec::with_capacity(record.len());

  for (index, (name, value)) in record.values().iter().enumerate() {
    names.push(quote_ident(name));
    placeholders.push(format!("?{}", index + 1));
    params.push(value.clone());
  }

  Ok(Statement {
    sql: format!(
      "INSERT INTO {} ({}) VALUES ({})",
      quote_ident(schema.table()),
      names.join(", "),
      placeholders.join(", ")
    ),
    params,
  })
}

/// 更新语句
///
/// SET 子句只包含记录里实际存在的列（identity 被排除在外），
/// WHERE 子句按主键匹配；主键参数排在所有列参数之后。
pub fn update<'r>(
  schema: &TableSchema,
  id: RecordId,
  record: &Record<'r>,
) -> Result<Statement<'r>> {
  validate_record(schema, record)?;

  let mut assignments = Vec::with_capacity(record.len());
  let mut params: Vec<Value<'r>> = Vec::with_capacity(record.len() + 1);

  for (index, (name, value)) in record.values().iter().enumerate() {
    assignments.push(format!("{} = ?{}", quote_ident(name), index + 1));
    params.push(value.clone());
  }

  params.push(Value::Integer(id.into_inner()));

  Ok(Statement {
    sql: format!(
      "UPDATE {} SET {} WHERE {} = ?{}",
      quote_ident(schema.table()),
      assignments.join(", "),
      quote_ident(schema.id_column()),
      record.len() + 1
    ),
    params,
  })
}

/// 删除语句
pub fn delete(schema: &TableSchema, id: RecordId) -> Statement<'static> {
  Statement {
    sql: format!(
      "DELETE FROM {} WHERE {} = ?1",
      quote_ident(schema.table()),
      quote_ident(schema.id_column())
    ),
    params: vec![Value::Integer(id.into_inner())],
  }
}

/// 校验记录的列对模式是否合法
///
/// - 记录至少要有一列（否则 INSERT/UPDATE 无法成句）
/// - 主键列不允许混进列映射（identity 单独存放的不变量）
/// - 每个列名都必须在模式里存在
fn validate_record(schema: &TableSchema, record: &Record<'_>) -> Result<()> {
  if record.is_empty() {
    return Err(StoreError::EmptyRecord);
  }

  for (name, _) in record.values() {
    if name == schema.id_column() {
      return Err(StoreError::IdentityColumnInValues { name: name.clone() });
    }
    if schema.get_column(name).is_none() {
      return Err(StoreError::UnknownColumn { name: name.clone() });
    }
  }

  Ok(())
}

// SELECT 用的列清单：主键列在前，数据列按模式顺序
fn column_list(schema: &TableSchema) -> String {
  let mut names = Vec::with_capacity(schema.columns().len() + 1);
  names.push(quote_ident(schema.id_column()));
  for col in schema.columns() {
    names.push(quote_ident(&col.name));
  }
  names.join(", ")
}
