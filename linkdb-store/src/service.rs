//! 统一服务契约
//!
//! 原型里有"固定四列"和"运行时发现列"两套近乎相同的实现，
//! 这里统一成一个由模式描述符参数化的契约：实现只有一份，
//! 列的差异全部体现在构造时注入的 `TableSchema` 上。

use linkdb_domain::{Record, RecordId, Result};

/// 单表 CRUD 数据访问契约
///
/// 并发模型：单线程、同步、阻塞。每个操作独立完成一次往返，
/// 操作之间不共享可变状态，也没有跨调用的会话或事务。
/// 调用方（展示层）负责把阻塞调用放到其平台要求的线程上。
///
/// 错误策略：每个操作要么成功，要么以 `StoreError` 失败；
/// 存在性探测的失败同样向上传播，不会默认为 false。
pub trait DatabaseService {
  /// 无过滤地取回所有记录（按存储顺序）
  fn fetch_all(&self) -> Result<Vec<Record<'static>>>;

  /// 按 identity 取回单条记录；不存在时返回 `None`
  fn fetch(&self, id: RecordId) -> Result<Option<Record<'static>>>;

  /// 轻量存在性探测
  fn exists(&self, id: RecordId) -> Result<bool>;

  /// 插入一条新记录
  ///
  /// 语句由记录里实际存在的列拼成；成功后用存储端生成的主键
  /// 回填记录的 identity（记录必须尚未持久化，否则报错）。
  fn insert(&self, record: &mut Record<'static>) -> Result<()>;

  /// 按 identity 更新一条记录
  ///
  /// SET 子句由记录里实际存在的列拼成，identity 不参与 SET。
  /// 目标行不存在时静默成功（和原型一致）。
  fn update(&self, id: RecordId, record: &Record<'_>) -> Result<()>;

  /// 按 identity 删除一条记录（幂等：目标行不存在也算成功）
  fn delete(&self, id: RecordId) -> Result<()>;

  /// 数据列名列表（有序，不含主键列）
  ///
  /// 来自构造时内省好的模式描述符，供动态展示层使用。
  fn column_names(&self) -> Vec<String>;
}
