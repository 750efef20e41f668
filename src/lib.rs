//! giant-tree - 工作区文件浏览器的无界面内核
//!
//! 模块结构：
//! - models: 数据模型（Tree, ColumnsConfig, Workspace）
//! - kernel: 选择引擎与状态机（selection, SelectionState, Store）
//! - settings: 用户配置
//! - script: 手势脚本解析（供回放工具使用）

pub mod kernel;
pub mod models;
pub mod script;
pub mod settings;
