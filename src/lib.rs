//! Assignment Grader - 作业提交与评分后端服务
//!
//! 基于 Actix Web 构建，作业按 DRAFT -> SUBMITTED -> GRADED 流转，
//! 学生、教师、校长各自拥有独立的路由与可见范围。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义与作业状态机
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 断言、JWT、密码与校验工具

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
