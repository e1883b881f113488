// crates/tm_foundation/src/lib.rs

//! TerraMesh Foundation Layer
//!
//! 零依赖基础层，提供整个项目的基础抽象。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型
//! - [`macros`]: `ensure!` / `require!` 验证宏
//!
//! # 设计原则
//!
//! 1. **零外部依赖**: 仅依赖 thiserror
//! 2. **可诊断**: 错误信息携带出错的维度和数值
//!
//! # 示例
//!
//! ```
//! use tm_foundation::error::{TmError, TmResult};
//!
//! fn check_dims(rows: usize, cols: usize) -> TmResult<()> {
//!     if rows < 2 || cols < 2 {
//!         return Err(TmError::invalid_mesh(format!(
//!             "网格至少 2x2, 实际 {}x{}",
//!             rows, cols
//!         )));
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod macros;

// 重导出常用类型
pub use error::{TmError, TmResult};

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{TmError, TmResult};
    pub use crate::{ensure, require};
}
