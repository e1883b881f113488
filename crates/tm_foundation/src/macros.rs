// crates/tm_foundation/src/macros.rs

//! 验证宏
//!
//! 提供 `ensure!` 和 `require!` 两个快捷宏，减少手写 if-return 样板。

/// 条件不成立时提前返回错误
///
/// # 示例
///
/// ```
/// use tm_foundation::{ensure, error::{TmError, TmResult}};
///
/// fn positive(v: f64) -> TmResult<()> {
///     ensure!(v > 0.0, TmError::invalid_input("必须为正"));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}

/// 从 Option 中取值，为 None 时提前返回错误
///
/// # 示例
///
/// ```
/// use tm_foundation::{require, error::{TmError, TmResult}};
///
/// fn first(values: &[f64]) -> TmResult<f64> {
///     let v = require!(values.first(), TmError::invalid_input("序列为空"));
///     Ok(*v)
/// }
/// ```
#[macro_export]
macro_rules! require {
    ($opt:expr, $err:expr) => {
        match $opt {
            Some(v) => v,
            None => return Err($err.into()),
        }
    };
}
