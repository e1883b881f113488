// crates/tm_mesh/src/error.rs

//! 网格重建错误类型
//!
//! 包含采样流格式、网格维度等错误定义。
//! 所有错误可转换为 `tm_foundation::TmError` 向上传播。
//!
//! 此处的错误全部属于不可恢复的输入缺陷：计算是确定性的，
//! 重试不会改变结果，因此一律立即上报，不返回部分结果。

use thiserror::Error;
use tm_foundation::TmError;

/// 网格模块结果类型
pub type MeshResult<T> = Result<T, MeshError>;

/// 网格重建错误枚举
#[derive(Error, Debug)]
pub enum MeshError {
    /// 采样流过短
    #[error("采样流过短: 推断列长至少需要 {required} 个点, 实际 {actual}")]
    StreamTooShort {
        /// 所需最少点数
        required: usize,
        /// 实际点数
        actual: usize,
    },

    /// 参考点重合
    #[error("参考点重合: 点 {first} 与点 {second} 水平距离为零, 无法归一化方向向量")]
    CoincidentPoints {
        /// 基准点下标
        first: usize,
        /// 重合点下标
        second: usize,
    },

    /// 采样流长度与推断列长不整除
    #[error("采样流不规则: 总点数 {total} 不能按列长 {column_len} 均分")]
    RaggedStream {
        /// 总点数
        total: usize,
        /// 推断的列长
        column_len: usize,
    },

    /// 网格行长不一致
    #[error("网格非矩形: 行 {row} 长度 {actual}, 期望 {expected}")]
    NonRectangular {
        /// 出错行号
        row: usize,
        /// 期望行长
        expected: usize,
        /// 实际行长
        actual: usize,
    },

    /// 空网格
    #[error("空网格: 没有任何采样行")]
    Empty,

    /// 网格过小
    #[error("网格过小: 边界位移向量需要至少 2x2 单元, 实际 {rows}x{cols}")]
    GridTooSmall {
        /// 实际行数
        rows: usize,
        /// 实际列数
        cols: usize,
    },
}

/// 便捷构造函数
impl MeshError {
    /// 采样流过短
    pub fn stream_too_short(required: usize, actual: usize) -> Self {
        Self::StreamTooShort { required, actual }
    }

    /// 参考点重合
    pub fn coincident_points(first: usize, second: usize) -> Self {
        Self::CoincidentPoints { first, second }
    }

    /// 采样流不规则
    pub fn ragged_stream(total: usize, column_len: usize) -> Self {
        Self::RaggedStream { total, column_len }
    }

    /// 网格非矩形
    pub fn non_rectangular(row: usize, expected: usize, actual: usize) -> Self {
        Self::NonRectangular {
            row,
            expected,
            actual,
        }
    }

    /// 网格过小
    pub fn grid_too_small(rows: usize, cols: usize) -> Self {
        Self::GridTooSmall { rows, cols }
    }
}

/// 转换到 Foundation 层错误
impl From<MeshError> for TmError {
    fn from(err: MeshError) -> Self {
        match err {
            MeshError::StreamTooShort { required, actual } => TmError::invalid_input(format!(
                "采样流过短: 至少 {} 个点, 实际 {}",
                required, actual
            )),
            MeshError::CoincidentPoints { first, second } => TmError::numerical(format!(
                "参考点重合 [点 {}, 点 {}]: 方向向量长度为零",
                first, second
            )),
            MeshError::RaggedStream { total, column_len } => TmError::invalid_input(format!(
                "采样流不规则: 总点数 {} 与列长 {} 不整除",
                total, column_len
            )),
            MeshError::NonRectangular {
                row,
                expected,
                actual,
            } => TmError::invalid_mesh(format!(
                "网格非矩形 [行 {}]: 长度 {}, 期望 {}",
                row, actual, expected
            )),
            MeshError::Empty => TmError::invalid_mesh("空网格"),
            MeshError::GridTooSmall { rows, cols } => {
                TmError::invalid_mesh(format!("网格过小: {}x{}, 至少 2x2", rows, cols))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::stream_too_short(2, 1);
        let msg = err.to_string();
        assert!(msg.contains("2"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn test_error_conversion_to_foundation() {
        let err = MeshError::coincident_points(0, 1);
        let tm_err: TmError = err.into();
        assert!(matches!(tm_err, TmError::Numerical { .. }));
    }

    #[test]
    fn test_ragged_conversion() {
        let err = MeshError::ragged_stream(5, 2);
        let tm_err: TmError = err.into();
        assert!(tm_err.to_string().contains("5"));
    }

    #[test]
    fn test_non_rectangular_conversion() {
        let err = MeshError::non_rectangular(3, 4, 2);
        let tm_err: TmError = err.into();
        assert!(matches!(tm_err, TmError::InvalidMesh { .. }));
        assert!(tm_err.to_string().contains("行 3"));
    }
}
