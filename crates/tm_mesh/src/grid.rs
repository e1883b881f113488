// crates/tm_mesh/src/grid.rs

//! 单元中心网格与列流重组
//!
//! 输入是按扫描列拼接的扁平采样流：同一物理列内的点连续出现，
//! 列与列首尾相接。本模块先推断列长，再把流切成等长列，
//! 最后显式转置成按行存储的矩形网格。
//!
//! 列边界没有显式分隔符，只能依靠方向共线性判定：
//!
//! ```text
//! 同列:              下一列:
//!   first ·            first · · current
//!         |                  | ^
//!         |                  | |
//!    prev ·                  | |
//!         |                  |/
//! current ·             prev ·
//! ```
//!
//! 网格不变量：矩形（每行等长），行/列顺序编码邻接关系。

use tm_geo::Point2D;

use crate::config::MeshConfig;
use crate::error::{MeshError, MeshResult};
use crate::sample::Sample;

/// 单元中心矩形网格
///
/// 按行主序扁平存储，构造时强制矩形不变量。
/// `grid[i][j]` 是第 i 行第 j 列的单元中心采样点。
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    /// 采样点，行主序
    samples: Vec<Sample>,
    /// 行数
    rows: usize,
    /// 列数
    cols: usize,
}

impl CellGrid {
    /// 从行列表构建网格
    ///
    /// 所有行必须等长且非空，否则拒绝。
    pub fn from_rows(row_data: Vec<Vec<Sample>>) -> MeshResult<Self> {
        let rows = row_data.len();
        if rows == 0 {
            return Err(MeshError::Empty);
        }
        let cols = row_data[0].len();
        if cols == 0 {
            return Err(MeshError::Empty);
        }
        let mut samples = Vec::with_capacity(rows * cols);
        for (i, row) in row_data.into_iter().enumerate() {
            if row.len() != cols {
                return Err(MeshError::non_rectangular(i, cols, row.len()));
            }
            samples.extend(row);
        }
        Ok(Self {
            samples,
            rows,
            cols,
        })
    }

    /// 行数
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 列数
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 单元总数
    #[inline]
    #[must_use]
    pub fn n_cells(&self) -> usize {
        self.rows * self.cols
    }

    /// 获取采样点
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<&Sample> {
        if i < self.rows && j < self.cols {
            Some(&self.samples[i * self.cols + j])
        } else {
            None
        }
    }

    /// 内部直接访问，调用方保证下标合法
    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> &Sample {
        &self.samples[i * self.cols + j]
    }

    /// 按行迭代
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Sample]> {
        self.samples.chunks_exact(self.cols)
    }

    /// 阶段入口的防御性检查
    ///
    /// 扁平存储在构造时已强制矩形，此处复核存储长度与维度一致，
    /// 在进入面构建/顶点重建前拦截损坏的网格。
    pub fn validate_rectangular(&self) -> MeshResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MeshError::Empty);
        }
        for (i, row) in self.samples.chunks(self.cols).enumerate() {
            if row.len() != self.cols {
                return Err(MeshError::non_rectangular(i, self.cols, row.len()));
            }
        }
        if self.samples.len() != self.rows * self.cols {
            return Err(MeshError::non_rectangular(self.rows, self.cols, 0));
        }
        Ok(())
    }

    /// 按列主序重新展平
    ///
    /// 逐物理列输出采样点，即 `reshape` 输入的原始顺序。
    #[must_use]
    pub fn flatten_column_major(&self) -> Vec<Sample> {
        let mut flat = Vec::with_capacity(self.samples.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                flat.push(*self.at(i, j));
            }
        }
        flat
    }
}

// ============================================================================
// 列流重组
// ============================================================================

/// 把扁平采样流重组为矩形网格
///
/// 1. 推断列长：比较 v(首点→次点) 与 v(首点→当前点) 的夹角余弦，
///    |cos| 大于容差视为仍在同一扫描列；
/// 2. 按列长把流切成等长块，每块是一条物理列；
/// 3. 显式转置成行主序网格。
///
/// # Errors
///
/// - 点数少于 2 无法推断列长，返回 [`MeshError::StreamTooShort`]；
/// - 参考点水平重合返回 [`MeshError::CoincidentPoints`]；
/// - 总点数不能按列长均分返回 [`MeshError::RaggedStream`]。
pub fn reshape(samples: &[Sample], config: &MeshConfig) -> MeshResult<CellGrid> {
    let column_len = detect_column_len(samples, config.collinearity_tolerance)?;
    log::debug!(
        "推断扫描列长 {} (共 {} 点, 容差 {})",
        column_len,
        samples.len(),
        config.collinearity_tolerance
    );

    if samples.len() % column_len != 0 {
        return Err(MeshError::ragged_stream(samples.len(), column_len));
    }
    let n_columns = samples.len() / column_len;

    // 切列后转置: grid[i][j] = columns[j][i]
    let mut row_data = Vec::with_capacity(column_len);
    for i in 0..column_len {
        let mut row = Vec::with_capacity(n_columns);
        for j in 0..n_columns {
            row.push(samples[j * column_len + i]);
        }
        row_data.push(row);
    }
    CellGrid::from_rows(row_data)
}

/// 推断扫描列长
///
/// 以首点为基准，次点确定列方向。随后每个点只要与列方向的
/// 夹角余弦绝对值超过容差，就仍属于首列；第一个不满足的点
/// 标记列边界。
fn detect_column_len(samples: &[Sample], tolerance: f64) -> MeshResult<usize> {
    if samples.len() < 2 {
        return Err(MeshError::stream_too_short(2, samples.len()));
    }

    let first = samples[0].xy();
    let axis = samples[1].xy() - first;
    let axis_len = axis.length();
    if axis_len < 1e-14 {
        return Err(MeshError::coincident_points(0, 1));
    }

    let mut column_len = 2;
    for (idx, sample) in samples.iter().enumerate().skip(2) {
        let v = sample.xy() - first;
        let v_len = v.length();
        if v_len < 1e-14 {
            return Err(MeshError::coincident_points(0, idx));
        }
        let cosine = axis.dot(&v) / (axis_len * v_len);
        if cosine.abs() > tolerance {
            column_len += 1;
        } else {
            break;
        }
    }
    Ok(column_len)
}
