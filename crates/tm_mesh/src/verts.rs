// crates/tm_mesh/src/verts.rs

//! 角点顶点重建
//!
//! 输入只有单元中心，角点格上的顶点要靠相邻中心取平均得到。
//! 为了让边界顶点也能走同一条四邻平均规则，先在真实网格外围
//! 构造一圈合成的 ghost 中心：
//!
//! ```text
//! · 单元中心  + ghost 中心  x 顶点
//!
//!        dx      j  j+1
//!       + > +   +   +   +
//!    dy v
//!       +   ·   ·   ·   +
//!         x
//!       +   ·   ·   ·   +  i
//!
//!       +   +   +   +   +
//! ```
//!
//! ghost 中心由边界中心按位移向量外推，位移的高程分量强制为零，
//! 避免在域边缘外推出虚假的坡度。ghost 网格是独立的新结构，
//! 生命周期限于本模块，不会改写调用方的网格。

use tm_geo::Point3D;

use crate::error::{MeshError, MeshResult};
use crate::grid::CellGrid;

/// 外扩一圈 ghost 中心的位置阵列
///
/// (R+2) x (C+2)，只保留位置，土地利用在此之前丢弃。
struct PaddedCenters {
    /// 位置，行主序
    points: Vec<Point3D>,
    /// 列数（含两列 ghost）
    cols: usize,
}

impl PaddedCenters {
    /// 从单元网格构建
    ///
    /// 位移向量取自首行/首列的相邻中心差，要求网格至少 2x2。
    fn build(grid: &CellGrid) -> MeshResult<Self> {
        let rows = grid.rows();
        let cols = grid.cols();
        if rows < 2 || cols < 2 {
            return Err(MeshError::grid_too_small(rows, cols));
        }

        // 边界位移向量，高程分量清零
        let dx = (grid.at(0, 1).position - grid.at(0, 0).position).with_z(0.0);
        let dy = (grid.at(1, 0).position - grid.at(0, 0).position).with_z(0.0);

        let padded_rows = rows + 2;
        let padded_cols = cols + 2;
        let mut points = vec![Point3D::ZERO; padded_rows * padded_cols];
        let idx = |i: usize, j: usize| i * padded_cols + j;

        // 真实单元中心
        for (i, row) in grid.iter_rows().enumerate() {
            for (j, sample) in row.iter().enumerate() {
                points[idx(i + 1, j + 1)] = sample.position;
            }
        }

        // 上下 ghost 行
        for j in 0..cols {
            points[idx(0, j + 1)] = grid.at(0, j).position - dy;
            points[idx(padded_rows - 1, j + 1)] = grid.at(rows - 1, j).position + dy;
        }

        // 左右 ghost 列，覆盖 ghost 行在内的所有行
        for i in 0..padded_rows {
            points[idx(i, 0)] = points[idx(i, 1)] - dx;
            points[idx(i, padded_cols - 1)] = points[idx(i, padded_cols - 2)] + dx;
        }

        Ok(Self {
            points,
            cols: padded_cols,
        })
    }

    /// 获取外扩阵列中的中心位置
    #[inline]
    fn get(&self, i: usize, j: usize) -> Point3D {
        self.points[i * self.cols + j]
    }
}

/// 重建角点格上的全部顶点
///
/// 角点 (i, j) 的顶点是其周围四个（真实或 ghost）单元中心的
/// 分量算术平均。输出按行主序排列，与面构建的 1-based 索引方案
/// 一一对应：角点 (i, j) 对应索引 `i*(C+1) + j + 1`。
///
/// # Errors
///
/// - 网格小于 2x2 时位移向量无定义，返回 [`MeshError::GridTooSmall`]；
/// - 维度与存储不一致返回 [`MeshError::NonRectangular`]。
pub fn build_verts(grid: &CellGrid) -> MeshResult<Vec<Point3D>> {
    grid.validate_rectangular()?;
    let padded = PaddedCenters::build(grid)?;

    let vert_rows = grid.rows() + 1;
    let vert_cols = grid.cols() + 1;
    let mut verts = Vec::with_capacity(vert_rows * vert_cols);
    for i in 0..vert_rows {
        for j in 0..vert_cols {
            let sum = padded.get(i, j)
                + padded.get(i, j + 1)
                + padded.get(i + 1, j)
                + padded.get(i + 1, j + 1);
            verts.push(sum.scale(0.25));
        }
    }
    Ok(verts)
}
