// crates/tm_mesh/src/faces.rs

//! 三角面连接与土地利用标签
//!
//! R x C 的单元网格对应 (R+1) x (C+1) 的角点格，每个单元沿对角线
//! 固定剖分为两个三角形，全网格对角线方向一致：
//!
//! ```text
//!        j      j+1
//!        *<------* i
//!        | f1 // |
//!        |  /·/  |
//!        | // f2 |
//!        *------>* i+1
//! ```
//!
//! 两个三角形共享 (i,j+1)-(i+1,j) 对角线，并继承父单元的土地利用
//! 编码。顶点环绕方向由此构造固定，决定下游的面法向。

use serde::{Deserialize, Serialize};

use crate::error::MeshResult;
use crate::grid::CellGrid;

/// 三角面
///
/// 三个角点索引，1-based 行主序，与下游导出格式的索引约定一致。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriFace {
    /// 第一个顶点索引 (1-based)
    pub v0: u32,
    /// 第二个顶点索引 (1-based)
    pub v1: u32,
    /// 第三个顶点索引 (1-based)
    pub v2: u32,
}

impl TriFace {
    /// 创建三角面
    pub const fn new(v0: u32, v1: u32, v2: u32) -> Self {
        Self { v0, v1, v2 }
    }

    /// 顶点索引数组
    #[inline]
    #[must_use]
    pub const fn indices(&self) -> [u32; 3] {
        [self.v0, self.v1, self.v2]
    }
}

/// 角点 (i, j) 的 1-based 行主序索引
///
/// 下游导出格式的索引从 1 开始，偏移在此处统一施加。
#[inline]
fn vert_index(i: usize, j: usize, len_vrow: usize) -> u32 {
    (i * len_vrow + j + 1) as u32
}

/// 单元 (i, j) 的上三角
#[inline]
fn face_1(i: usize, j: usize, len_vrow: usize) -> TriFace {
    TriFace::new(
        vert_index(i, j, len_vrow),
        vert_index(i + 1, j, len_vrow),
        vert_index(i, j + 1, len_vrow),
    )
}

/// 单元 (i, j) 的下三角
#[inline]
fn face_2(i: usize, j: usize, len_vrow: usize) -> TriFace {
    TriFace::new(
        vert_index(i + 1, j + 1, len_vrow),
        vert_index(i, j + 1, len_vrow),
        vert_index(i + 1, j, len_vrow),
    )
}

/// 构建面连接和土地利用标签
///
/// 每个单元产出两个三角形，返回的两个序列等长平行：
/// `faces[k]` 的标签是 `landuses[k]`。
///
/// # Errors
///
/// 网格维度与存储不一致时返回 [`crate::MeshError::NonRectangular`]。
pub fn build_faces(grid: &CellGrid) -> MeshResult<(Vec<TriFace>, Vec<i32>)> {
    grid.validate_rectangular()?;

    let len_vrow = grid.cols() + 1;
    let n_faces = 2 * grid.n_cells();
    let mut faces = Vec::with_capacity(n_faces);
    let mut landuses = Vec::with_capacity(n_faces);

    for (i, row) in grid.iter_rows().enumerate() {
        for (j, sample) in row.iter().enumerate() {
            faces.push(face_1(i, j, len_vrow));
            faces.push(face_2(i, j, len_vrow));
            landuses.push(sample.landuse);
            landuses.push(sample.landuse);
        }
    }
    Ok((faces, landuses))
}
