// crates/tm_mesh/src/mesh.rs

//! 地形网格输出容器
//!
//! 汇集顶点、面连接、土地利用标签和出现过的编码集合，
//! 交给下游导出器。序列之间的索引约定：面索引 1-based，
//! 顶点按角点格行主序排列。

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tm_geo::Point3D;

use tm_foundation::{TmError, TmResult};

use crate::faces::TriFace;

/// 重建完成的地形网格
///
/// 下游导出器只读取本结构，不再接触网格中间表示。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainMesh {
    /// 源网格行数
    pub rows: usize,
    /// 源网格列数
    pub cols: usize,
    /// 角点顶点，行主序，(rows+1)*(cols+1) 个
    pub verts: Vec<Point3D>,
    /// 三角面，每单元两个
    pub faces: Vec<TriFace>,
    /// 每面的土地利用标签，与 faces 平行
    pub landuses: Vec<i32>,
    /// 出现过的土地利用编码集合
    pub landuse_set: BTreeSet<i32>,
}

impl TerrainMesh {
    /// 从各阶段产物组装网格
    ///
    /// 编码集合由标签序列归并得到。
    #[must_use]
    pub fn new(
        rows: usize,
        cols: usize,
        verts: Vec<Point3D>,
        faces: Vec<TriFace>,
        landuses: Vec<i32>,
    ) -> Self {
        let landuse_set = landuses.iter().copied().collect();
        Self {
            rows,
            cols,
            verts,
            faces,
            landuses,
            landuse_set,
        }
    }

    /// 顶点数
    #[inline]
    #[must_use]
    pub fn n_verts(&self) -> usize {
        self.verts.len()
    }

    /// 面数
    #[inline]
    #[must_use]
    pub fn n_faces(&self) -> usize {
        self.faces.len()
    }

    /// 校验各序列之间的尺寸与索引约定
    ///
    /// 导出前的最后防线：顶点数、面数、标签数必须与源网格维度
    /// 吻合，面索引必须落在角点格内。
    pub fn validate(&self) -> TmResult<()> {
        let expected_verts = (self.rows + 1) * (self.cols + 1);
        TmError::check_size("verts", expected_verts, self.verts.len())?;
        TmError::check_size("faces", 2 * self.rows * self.cols, self.faces.len())?;
        TmError::check_size("landuses", self.faces.len(), self.landuses.len())?;

        // 面索引 1-based, 合法范围 [1, expected_verts]
        for face in &self.faces {
            for idx in face.indices() {
                if idx < 1 || idx as usize > expected_verts {
                    return Err(TmError::index_out_of_bounds(
                        "FaceVertex",
                        idx as usize,
                        expected_verts + 1,
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landuse_set_deduplication() {
        let mesh = TerrainMesh::new(
            1,
            1,
            vec![Point3D::ZERO; 4],
            vec![TriFace::new(1, 3, 2), TriFace::new(4, 2, 3)],
            vec![7, 7],
        );
        assert_eq!(mesh.landuse_set.len(), 1);
        assert!(mesh.landuse_set.contains(&7));
    }

    #[test]
    fn test_validate_ok() {
        let mesh = TerrainMesh::new(
            1,
            1,
            vec![Point3D::ZERO; 4],
            vec![TriFace::new(1, 3, 2), TriFace::new(4, 2, 3)],
            vec![0, 0],
        );
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_validate_detects_missing_verts() {
        let mesh = TerrainMesh::new(
            1,
            1,
            vec![Point3D::ZERO; 3],
            vec![TriFace::new(1, 3, 2), TriFace::new(4, 2, 3)],
            vec![0, 0],
        );
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_validate_detects_bad_index() {
        let mesh = TerrainMesh::new(
            1,
            1,
            vec![Point3D::ZERO; 4],
            vec![TriFace::new(1, 3, 2), TriFace::new(5, 2, 3)],
            vec![0, 0],
        );
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mesh = TerrainMesh::new(
            1,
            1,
            vec![Point3D::ZERO; 4],
            vec![TriFace::new(1, 3, 2), TriFace::new(4, 2, 3)],
            vec![2, 2],
        );
        let json = serde_json::to_string(&mesh).unwrap();
        let back: TerrainMesh = serde_json::from_str(&json).unwrap();
        assert_eq!(back.n_verts(), 4);
        assert_eq!(back.landuse_set, mesh.landuse_set);
    }
}
