// crates/tm_mesh/tests/reconstruction.rs

//! 网格重建端到端测试
//! 覆盖列流重组、面构建、顶点重建三个阶段的组合行为

use tm_geo::{Point2D, Point3D};
use tm_mesh::{
    build_faces, build_verts, reshape, MeshConfig, MeshError, RawSample, Sample, TerrainMesh,
};

/// 构造 rows x cols、单位间距的列主序采样流
fn column_major_stream(rows: usize, cols: usize, landuse: i32) -> Vec<Sample> {
    let mut flat = Vec::with_capacity(rows * cols);
    for j in 0..cols {
        for i in 0..rows {
            flat.push(Sample::new(Point3D::new(j as f64, i as f64, 0.0), landuse));
        }
    }
    flat
}

/// 2x2 单位网格的完整重建场景
#[test]
fn test_two_by_two_reconstruction() {
    let raw = [
        RawSample::new(0.0, 0.0, 0.0, Some(7)),
        RawSample::new(0.0, 1.0, 0.0, Some(7)),
        RawSample::new(1.0, 0.0, 0.0, Some(7)),
        RawSample::new(1.0, 1.0, 0.0, Some(7)),
    ];
    let config = MeshConfig::default();
    let samples: Vec<Sample> = raw
        .iter()
        .map(|r| Sample::from_raw(r, Point2D::ZERO, config.default_landuse))
        .collect();

    let grid = reshape(&samples, &config).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (2, 2));

    let (faces, landuses) = build_faces(&grid).unwrap();
    assert_eq!(faces.len(), 8);
    assert!(landuses.iter().all(|&lu| lu == 7));

    let verts = build_verts(&grid).unwrap();
    assert_eq!(verts.len(), 9);

    // 顶点格在 {-0.5, 0.5, 1.5} x {-0.5, 0.5, 1.5}, 高程处处为零
    let expected = [-0.5, 0.5, 1.5];
    for (i, &ey) in expected.iter().enumerate() {
        for (j, &ex) in expected.iter().enumerate() {
            let v = verts[i * 3 + j];
            assert!((v.x - ex).abs() < 1e-12, "顶点 ({},{}) x={}", i, j, v.x);
            assert!((v.y - ey).abs() < 1e-12, "顶点 ({},{}) y={}", i, j, v.y);
            assert!(v.z.abs() < 1e-12);
        }
    }

    let mesh = TerrainMesh::new(grid.rows(), grid.cols(), verts, faces, landuses);
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.landuse_set.len(), 1);
}

/// 任意矩形输入: 面数 2*R*C, 标签序列平行
#[test]
fn test_face_count_property() {
    let config = MeshConfig::default();
    for (rows, cols) in [(2, 2), (2, 5), (4, 3), (6, 6)] {
        let grid = reshape(&column_major_stream(rows, cols, 1), &config).unwrap();
        let (faces, landuses) = build_faces(&grid).unwrap();
        assert_eq!(faces.len(), 2 * rows * cols);
        assert_eq!(landuses.len(), faces.len());
    }
}

/// 所有面索引落在 [1, (R+1)*(C+1)]
#[test]
fn test_face_indices_in_range() {
    let config = MeshConfig::default();
    let grid = reshape(&column_major_stream(5, 7, 1), &config).unwrap();
    let (faces, _) = build_faces(&grid).unwrap();
    let max = ((5 + 1) * (7 + 1)) as u32;
    for face in &faces {
        for idx in face.indices() {
            assert!((1..=max).contains(&idx));
        }
    }
}

/// 顶点数与面索引方案一致: 最大索引恰好等于顶点数
#[test]
fn test_face_vert_indexing_compatible() {
    let config = MeshConfig::default();
    let grid = reshape(&column_major_stream(3, 4, 1), &config).unwrap();
    let (faces, _) = build_faces(&grid).unwrap();
    let verts = build_verts(&grid).unwrap();
    let max_idx = faces
        .iter()
        .flat_map(|f| f.indices())
        .max()
        .unwrap() as usize;
    assert_eq!(max_idx, verts.len());
}

/// 边界顶点高程只来自真实单元中心
#[test]
fn test_boundary_elevation_from_real_cells_only() {
    // 高程随行号线性增长
    let mut flat = Vec::new();
    for j in 0..3 {
        for i in 0..3 {
            flat.push(Sample::new(
                Point3D::new(j as f64, i as f64, i as f64 * 8.0),
                0,
            ));
        }
    }
    let config = MeshConfig::default();
    let grid = reshape(&flat, &config).unwrap();
    let verts = build_verts(&grid).unwrap();

    // 顶边顶点: ghost 行只复制首行高程, 平均仍为 0
    for j in 0..4 {
        assert!(verts[j].z.abs() < 1e-12, "顶边顶点 {} z={}", j, verts[j].z);
    }
    // 底边顶点: 高程等于末行单元高程 16, 而不是外推出的 24
    for j in 0..4 {
        let v = verts[3 * 4 + j];
        assert!((v.z - 16.0).abs() < 1e-12, "底边顶点 {} z={}", j, v.z);
    }
}

/// 两个三角形的法向一致（环绕方向固定）
#[test]
fn test_winding_consistent_normals() {
    let config = MeshConfig::default();
    let grid = reshape(&column_major_stream(2, 2, 1), &config).unwrap();
    let (faces, _) = build_faces(&grid).unwrap();
    let verts = build_verts(&grid).unwrap();

    let normal_z = |i0: u32, i1: u32, i2: u32| -> f64 {
        let p0 = verts[(i0 - 1) as usize];
        let p1 = verts[(i1 - 1) as usize];
        let p2 = verts[(i2 - 1) as usize];
        (p1 - p0).cross(&(p2 - p0)).z
    };

    let signs: Vec<f64> = faces
        .iter()
        .map(|f| normal_z(f.v0, f.v1, f.v2).signum())
        .collect();
    assert!(
        signs.windows(2).all(|w| w[0] == w[1]),
        "法向符号不一致: {:?}",
        signs
    );
}

/// 列主序再展平后重组结果不变
#[test]
fn test_reshape_idempotent_on_own_flattening() {
    let config = MeshConfig::default();
    let grid = reshape(&column_major_stream(4, 5, 2), &config).unwrap();
    let grid2 = reshape(&grid.flatten_column_major(), &config).unwrap();
    assert_eq!(grid, grid2);
}

/// 单点流必须报错而不是崩溃或静默返回空结果
#[test]
fn test_single_point_stream_rejected() {
    let flat = vec![Sample::new(Point3D::ZERO, 0)];
    let err = reshape(&flat, &MeshConfig::default()).unwrap_err();
    assert!(matches!(err, MeshError::StreamTooShort { .. }));
}

/// 土地利用编码集合汇总所有出现过的编码
#[test]
fn test_landuse_set_collection() {
    let mut flat = column_major_stream(2, 3, 0);
    // 物理列 1 的两个单元改成编码 5
    flat[2].landuse = 5;
    flat[3].landuse = 5;
    let config = MeshConfig::default();
    let grid = reshape(&flat, &config).unwrap();
    let (faces, landuses) = build_faces(&grid).unwrap();
    let verts = build_verts(&grid).unwrap();
    let mesh = TerrainMesh::new(grid.rows(), grid.cols(), verts, faces, landuses);

    assert_eq!(
        mesh.landuse_set.iter().copied().collect::<Vec<_>>(),
        vec![0, 5]
    );
}

/// 非默认容差: 更宽的容差仍能正确切列
#[test]
fn test_custom_tolerance() {
    let config = MeshConfig {
        collinearity_tolerance: 0.5,
        ..Default::default()
    };
    assert!(config.validate().is_ok());
    let grid = reshape(&column_major_stream(3, 3, 1), &config).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (3, 3));
}
