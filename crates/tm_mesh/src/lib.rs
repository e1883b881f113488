// crates/tm_mesh/src/lib.rs

//! TerraMesh 网格重建核心
//!
//! 把按扫描列排序的扁平单元中心采样流重建为带土地利用标签的
//! 三角地形网格。三个组件按流水线顺序消费：
//!
//! 1. [`grid::reshape`]: 扁平采样流 → 矩形单元网格
//! 2. [`faces::build_faces`]: 网格 → 三角面连接 + 平行的土地利用标签
//! 3. [`verts::build_verts`]: 网格 → 角点格全部顶点（ghost 外推 + 四邻平均）
//!
//! 面构建与顶点重建彼此独立地只读同一网格，输出的索引方案一致：
//! 角点 (i, j) 的 1-based 行主序索引为 `i*(C+1) + j + 1`。
//!
//! # 模块结构
//!
//! - [`sample`]: 采样点类型与原点平移
//! - [`grid`]: 单元网格与列流重组
//! - [`faces`]: 三角面连接
//! - [`verts`]: 顶点重建
//! - [`mesh`]: 输出容器
//! - [`config`]: 重建配置
//! - [`error`]: 错误类型
//!
//! # 示例
//!
//! ```
//! use tm_mesh::{build_faces, build_verts, reshape, MeshConfig, RawSample, Sample};
//! use tm_geo::Point2D;
//!
//! // 2x2 网格的列主序采样流
//! let raw = [
//!     RawSample::new(0.0, 0.0, 0.0, Some(1)),
//!     RawSample::new(0.0, 1.0, 0.0, Some(1)),
//!     RawSample::new(1.0, 0.0, 0.0, Some(1)),
//!     RawSample::new(1.0, 1.0, 0.0, Some(1)),
//! ];
//! let config = MeshConfig::default();
//! let samples: Vec<Sample> = raw
//!     .iter()
//!     .map(|r| Sample::from_raw(r, Point2D::ZERO, config.default_landuse))
//!     .collect();
//!
//! let grid = reshape(&samples, &config).unwrap();
//! let (faces, landuses) = build_faces(&grid).unwrap();
//! let verts = build_verts(&grid).unwrap();
//!
//! assert_eq!(faces.len(), 8);
//! assert_eq!(landuses.len(), 8);
//! assert_eq!(verts.len(), 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod faces;
pub mod grid;
pub mod mesh;
pub mod sample;
pub mod verts;

// 重新导出核心类型
pub use config::MeshConfig;
pub use error::{MeshError, MeshResult};
pub use faces::{build_faces, TriFace};
pub use grid::{reshape, CellGrid};
pub use mesh::TerrainMesh;
pub use sample::{RawSample, Sample, DEFAULT_LANDUSE};
pub use verts::build_verts;
