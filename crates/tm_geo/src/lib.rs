// crates/tm_geo/src/lib.rs

//! TerraMesh 几何模块
//!
//! 提供平面投影坐标下的几何类型。
//!
//! 本项目只处理已投影、已相对域原点平移的坐标，
//! 坐标参考系统转换由上游数据采集方完成。
//!
//! # 模块
//!
//! - `geometry`: 几何类型 (Point2D, Point3D)
//!
//! # 示例
//!
//! ```
//! use tm_geo::{Point2D, Point3D};
//!
//! let origin = Point2D::new(500000.0, 4000000.0);
//! let sample = Point2D::new(500010.0, 4000020.0);
//! let relative = sample - origin;
//! assert_eq!(relative, Point2D::new(10.0, 20.0));
//!
//! let center = Point3D::from_xy_z(relative, 120.5);
//! assert_eq!(center.z, 120.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod geometry;

// 重导出常用类型
pub use geometry::{Point2D, Point3D};

/// 预导入模块
pub mod prelude {
    pub use crate::geometry::{Point2D, Point3D};
}
