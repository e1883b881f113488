// crates/tm_mesh/src/sample.rs

//! 采样点类型
//!
//! 输入是一串四边形单元中心的采样点，每个点携带位置和土地利用编码。
//! 采集方按扫描列顺序提供原始记录，本模块负责把原始记录平移到
//! 相对域原点的局部坐标。

use serde::{Deserialize, Serialize};
use tm_geo::{Point2D, Point3D};

/// 缺省土地利用编码（原始数据缺失时使用）
pub const DEFAULT_LANDUSE: i32 = 0;

/// 原始采样记录
///
/// 来自上游采集方的未平移记录：绝对平面坐标加可选的土地利用编码。
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// X坐标（绝对，米）
    pub x: f64,
    /// Y坐标（绝对，米）
    pub y: f64,
    /// 高程（绝对，米）
    pub z: f64,
    /// 土地利用编码，缺失时为 None
    pub landuse: Option<i32>,
}

impl RawSample {
    /// 创建原始采样记录
    pub const fn new(x: f64, y: f64, z: f64, landuse: Option<i32>) -> Self {
        Self { x, y, z, landuse }
    }
}

/// 单元中心采样点
///
/// x、y 已相对域原点平移（保持数值幅度小而稳定），z 为绝对高程。
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// 单元中心位置（x、y 相对原点，z 绝对）
    pub position: Point3D,
    /// 土地利用编码
    pub landuse: i32,
}

impl Sample {
    /// 创建采样点
    pub const fn new(position: Point3D, landuse: i32) -> Self {
        Self { position, landuse }
    }

    /// 从原始记录创建，减去域原点偏移
    ///
    /// 缺失的土地利用编码回退到 `default_landuse`。
    pub fn from_raw(raw: &RawSample, origin: Point2D, default_landuse: i32) -> Self {
        Self {
            position: Point3D::new(raw.x - origin.x, raw.y - origin.y, raw.z),
            landuse: raw.landuse.unwrap_or(default_landuse),
        }
    }

    /// 水平位置（忽略高程）
    #[inline]
    #[must_use]
    pub fn xy(&self) -> Point2D {
        self.position.xy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_origin_offset() {
        let raw = RawSample::new(500010.0, 4000020.0, 132.5, Some(3));
        let origin = Point2D::new(500000.0, 4000000.0);
        let s = Sample::from_raw(&raw, origin, DEFAULT_LANDUSE);
        assert_eq!(s.position, Point3D::new(10.0, 20.0, 132.5));
        assert_eq!(s.landuse, 3);
    }

    #[test]
    fn test_from_raw_missing_landuse() {
        let raw = RawSample::new(1.0, 2.0, 3.0, None);
        let s = Sample::from_raw(&raw, Point2D::ZERO, DEFAULT_LANDUSE);
        assert_eq!(s.landuse, DEFAULT_LANDUSE);
    }

    #[test]
    fn test_z_not_translated() {
        let raw = RawSample::new(0.0, 0.0, 99.0, None);
        let s = Sample::from_raw(&raw, Point2D::new(10.0, 10.0), 0);
        assert_eq!(s.position.z, 99.0);
    }
}
