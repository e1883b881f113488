// crates/tm_mesh/src/config.rs

//! 网格重建配置
//!
//! 使用纯 f64/i32 参数，便于 JSON 序列化，构建时统一验证。

use serde::{Deserialize, Serialize};
use tm_foundation::{TmError, TmResult};

use crate::sample::DEFAULT_LANDUSE;

/// 网格重建配置
///
/// # 示例
///
/// ```
/// use tm_mesh::MeshConfig;
///
/// let config = MeshConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.collinearity_tolerance, 0.1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshConfig {
    /// 列判定的共线容差
    ///
    /// 扫描列推断比较当前点与列首方向的夹角余弦，|cos| 大于该值
    /// 视为同列。0.1 为经验调定值，未经实测数据确认不要修改。
    #[serde(default = "default_collinearity_tolerance")]
    pub collinearity_tolerance: f64,

    /// 缺省土地利用编码
    #[serde(default = "default_landuse")]
    pub default_landuse: i32,
}

fn default_collinearity_tolerance() -> f64 {
    0.1
}

fn default_landuse() -> i32 {
    DEFAULT_LANDUSE
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            collinearity_tolerance: default_collinearity_tolerance(),
            default_landuse: default_landuse(),
        }
    }
}

impl MeshConfig {
    /// 验证配置参数
    pub fn validate(&self) -> TmResult<()> {
        if !self.collinearity_tolerance.is_finite() {
            return Err(TmError::invalid_config(
                "collinearity_tolerance",
                self.collinearity_tolerance.to_string(),
                "必须为有限数",
            ));
        }
        if self.collinearity_tolerance <= 0.0 || self.collinearity_tolerance >= 1.0 {
            return Err(TmError::invalid_config(
                "collinearity_tolerance",
                self.collinearity_tolerance.to_string(),
                "必须在 (0, 1) 范围内",
            ));
        }
        Ok(())
    }
}
