// crates/tm_workflow/src/runner.rs

//! 流水线运行器
//!
//! 按固定顺序驱动三个重建阶段，在阶段之间轮询协作取消标志。
//! 算法本身不可中断，取消粒度就是阶段；每个阶段的耗时与输入
//! 规模成正比，有界可预期。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tm_foundation::TmError;
use tm_geo::Point2D;
use tm_mesh::{
    build_faces, build_verts, reshape, MeshConfig, MeshError, RawSample, Sample, TerrainMesh,
};

use crate::events::{EventDispatcher, PipelineEvent, PipelineStage};

/// 运行器错误
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 网格重建错误
    #[error("网格重建错误: {0}")]
    Mesh(#[from] MeshError),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] TmError),

    /// 取消
    #[error("流水线在 {stage} 阶段前被取消")]
    Cancelled {
        /// 取消时即将进入的阶段
        stage: PipelineStage,
    },
}

impl From<PipelineError> for TmError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Mesh(mesh_err) => mesh_err.into(),
            PipelineError::Config(tm_err) => tm_err,
            PipelineError::Cancelled { .. } => TmError::TaskCancelled,
        }
    }
}

/// 取消句柄
///
/// 可跨线程克隆传递，宿主持有它在阶段间隙请求终止。
#[derive(Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    /// 请求取消
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// 是否已请求取消
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// 网格重建流水线
///
/// # 示例
///
/// ```
/// use tm_workflow::MeshPipeline;
/// use tm_mesh::{MeshConfig, RawSample};
/// use tm_geo::Point2D;
///
/// let raw = [
///     RawSample::new(0.0, 0.0, 0.0, Some(1)),
///     RawSample::new(0.0, 1.0, 0.0, Some(1)),
///     RawSample::new(1.0, 0.0, 0.0, Some(1)),
///     RawSample::new(1.0, 1.0, 0.0, Some(1)),
/// ];
/// let pipeline = MeshPipeline::new(MeshConfig::default());
/// let mesh = pipeline.run(&raw, Point2D::ZERO).unwrap();
/// assert_eq!(mesh.n_faces(), 8);
/// ```
pub struct MeshPipeline {
    config: MeshConfig,
    events: EventDispatcher,
    cancelled: Arc<AtomicBool>,
}

impl MeshPipeline {
    /// 创建流水线
    pub fn new(config: MeshConfig) -> Self {
        Self {
            config,
            events: EventDispatcher::new(),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 事件分发器，用于注册监听
    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    /// 获取取消句柄
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            flag: self.cancelled.clone(),
        }
    }

    /// 执行完整重建
    ///
    /// 原始记录先减去域原点得到局部坐标，随后依次执行列流重组、
    /// 面构建、顶点重建。阶段之间轮询取消标志，被取消的运行返回
    /// [`PipelineError::Cancelled`]，绝不返回部分网格。
    pub fn run(
        &self,
        raw: &[RawSample],
        origin: Point2D,
    ) -> Result<TerrainMesh, PipelineError> {
        match self.run_stages(raw, origin) {
            Ok(mesh) => {
                self.events.emit(&PipelineEvent::Completed {
                    n_verts: mesh.n_verts(),
                    n_faces: mesh.n_faces(),
                });
                Ok(mesh)
            }
            Err(PipelineError::Cancelled { stage }) => {
                log::info!("流水线在 {} 阶段前取消", stage);
                self.events.emit(&PipelineEvent::Cancelled { stage });
                Err(PipelineError::Cancelled { stage })
            }
            Err(err) => {
                self.events.emit(&PipelineEvent::Failed {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn run_stages(
        &self,
        raw: &[RawSample],
        origin: Point2D,
    ) -> Result<TerrainMesh, PipelineError> {
        self.config.validate()?;

        // 采集记录平移到相对原点坐标
        let samples: Vec<Sample> = raw
            .iter()
            .map(|r| Sample::from_raw(r, origin, self.config.default_landuse))
            .collect();

        self.check_cancelled(PipelineStage::Reshape)?;
        let grid = self.stage(PipelineStage::Reshape, || reshape(&samples, &self.config))?;

        self.check_cancelled(PipelineStage::BuildFaces)?;
        let (faces, landuses) = self.stage(PipelineStage::BuildFaces, || build_faces(&grid))?;

        self.check_cancelled(PipelineStage::BuildVerts)?;
        let verts = self.stage(PipelineStage::BuildVerts, || build_verts(&grid))?;

        Ok(TerrainMesh::new(
            grid.rows(),
            grid.cols(),
            verts,
            faces,
            landuses,
        ))
    }

    /// 执行单个阶段并发出开始/完成事件
    fn stage<T>(
        &self,
        stage: PipelineStage,
        f: impl FnOnce() -> Result<T, MeshError>,
    ) -> Result<T, PipelineError> {
        log::info!("流水线阶段开始: {}", stage);
        self.events.emit(&PipelineEvent::StageStarted { stage });
        let result = f()?;
        self.events.emit(&PipelineEvent::StageCompleted { stage });
        Ok(result)
    }

    fn check_cancelled(&self, stage: PipelineStage) -> Result<(), PipelineError> {
        if self.cancelled.load(Ordering::SeqCst) {
            return Err(PipelineError::Cancelled { stage });
        }
        Ok(())
    }
}
