// crates/tm_workflow/src/lib.rs

//! TerraMesh 流水线编排模块
//!
//! 把网格重建的三个阶段串成一条可观测、可协作取消的流水线。
//!
//! # 模块结构
//!
//! - [`events`]: 阶段事件和分发
//! - [`runner`]: 流水线运行器
//!
//! # 示例
//!
//! ```
//! use tm_workflow::{MeshPipeline, PipelineEvent};
//! use tm_mesh::{MeshConfig, RawSample};
//! use tm_geo::Point2D;
//!
//! let raw = [
//!     RawSample::new(0.0, 0.0, 10.0, Some(3)),
//!     RawSample::new(0.0, 1.0, 10.0, Some(3)),
//!     RawSample::new(1.0, 0.0, 10.0, Some(3)),
//!     RawSample::new(1.0, 1.0, 10.0, Some(3)),
//! ];
//!
//! let pipeline = MeshPipeline::new(MeshConfig::default());
//! pipeline.events().add_fn_listener("progress", |event| {
//!     if let PipelineEvent::StageStarted { stage } = event {
//!         println!("阶段开始: {}", stage);
//!     }
//! });
//!
//! let mesh = pipeline.run(&raw, Point2D::ZERO).unwrap();
//! assert_eq!(mesh.n_verts(), 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod events;
pub mod runner;

// 重新导出核心类型
pub use events::{EventDispatcher, EventListener, FnListener, PipelineEvent, PipelineStage};
pub use runner::{CancelHandle, MeshPipeline, PipelineError};
