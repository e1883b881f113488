// crates/tm_workflow/src/events.rs

//! 事件系统模块
//!
//! 提供流水线阶段事件的定义和分发机制。宿主通过监听器
//! 获知阶段开始/结束，用于进度展示。

use parking_lot::RwLock;
use std::sync::Arc;

/// 流水线阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// 列流重组
    Reshape,
    /// 面构建
    BuildFaces,
    /// 顶点重建
    BuildVerts,
}

impl PipelineStage {
    /// 获取阶段名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reshape => "Reshape",
            Self::BuildFaces => "BuildFaces",
            Self::BuildVerts => "BuildVerts",
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 流水线事件
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    /// 阶段已开始
    StageStarted {
        /// 阶段
        stage: PipelineStage,
    },
    /// 阶段已完成
    StageCompleted {
        /// 阶段
        stage: PipelineStage,
    },
    /// 流水线已完成
    Completed {
        /// 顶点数
        n_verts: usize,
        /// 面数
        n_faces: usize,
    },
    /// 流水线被取消
    Cancelled {
        /// 取消时即将进入的阶段
        stage: PipelineStage,
    },
    /// 流水线失败
    Failed {
        /// 错误信息
        message: String,
    },
}

impl PipelineEvent {
    /// 获取事件名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::StageStarted { .. } => "StageStarted",
            Self::StageCompleted { .. } => "StageCompleted",
            Self::Completed { .. } => "Completed",
            Self::Cancelled { .. } => "Cancelled",
            Self::Failed { .. } => "Failed",
        }
    }
}

/// 事件监听器trait
pub trait EventListener: Send + Sync {
    /// 处理事件
    fn on_event(&self, event: &PipelineEvent);

    /// 获取监听器名称 (用于调试)
    fn name(&self) -> &str {
        "anonymous"
    }
}

/// 函数式事件监听器
pub struct FnListener<F>
where
    F: Fn(&PipelineEvent) + Send + Sync,
{
    name: String,
    handler: F,
}

impl<F> FnListener<F>
where
    F: Fn(&PipelineEvent) + Send + Sync,
{
    /// 创建函数式监听器
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }
}

impl<F> EventListener for FnListener<F>
where
    F: Fn(&PipelineEvent) + Send + Sync,
{
    fn on_event(&self, event: &PipelineEvent) {
        (self.handler)(event);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// 事件分发器
#[derive(Default)]
pub struct EventDispatcher {
    listeners: RwLock<Vec<Arc<dyn EventListener>>>,
}

impl EventDispatcher {
    /// 创建新的事件分发器
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// 添加监听器
    pub fn add_listener(&self, listener: Arc<dyn EventListener>) {
        let name = listener.name().to_string();
        self.listeners.write().push(listener);
        log::debug!("注册事件监听器: {}", name);
    }

    /// 添加函数式监听器
    pub fn add_fn_listener<F>(&self, name: impl Into<String>, handler: F)
    where
        F: Fn(&PipelineEvent) + Send + Sync + 'static,
    {
        self.add_listener(Arc::new(FnListener::new(name, handler)));
    }

    /// 分发事件到所有监听器
    pub fn emit(&self, event: &PipelineEvent) {
        for listener in self.listeners.read().iter() {
            listener.on_event(event);
        }
    }

    /// 监听器数量
    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }
}
