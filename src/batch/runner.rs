//! # 工作线程池执行器
//!
//! 在固定大小的线程池上并行执行批内文件任务。
//!
//! ## 功能
//! - 基于 rayon 的有界线程池（默认逻辑 CPU 数）
//! - 结果顺序与输入顺序一致，与完成顺序无关
//! - 任一任务失败则整个批次失败，不返回部分结果
//! - 工作线程只发送完成计数，由调用线程回调进度
//! - `shutdown` 等待全部工作线程退出
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs` 调用
//! - 使用 `rayon` 进行并行计算, `num_cpus` 确定默认线程数

use crate::error::{CorpusError, Result};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc, Condvar, Mutex, PoisonError};

/// 存活工作线程计数，线程退出时递减
struct LiveThreads {
    count: Mutex<usize>,
    exited: Condvar,
}

impl LiveThreads {
    fn thread_exited(&self) {
        let mut count = self.count.lock().unwrap_or_else(PoisonError::into_inner);
        *count = count.saturating_sub(1);
        self.exited.notify_all();
    }

    fn wait_all(&self) {
        let mut count = self.count.lock().unwrap_or_else(PoisonError::into_inner);
        while *count > 0 {
            count = self
                .exited
                .wait(count)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}

/// 工作线程池
///
/// 丢弃 `WorkerPool` 会通知线程退出但不等待；
/// [`WorkerPool::shutdown`] 额外等待所有线程结束。
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    /// 并行作业数
    jobs: usize,
    live: Arc<LiveThreads>,
}

impl WorkerPool {
    /// 创建线程池，`jobs == 0` 表示使用全部逻辑 CPU
    pub fn new(jobs: usize) -> Result<Self> {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };

        let live = Arc::new(LiveThreads {
            count: Mutex::new(jobs),
            exited: Condvar::new(),
        });
        let on_exit = Arc::clone(&live);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .thread_name(|i| format!("txt2corpus-worker-{}", i))
            .exit_handler(move |_| on_exit.thread_exited())
            .build()
            .map_err(|e| CorpusError::ThreadPool(e.to_string()))?;

        Ok(Self { pool, jobs, live })
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理一个批次的文件
    ///
    /// `task` 在工作线程上执行；`on_complete` 只在调用线程上执行，
    /// 参数为本批次已完成的文件数。
    pub fn execute<T, F, P>(&self, files: &[PathBuf], task: F, mut on_complete: P) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&Path) -> Result<T> + Sync,
        P: FnMut(usize),
    {
        let (tx, rx) = mpsc::channel::<()>();
        let mut outcome: Option<Result<Vec<T>>> = None;
        let slot = &mut outcome;
        let task = &task;

        self.pool.in_place_scope(|scope| {
            scope.spawn(move |_| {
                let results = files
                    .par_iter()
                    .map_with(tx, |tx, path| {
                        let result = task(path.as_path());
                        if result.is_ok() {
                            // 接收端只在整个批次结束后才关闭
                            let _ = tx.send(());
                        }
                        result
                    })
                    .collect::<Result<Vec<T>>>();
                *slot = Some(results);
            });

            let mut completed = 0;
            for () in rx.iter() {
                completed += 1;
                on_complete(completed);
            }
        });

        outcome.unwrap_or_else(|| {
            Err(CorpusError::ThreadPool(
                "worker pool finished without producing batch results".to_string(),
            ))
        })
    }

    /// 关闭线程池并等待所有工作线程退出
    pub fn shutdown(self) {
        let live = Arc::clone(&self.live);
        drop(self);
        live.wait_all();
    }
}
