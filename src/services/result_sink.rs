//! 结果写入服务 - 业务能力层
//!
//! 只负责"追加一行结果"能力，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::CsvRecord;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// 结果写入服务
///
/// 职责：
/// - 固定字段顺序、固定分隔符，一次调用写一整行
/// - 多个任务并发调用时整行互斥写入，不会交错
/// - 不缓冲、不重试；写入失败只影响当前任务
pub struct ResultSink<W> {
    writer: Mutex<W>,
    delimiter: char,
    null_placeholder: String,
}

impl ResultSink<File> {
    /// 以追加模式打开输出文件（不存在时创建）
    pub fn open_append(
        path: &Path,
        delimiter: char,
        null_placeholder: impl Into<String>,
    ) -> AppResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| AppError::OutputOpen {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self::new(file, delimiter, null_placeholder))
    }
}

impl<W: Write> ResultSink<W> {
    pub fn new(writer: W, delimiter: char, null_placeholder: impl Into<String>) -> Self {
        Self {
            writer: Mutex::new(writer),
            delimiter,
            null_placeholder: null_placeholder.into(),
        }
    }

    /// 渲染一行（不含换行符）
    ///
    /// 字段中的分隔符替换为逗号、换行替换为空格，保证一条记录恰好一行。
    pub fn render(&self, record: &impl CsvRecord) -> String {
        let delimiter = self.delimiter.to_string();
        record
            .fields()
            .into_iter()
            .map(|field| match field {
                Some(value) => self.sanitize(&value),
                None => self.null_placeholder.clone(),
            })
            .collect::<Vec<_>>()
            .join(delimiter.as_str())
    }

    /// 追加一条记录
    pub fn append(&self, record: &impl CsvRecord) -> AppResult<()> {
        let mut line = self.render(record);
        line.push('\n');

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(AppError::SinkWrite)?;

        debug!("写入结果: {}", line.trim_end());
        Ok(())
    }

    /// 取回底层写入器
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn sanitize(&self, value: &str) -> String {
        let replacement = if self.delimiter == ',' { ' ' } else { ',' };
        value
            .chars()
            .map(|c| match c {
                '\n' | '\r' => ' ',
                c if c == self.delimiter => replacement,
                c => c,
            })
            .collect()
    }
}
