/// 可写入结果文件的一行记录
///
/// 字段顺序固定；`None` 表示未设置的可选字段，由 `ResultSink` 渲染为占位文本。
pub trait CsvRecord {
    fn fields(&self) -> Vec<Option<String>>;
}

/// 布尔标志在输出中渲染为 `0` / `1`
pub(crate) fn flag(value: bool) -> Option<String> {
    Some(if value { "1" } else { "0" }.to_string())
}
