#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Config {
    /// 空序列分块时不产生任何分组（默认会产生一个空分组）
    SkipEmptyChunk,
}

#[inline]
pub(crate) fn skip_empty_chunk(configs: &[Config]) -> bool {
    configs.contains(&Config::SkipEmptyChunk)
}
